/*
 * Copyright © 2026, the otg-rs project contributors. All rights reserved.
 *
 * The "otg-rs" software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

/// the target registry: owns the collection of flying targets and their transmitter
/// tasks. This is the surface operator-facing collaborators (REPL, scenario loader)
/// talk to - creation, selection, command dispatch, removal, reload, global pause.

use std::sync::{Arc, RwLock};
use dashmap::DashMap;
use kanal::AsyncSender;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::TargetConfig;
use crate::errors::{OtgError, Result};
use crate::scenario::{AircraftRec, Runway, Scenario};
use crate::target::{Target, TargetCmd};
use crate::transmitter::run_transmitter;

/// per-target command inbox depth; commands are rare compared to ticks
const INBOX_BOUND: usize = 16;

pub struct TargetHandle {
    pub callsign: String,
    cmd_tx: AsyncSender<TargetCmd>,
    task: JoinHandle<()>,
}

pub struct TargetRegistry {
    config: Arc<TargetConfig>,
    scenario: RwLock<Arc<Scenario>>,
    targets: Arc<DashMap<String,TargetHandle>>,
}

impl TargetRegistry {

    pub fn new (config: TargetConfig, scenario: Scenario)->TargetRegistry {
        TargetRegistry {
            config: Arc::new( config),
            scenario: RwLock::new( Arc::new( scenario)),
            targets: Arc::new( DashMap::new()),
        }
    }

    //--- creation

    /// create a target and its transmitter for every scenario aircraft
    pub async fn spawn_all (&self)->Result<()> {
        let scenario = self.current_scenario();
        for rec in &scenario.aircraft {
            self.spawn_target( rec, &scenario).await?;
        }
        info!( "spawned {} targets", self.targets.len());
        Ok(())
    }

    async fn spawn_target (&self, rec: &AircraftRec, scenario: &Scenario)->Result<()> {
        let navaids = Arc::new( scenario.navaids.clone());
        let target = Target::new( rec, navaids, scenario.magvar, self.config.update_interval);

        let socket = UdpSocket::bind( "0.0.0.0:0").await?;
        socket.connect( self.config.server_url()).await?;

        let (cmd_tx, cmd_rx) = kanal::bounded_async( INBOX_BOUND);

        let callsign = rec.callsign.clone();
        let task = tokio::spawn( run_transmitter(
            target, socket, self.config.update_interval, cmd_rx, self.targets.clone()
        ));

        self.targets.insert( callsign.clone(), TargetHandle { callsign, cmd_tx, task });
        Ok(())
    }

    //--- selection

    pub fn len (&self)->usize { self.targets.len() }
    pub fn is_empty (&self)->bool { self.targets.is_empty() }

    pub fn callsigns (&self)->Vec<String> {
        self.targets.iter().map( |e| e.key().clone()).collect()
    }

    pub fn contains (&self, callsign: &str)->bool {
        self.targets.contains_key( callsign)
    }

    /// resolve an operator-typed selection to a callsign: an exact match wins,
    /// otherwise the key has to be a substring of exactly one callsign
    pub fn find (&self, key: &str)->Result<String> {
        if self.targets.contains_key( key) {
            return Ok( key.to_string());
        }

        let mut matches = self.targets.iter().filter( |e| e.key().contains( key));
        match (matches.next(), matches.next()) {
            (Some(e), None) => Ok( e.key().clone()),
            (Some(_), Some(_)) => Err( OtgError::AmbiguousTarget( key.to_string())),
            _ => Err( OtgError::NoSuchTarget( key.to_string())),
        }
    }

    /// look up a runway record in the current scenario (for set-runway commands)
    pub fn runway (&self, id: &str)->Result<Runway> {
        self.current_scenario().runway( id).cloned()
            .ok_or_else( || OtgError::NoSuchRunway( id.to_string()))
    }

    pub fn current_scenario (&self)->Arc<Scenario> {
        self.scenario.read().unwrap().clone()
    }

    //--- command dispatch

    /// send a command into a target's inbox; it takes effect at the top of the
    /// target's next tick
    pub async fn send (&self, callsign: &str, cmd: TargetCmd)->Result<()> {
        let tx = {
            let entry = self.targets.get( callsign)
                .ok_or_else( || OtgError::NoSuchTarget( callsign.to_string()))?;
            entry.cmd_tx.clone()
        };
        tx.send( cmd).await?;
        Ok(())
    }

    /// pause or unpause every target
    pub async fn set_paused_all (&self, paused: bool)->Result<()> {
        for callsign in self.callsigns() {
            // a target may land and remove itself while we iterate
            let _ = self.send( &callsign, TargetCmd::SetPaused( paused)).await;
        }
        Ok(())
    }

    //--- removal / teardown

    /// stop a target's transmitter and drop it from the registry. Cooperative: the
    /// loop observes the terminate on its next wake, an in-flight send is not cut off.
    pub async fn remove (&self, callsign: &str)->Result<()> {
        let (_, handle) = self.targets.remove( callsign)
            .ok_or_else( || OtgError::NoSuchTarget( callsign.to_string()))?;
        let _ = handle.cmd_tx.send( TargetCmd::Terminate).await;
        info!( "removed target {}", callsign);
        Ok(())
    }

    /// tear down all targets (explicit terminate instruction, or prelude to a reload)
    pub async fn terminate_all (&self) {
        for callsign in self.callsigns() {
            let _ = self.remove( &callsign).await;
        }
    }

    /// drop all targets and rebuild the run from a new scenario
    pub async fn reload (&self, scenario: Scenario)->Result<()> {
        self.terminate_all().await;
        *self.scenario.write().unwrap() = Arc::new( scenario);
        self.spawn_all().await
    }
}
