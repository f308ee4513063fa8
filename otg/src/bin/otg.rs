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

//! run a scenario against a FlightGear multiplayer relay: spawn all scenario
//! aircraft, unpause them, and keep transmitting until ctrl-c.

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use otg::config::{load_config, TargetConfig};
use otg::registry::TargetRegistry;
use otg::scenario::load_scenario;

#[derive(Parser)]
#[command(about = "drive synthetic aircraft on a FlightGear multiplayer server")]
struct Args {
    /// scenario file (RON)
    scenario: PathBuf,

    /// config file (RON); FGMEMBERS defaults if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// keep all aircraft paused after spawning
    #[arg(long)]
    paused: bool,
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new( "info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config( path)?,
        None => TargetConfig::default(),
    };
    let scenario = load_scenario( &args.scenario)?;

    info!( "sending position reports to {}", config.server_url());

    let registry = TargetRegistry::new( config, scenario);
    registry.spawn_all().await?;

    if !args.paused {
        registry.set_paused_all( false).await?;
    }

    tokio::signal::ctrl_c().await?;
    info!( "terminating {} targets", registry.len());
    registry.terminate_all().await;

    Ok(())
}
