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

/// the per-aircraft transmitter: one timed task that owns its `Target`. Every tick it
/// drains the command inbox, advances the flight state, and sends a position report
/// over the target's UDP socket. The target is never touched from outside the task -
/// commands are the only write path, which gives us the single-writer-per-tick
/// discipline without any locking.

use std::{sync::Arc, time::Duration};
use dashmap::DashMap;
use kanal::AsyncReceiver;
use tokio::net::UdpSocket;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use otg_fgms::protocol::position_message;

use crate::registry::TargetHandle;
use crate::target::{Target, TargetCmd};

/// run one target's transmit loop until it is terminated or completes its approach.
/// Socket send failures are logged and tolerated - one lost datagram does not end the
/// session. A paused target keeps broadcasting its last computed position.
pub async fn run_transmitter (
    mut target: Target,
    socket: UdpSocket,
    update_interval: Duration,
    inbox: AsyncReceiver<TargetCmd>,
    targets: Arc<DashMap<String,TargetHandle>>,
) {
    let mut ticker = interval( update_interval);
    ticker.set_missed_tick_behavior( MissedTickBehavior::Delay);

    info!( "transmitter for {} started", target.callsign);

    loop {
        ticker.tick().await;

        // consume operator commands at the top of the tick
        loop {
            match inbox.try_recv() {
                Ok( Some( TargetCmd::Terminate)) => {
                    info!( "transmitter for {} terminated", target.callsign);
                    return;
                }
                Ok( Some( cmd)) => {
                    debug!( "{} <- {:?}", target.callsign, cmd);
                    target.apply( cmd);
                }
                Ok( None) => break, // inbox drained
                Err(_) => { // all senders gone - nobody can reach us anymore
                    info!( "transmitter for {} orphaned, stopping", target.callsign);
                    return;
                }
            }
        }

        let landed = target.step();

        let packet = position_message( &target.position_info());
        if let Err(e) = socket.send( &packet).await {
            warn!( "could not send position report for {}: {}", target.callsign, e);
        }

        if landed {
            info!( "{} completed its approach, removing", target.callsign);
            targets.remove( &target.callsign);
            return;
        }
    }
}
