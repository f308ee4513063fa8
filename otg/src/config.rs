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

use std::{fs, path::Path, time::Duration};
use serde::{Serialize,Deserialize};

use crate::errors::{OtgError, Result};

/// FGMEMBERS relay address, used when nothing else is configured
pub const DEFAULT_SERVER_ADDRESS: &str = "172.93.103.204";
pub const DEFAULT_SERVER_PORT: u16 = 16605;

/// position reports go out every update interval; the flight state advances at the
/// same cadence
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Deserialize,Serialize,Debug,Clone)]
#[serde(default)]
pub struct TargetConfig {
    pub server_address: String,
    pub server_port: u16,
    pub update_interval: Duration,
}

impl Default for TargetConfig {
    fn default ()->Self {
        TargetConfig {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            update_interval: DEFAULT_UPDATE_INTERVAL,
        }
    }
}

impl TargetConfig {
    pub fn server_url (&self)->String {
        format!( "{}:{}", self.server_address, self.server_port)
    }
}

pub fn load_config (path: impl AsRef<Path>)->Result<TargetConfig> {
    let input = fs::read_to_string( path)?;
    ron::from_str( &input).map_err( |e| OtgError::ConfigError( e.to_string()))
}
