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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,OtgError>;

#[derive(Error,Debug)]
pub enum OtgError {

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError(String),

    #[error("no such target {0}")]
    NoSuchTarget(String),

    #[error("ambiguous target selection {0}")]
    AmbiguousTarget(String),

    #[error("no such runway {0}")]
    NoSuchRunway(String),

    #[error("send to target failed {0}")]
    SendError( #[from] kanal::SendError),
}
