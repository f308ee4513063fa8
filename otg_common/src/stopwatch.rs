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

/// process stopwatch. Position reports carry an elapsed-seconds timestamp the
/// receiver only uses as a liveness/ordering hint, so a monotonic clock anchored
/// at first use is all we need.

use std::time::Instant;
use lazy_static::lazy_static;

lazy_static! {
    static ref STOPWATCH_START: Instant = Instant::now();
}

/// seconds since process start (first call), monotonic
pub fn elapsed_seconds () -> f64 {
    STOPWATCH_START.elapsed().as_secs_f64()
}
