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

//! the target generator: synthetic aircraft that fly routes, headings and ILS
//! approaches, each broadcasting FGMS position reports from its own timed task.
//!
//! The flow is: a [`registry::TargetRegistry`] creates a [`target::Target`] per
//! scenario aircraft and spawns a [`transmitter`] task bound to it. The transmitter
//! drains the target's command inbox, advances the flight state one tick, encodes a
//! position report via `otg_fgms` and sends it over UDP, every update interval.
//! Operator-facing collaborators (a REPL, scenario parsers) talk to the registry and
//! the per-target command channels only - nothing else writes into a flying target.

pub mod config;
pub mod errors;
pub mod registry;
pub mod scenario;
pub mod target;
pub mod transmitter;
