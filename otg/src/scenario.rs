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

/// the (immutable) reference records a scenario hands the core: initial aircraft
/// states, navaids, runways and the magnetic variation for the run. Targets copy the
/// fields they need out of these records at lookup time, so later record mutation has
/// no effect on a flying target.

use std::{fs, path::Path};
use serde::{Serialize,Deserialize};

use crate::errors::{OtgError, Result};

/// named point with coordinates and an optional mandatory crossing altitude
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct Navaid {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub alt: Option<i32>, // crossing altitude in ft
}

/// runway touchdown point with the inbound (magnetic) course and field elevation
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct Runway {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub course: i32, // degrees magnetic
    pub elev: i32,   // ft
}

/// initial state for one synthetic aircraft
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct AircraftRec {
    pub callsign: String,
    pub squawk: i32,
    pub lat: f64,
    pub lon: f64,
    pub alt: i32,     // ft
    pub speed: i32,   // kt
    pub model: String,
    pub route: Vec<String>, // ordered waypoint name tokens
}

#[derive(Deserialize,Serialize,Debug,Clone,Default)]
pub struct Scenario {
    pub magvar: i32, // degrees, applied to operator supplied headings/courses
    pub navaids: Vec<Navaid>,
    pub runways: Vec<Runway>,
    pub aircraft: Vec<AircraftRec>,
}

impl Scenario {
    pub fn navaid (&self, name: &str)->Option<&Navaid> {
        self.navaids.iter().find( |n| n.name == name)
    }

    pub fn runway (&self, id: &str)->Option<&Runway> {
        self.runways.iter().find( |r| r.id == id)
    }
}

pub fn load_scenario (path: impl AsRef<Path>)->Result<Scenario> {
    let input = fs::read_to_string( path)?;
    ron::from_str( &input).map_err( |e| OtgError::ConfigError( e.to_string()))
}
