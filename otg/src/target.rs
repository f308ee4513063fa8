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

/// the flight-state engine. A `Target` is one synthetic aircraft: a control-mode
/// state machine (route / heading / approach) advanced once per transmission tick by
/// its transmitter task. Headings live in an integer-degree frame that already has
/// the scenario's magnetic variation folded in; operator-supplied values are
/// converted on the way in. The model is intentionally simple - fixed per-tick unit
/// steps, no banking or acceleration limits.

use std::{sync::Arc, time::Duration};

use otg_common::angle::normalize_heading;
use otg_common::geodesy::{bearing, distance, project};
use otg_fgms::protocol::PositionInfo;

use crate::scenario::{AircraftRec, Navaid, Runway};

/// threshold for sequencing to the next waypoint, and for deleting an aircraft that
/// closed on its runway touchdown point
pub const MAGIC_DISTANCE_NM: f64 = 0.4;

/// added to the intercept heading for small corrections onto the final approach course
pub const SHALLOW_INTERCEPT_DEG: i32 = 5;

/// inside this range from the runway the aircraft bleeds down to approach speed
pub const FREE_SPEED_DISTANCE_NM: f64 = 5.0;

/// total speed reduction over the free speed range, so the aircraft crosses the
/// runway 40 kt slower than it entered the range
pub const FREE_SPEED_BLEED_KT: f64 = 40.0;

/// kt per NM of the approach speed bleed
pub const FREE_SPEED_INCREMENT: f64 = FREE_SPEED_BLEED_KT / FREE_SPEED_DISTANCE_NM;

/// climb/descent rate in ft per minute
pub const CLIMB_DESCENT_FPM: f64 = 1800.0;

/// fallback approach speed if no snapshot was taken yet
pub const DEFAULT_INITIAL_APPROACH_SPD: f64 = 180.0;

/// exactly one control mode is active at a time
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum FlightMode {
    Route,    // follow the ordered waypoint list
    Heading,  // hold a commanded heading
    Approach, // capture and fly a runway centerline/glidepath
}

/// operator mutations, consumed from the target's inbox at the top of each tick.
/// Headings and courses arrive in the operator's (magnetic) frame.
#[derive(Debug,Clone)]
pub enum TargetCmd {
    SetHeading(i32),
    SetAltitude(i32),
    SetSpeed(i32),
    SetRoute(Vec<String>),
    SetRunway(Runway),
    NextWaypoint,
    SetPaused(bool),
    SetSquawk(i32),
    Terminate,
}

/// cached fields of the active waypoint - copies, not references
#[derive(Debug,Clone,Copy)]
struct TargetWaypoint {
    lat: f64,
    lon: f64,
    alt: i32, // crossing altitude, 0 = none
}

/// cached fields of the approach runway
#[derive(Debug,Clone,Copy)]
struct TargetRunway {
    lat: f64,
    lon: f64,
    crs: i32,  // inbound course, internal frame
    elev: i32, // ft
}

/// per-tick step sizes derived from the update interval
#[derive(Debug,Clone,Copy)]
pub struct StepRates {
    pub updates_per_hour: f64,
    pub climb_rate: i32, // ft per tick
}

impl StepRates {
    pub fn new (update_interval: Duration)->StepRates {
        let secs = update_interval.as_secs_f64();
        let updates_per_min = 60.0 / secs;
        StepRates {
            updates_per_hour: 3600.0 / secs,
            // never below 1 ft - a sub-33 ms cadence would otherwise round the
            // per-tick step to zero and altitude would stop converging
            climb_rate: ((CLIMB_DESCENT_FPM / updates_per_min) as i32).max( 1),
        }
    }
}

pub struct Target {
    pub callsign: String,
    pub squawk: i32,
    pub model: String,

    pub lat: f64,
    pub lon: f64,
    pub alt: i32,  // ft
    pub spd: f64,  // kt

    pub heading: i32,        // internal frame, always in [0,360)
    pub target_heading: i32,
    pub target_alt: i32,
    pub target_spd: f64,

    pub mode: FlightMode,
    pub on_profile: bool, // whether a pending crossing restriction is still honored
    pub paused: bool,

    route: Vec<String>,
    wpt_index: usize,
    wpt: Option<TargetWaypoint>,

    rwy: Option<TargetRunway>,
    initial_appr_spd: f64,

    magvar: i32,
    navaids: Arc<Vec<Navaid>>,
    rates: StepRates,
}

impl Target {

    pub fn new (rec: &AircraftRec, navaids: Arc<Vec<Navaid>>, magvar: i32, update_interval: Duration)->Target {
        let mut target = Target {
            callsign: rec.callsign.clone(),
            squawk: rec.squawk,
            model: rec.model.clone(),
            lat: rec.lat,
            lon: rec.lon,
            alt: rec.alt,
            spd: rec.speed as f64,
            heading: 0,
            target_heading: 0,
            target_alt: rec.alt,
            target_spd: rec.speed as f64,
            mode: FlightMode::Route,
            on_profile: true,
            paused: true, // scenarios start frozen until the operator unpauses
            route: rec.route.clone(),
            wpt_index: 0,
            wpt: None,
            rwy: None,
            initial_appr_spd: DEFAULT_INITIAL_APPROACH_SPD,
            magvar,
            navaids,
            rates: StepRates::new( update_interval),
        };

        target.cache_target_waypoint();
        if let Some(wpt) = target.wpt { // get a bearing to the first waypoint
            target.heading = target.bearing_to( wpt.lat, wpt.lon);
            target.target_heading = target.heading;
        }
        target
    }

    //--- accessors

    /// everything the codec needs for the next position report
    pub fn position_info (&self)->PositionInfo<'_> {
        PositionInfo {
            callsign: &self.callsign,
            model: &self.model,
            lat: self.lat,
            lon: self.lon,
            alt_ft: self.alt as f64,
            heading: self.heading as f64,
            speed_kt: self.spd,
            squawk: self.squawk,
        }
    }

    pub fn active_waypoint (&self)->Option<&str> {
        self.route.get( self.wpt_index).map( |s| s.as_str())
    }

    //--- command surface

    pub fn apply (&mut self, cmd: TargetCmd) {
        match cmd {
            TargetCmd::SetHeading(hdg) => self.set_target_heading( hdg),
            TargetCmd::SetAltitude(alt) => self.set_target_altitude( alt),
            TargetCmd::SetSpeed(spd) => self.set_target_speed( spd),
            TargetCmd::SetRoute(route) => self.set_route( route),
            TargetCmd::SetRunway(rwy) => self.set_target_runway( &rwy),
            TargetCmd::NextWaypoint => self.advance_waypoint(),
            TargetCmd::SetPaused(paused) => self.paused = paused,
            TargetCmd::SetSquawk(squawk) => self.squawk = squawk,
            TargetCmd::Terminate => {} // observed by the transmitter loop, not by us
        }
    }

    /// hold a commanded (magnetic) heading
    pub fn set_target_heading (&mut self, heading: i32) {
        self.mode = FlightMode::Heading;
        self.target_heading = normalize_heading( heading - self.magvar);
    }

    /// an explicit altitude instruction overrides any pending crossing restriction
    pub fn set_target_altitude (&mut self, alt: i32) {
        self.on_profile = false;
        self.target_alt = alt;
    }

    pub fn set_target_speed (&mut self, spd: i32) {
        self.target_spd = spd as f64;
    }

    pub fn set_route (&mut self, route: Vec<String>) {
        self.mode = FlightMode::Route;
        self.wpt_index = 0;
        self.route = route;
        self.cache_target_waypoint();
    }

    /// cleared for the approach: aim at the touchdown point on the given inbound course
    pub fn set_target_runway (&mut self, rwy: &Runway) {
        self.mode = FlightMode::Approach;
        self.rwy = Some( TargetRunway {
            lat: rwy.lat,
            lon: rwy.lon,
            crs: rwy.course - self.magvar,
            elev: rwy.elev,
        });
    }

    /// proceed direct to the next waypoint of the route
    pub fn advance_waypoint (&mut self) {
        self.wpt_index += 1;
        self.cache_target_waypoint();
    }

    //--- the per-tick state machine

    /// advance the flight state by one tick. Returns true once the aircraft closed
    /// within [`MAGIC_DISTANCE_NM`] of its approach touchdown point - the caller is
    /// expected to remove it then.
    pub fn step (&mut self)->bool {
        if self.paused { return false }

        let mut landed = false;
        match self.mode {
            FlightMode::Route => self.fly_route(),
            FlightMode::Heading => self.adjust_heading(),
            FlightMode::Approach => landed = self.check_ils_feather(),
        }
        self.adjust_alt();
        self.adjust_speed();
        self.advance_position();

        landed
    }

    /// turn one degree towards the target heading, in the rotational direction that
    /// is at most 180 degrees away. An exact 180 degree split turns left.
    fn turn_one_degree (&mut self, target_hdg: i32) {
        let target_hdg = normalize_heading( target_hdg);
        if self.heading != target_hdg {
            let turn_right = normalize_heading( self.heading - target_hdg) > 180;
            self.heading = normalize_heading( if turn_right { self.heading + 1 } else { self.heading - 1 });
        }
    }

    fn adjust_heading (&mut self) {
        if self.heading != self.target_heading {
            self.turn_one_degree( self.target_heading);
        }
    }

    /// step towards the target altitude at the climb/descent rate, snapping exactly
    /// onto the target for the final partial step
    fn adjust_alt (&mut self) {
        if self.alt != self.target_alt {
            let rate = self.rates.climb_rate;
            if (self.alt - self.target_alt).abs() >= rate {
                self.alt += if self.alt > self.target_alt { -rate } else { rate };
            } else {
                self.alt = self.target_alt;
            }
        }
    }

    /// step one knot towards the target speed, snapping for the final partial knot.
    /// Speed never goes below zero.
    fn adjust_speed (&mut self) {
        if self.spd != self.target_spd {
            let diff = self.target_spd - self.spd;
            if diff.abs() < 1.0 {
                self.spd = self.target_spd;
            } else {
                self.spd += diff.signum();
            }
            if self.spd < 0.0 { self.spd = 0.0 }
        }
    }

    /// project the position forward along the current heading by one tick worth of
    /// ground track
    fn advance_position (&mut self) {
        let dist = self.spd / self.rates.updates_per_hour;
        let (lat, lon) = project( self.lat, self.lon, self.heading as f64, dist);
        self.lat = lat;
        self.lon = lon;
    }

    fn bearing_to (&self, lat: f64, lon: f64)->i32 {
        bearing( self.lat, self.lon, lat, lon).round() as i32
    }

    //--- ROUTE mode

    fn fly_route (&mut self) {
        let Some(wpt) = self.wpt else { return };

        let dme = distance( self.lat, self.lon, wpt.lat, wpt.lon);
        let current_bearing = self.bearing_to( wpt.lat, wpt.lon);

        // honor a pre-specified crossing altitude once inside the top-of-descent range
        if wpt.alt != 0 {
            let tod = (self.alt - wpt.alt).abs() as f64 / 1000.0 * 3.0;
            if dme <= tod && self.on_profile {
                self.target_alt = wpt.alt;
            }
        }

        if dme > MAGIC_DISTANCE_NM {
            if (self.heading - current_bearing).abs() >= 1 {
                self.turn_one_degree( current_bearing);
            }
        } else {
            self.wpt_index += 1;
            self.cache_target_waypoint();
        }
    }

    /// refresh the cached coordinates of the active waypoint. A route that ran out or
    /// references an unknown navaid falls back to holding the current heading.
    fn cache_target_waypoint (&mut self) {
        let rec = self.route.get( self.wpt_index)
            .and_then( |name| self.navaids.iter().find( |n| &n.name == name));

        match rec {
            Some(navaid) => {
                self.wpt = Some( TargetWaypoint {
                    lat: navaid.lat,
                    lon: navaid.lon,
                    alt: navaid.alt.unwrap_or( 0),
                });
            }
            None => {
                // TODO check the variation sign here - set_target_heading subtracts the
                // offset this adds back, which looks like a double adjustment
                self.set_target_heading( self.heading + self.magvar);
            }
        }
    }

    //--- APPROACH mode

    /// check whether the aircraft is inside the localizer "feather": a 2 degree
    /// bearing window within 12 NM of the touchdown point, 1 degree beyond. Inside it
    /// we turn onto the centerline, outside we keep holding the commanded heading.
    fn check_ils_feather (&mut self)->bool {
        let Some(rwy) = self.rwy else { return false };

        let current_bearing = self.bearing_to( rwy.lat, rwy.lon);
        let dme = distance( self.lat, self.lon, rwy.lat, rwy.lon);

        if (current_bearing - rwy.crs).abs() <= 2 && dme < 12.0 {
            self.turn_to_centerline( current_bearing, rwy.crs);
        } else if (current_bearing - rwy.crs).abs() <= 1 && dme >= 12.0 {
            self.turn_to_centerline( current_bearing, rwy.crs);
        } else {
            self.turn_one_degree( self.target_heading);
        }

        self.descend_to_runway( rwy)
    }

    /// turn onto the centerline with a shallow intercept offset, signed towards the
    /// course from the side the bearing error is on
    fn turn_to_centerline (&mut self, brg: i32, crs: i32) {
        if brg == crs {
            self.turn_one_degree( brg);
        } else if brg > crs {
            self.turn_one_degree( brg + SHALLOW_INTERCEPT_DEG);
        } else {
            self.turn_one_degree( brg - SHALLOW_INTERCEPT_DEG);
        }
    }

    /// fly the 3 degree equivalent glidepath (300 ft/NM above field elevation) and
    /// bleed down to approach speed. Returns true once within [`MAGIC_DISTANCE_NM`]
    /// of the touchdown point - approach complete, no ground rollout is modeled.
    fn descend_to_runway (&mut self, rwy: TargetRunway)->bool {
        let dme = distance( self.lat, self.lon, rwy.lat, rwy.lon);
        let glidepath_alt = (300.0 * dme + rwy.elev as f64) as i32;

        // a capture snap, not a gradual descent: never stay above the glidepath
        if self.alt > glidepath_alt {
            self.alt = glidepath_alt;
            self.target_alt = glidepath_alt;
        }

        // remember the speed we entered the deceleration range with
        if dme.round() == FREE_SPEED_DISTANCE_NM + 1.0 {
            self.initial_appr_spd = self.spd;
        }

        if dme < FREE_SPEED_DISTANCE_NM && dme > MAGIC_DISTANCE_NM {
            let spd = (self.initial_appr_spd - (FREE_SPEED_DISTANCE_NM - dme) * FREE_SPEED_INCREMENT).max( 0.0);
            self.spd = spd;
            self.target_spd = spd;
            false
        } else {
            dme <= MAGIC_DISTANCE_NM
        }
    }
}
