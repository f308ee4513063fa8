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

/// the static FGMS property registry: code -> (property node name, wire type).
/// Encoding only ever appends the two transponder entries, but third-party packets
/// carry many more, so the decode side keeps the full table. It is a process-wide
/// constant built once, never a per-message allocation.

use std::collections::HashMap;
use lazy_static::lazy_static;

use crate::buffer::PacketBuffer;

/// transponder code (int) - one of the two properties we transmit
pub const PROP_XPDR_CODE: i32 = 1500;
/// transponder altitude (int) - the other transmitted property
pub const PROP_XPDR_ALT: i32 = 1501;
pub const PROP_XPDR_IDENT: i32 = 1502;
pub const PROP_XPDR_MODE: i32 = 1503;

pub const PROP_COMM_FREQ: i32 = 10001;
pub const PROP_CHAT: i32 = 10002;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum PropertyType {
    Int,
    Float,
    Bool,
    BuggyString,
}

/// a property value decoded from (or to be encoded into) a position payload
#[derive(Debug,Clone,PartialEq)]
pub enum PropertyValue {
    Int(i32),
    Float(f32),
    Bool(bool),
    Str(String),
}

impl PropertyType {
    pub fn unpack (&self, buf: &mut PacketBuffer)->PropertyValue {
        match self {
            PropertyType::Int => PropertyValue::Int( buf.unpack_i32()),
            PropertyType::Float => PropertyValue::Float( buf.unpack_f32()),
            PropertyType::Bool => PropertyValue::Bool( buf.unpack_bool()),
            PropertyType::BuggyString => PropertyValue::Str( buf.unpack_buggy_string()),
        }
    }
}

#[derive(Debug,Clone)]
pub struct Property {
    pub name: String,
    pub ptype: PropertyType,
}

pub fn lookup_property (code: i32)->Option<&'static Property> {
    PROPERTIES.get( &code)
}

pub fn property_code_by_name (name: &str)->Option<i32> {
    PROPERTIES.iter().find( |(_,p)| p.name == name).map( |(code,_)| *code)
}

lazy_static! {
    pub static ref PROPERTIES: HashMap<i32,Property> = build_property_table();
}

fn add (map: &mut HashMap<i32,Property>, code: i32, name: &str, ptype: PropertyType) {
    map.insert( code, Property { name: name.to_string(), ptype });
}

fn build_property_table ()->HashMap<i32,Property> {
    use PropertyType::*;
    let mut m = HashMap::new();

    add( &mut m, 100, "surface-positions/left-aileron-pos-norm", Float);
    add( &mut m, 101, "surface-positions/right-aileron-pos-norm", Float);
    add( &mut m, 102, "surface-positions/elevator-pos-norm", Float);
    add( &mut m, 103, "surface-positions/rudder-pos-norm", Float);
    add( &mut m, 104, "surface-positions/flap-pos-norm", Float);
    add( &mut m, 105, "surface-positions/speedbrake-pos-norm", Float);
    add( &mut m, 106, "gear/tailhook/position-norm", Float);
    add( &mut m, 107, "gear/launchbar/position-norm", Float);
    add( &mut m, 108, "gear/launchbar/state", BuggyString);
    add( &mut m, 109, "gear/launchbar/holdback-position-norm", Float);
    add( &mut m, 110, "canopy/position-norm", Float);
    add( &mut m, 111, "surface-positions/wing-pos-norm", Float);
    add( &mut m, 112, "surface-positions/wing-fold-pos-norm", Float);

    for i in 0..5 {
        add( &mut m, 200 + 10 * i, &format!( "gear/gear[{i}]/compression-norm"), Float);
        add( &mut m, 201 + 10 * i, &format!( "gear/gear[{i}]/position-norm"), Float);
    }

    for i in 0..10 {
        add( &mut m, 300 + 10 * i, &format!( "engines/engine[{i}]/n1"), Float);
        add( &mut m, 301 + 10 * i, &format!( "engines/engine[{i}]/n2"), Float);
        add( &mut m, 302 + 10 * i, &format!( "engines/engine[{i}]/rpm"), Float);
    }

    add( &mut m, 800, "rotors/main/rpm", Float);
    add( &mut m, 801, "rotors/tail/rpm", Float);
    for i in 0..4 {
        add( &mut m, 810 + i, &format!( "rotors/main/blade[{i}]/position-deg"), Float);
        add( &mut m, 820 + i, &format!( "rotors/main/blade[{i}]/flap-deg"), Float);
    }
    add( &mut m, 830, "rotors/tail/blade[0]/position-deg", Float);
    add( &mut m, 831, "rotors/tail/blade[1]/position-deg", Float);

    add( &mut m, 900, "sim/hitches/aerotow/tow/length", Float);
    add( &mut m, 901, "sim/hitches/aerotow/tow/elastic-constant", Float);
    add( &mut m, 902, "sim/hitches/aerotow/tow/weight-per-m-kg-m", Float);
    add( &mut m, 903, "sim/hitches/aerotow/tow/dist", Float);
    add( &mut m, 904, "sim/hitches/aerotow/tow/connected-to-property-node", Bool);
    add( &mut m, 905, "sim/hitches/aerotow/tow/connected-to-ai-or-mp-callsign", BuggyString);
    add( &mut m, 906, "sim/hitches/aerotow/tow/brake-force", Float);
    add( &mut m, 907, "sim/hitches/aerotow/tow/end-force-x", Float);
    add( &mut m, 908, "sim/hitches/aerotow/tow/end-force-y", Float);
    add( &mut m, 909, "sim/hitches/aerotow/tow/end-force-z", Float);
    add( &mut m, 930, "sim/hitches/aerotow/is-slave", Bool);
    add( &mut m, 931, "sim/hitches/aerotow/speed-in-tow-direction", Float);
    add( &mut m, 932, "sim/hitches/aerotow/open", Bool);
    add( &mut m, 933, "sim/hitches/aerotow/local-pos-x", Float);
    add( &mut m, 934, "sim/hitches/aerotow/local-pos-y", Float);
    add( &mut m, 935, "sim/hitches/aerotow/local-pos-z", Float);

    add( &mut m, 1001, "controls/flight/slats", Float);
    add( &mut m, 1002, "controls/flight/speedbrake", Float);
    add( &mut m, 1003, "controls/flight/spoilers", Float);
    add( &mut m, 1004, "controls/gear/gear-down", Float);
    add( &mut m, 1005, "controls/lighting/nav-lights", Float);
    add( &mut m, 1006, "controls/armament/station[0]/jettison-all", Bool);

    add( &mut m, 1100, "sim/model/variant", Int);
    add( &mut m, 1101, "sim/model/livery/file", BuggyString);

    add( &mut m, 1200, "environment/wildfire/data", BuggyString);
    add( &mut m, 1201, "environment/contrail", Int);

    add( &mut m, 1300, "tanker", Int);

    add( &mut m, 1400, "scenery/events", BuggyString);

    add( &mut m, PROP_XPDR_CODE, "instrumentation/transponder/transmitted-id", Int);
    add( &mut m, PROP_XPDR_ALT, "instrumentation/transponder/altitude", Int);
    add( &mut m, PROP_XPDR_IDENT, "instrumentation/transponder/ident", Bool);
    add( &mut m, PROP_XPDR_MODE, "instrumentation/transponder/inputs/mode", Int);

    add( &mut m, PROP_COMM_FREQ, "sim/multiplay/transmission-freq-hz", BuggyString);
    add( &mut m, PROP_CHAT, "sim/multiplay/chat", BuggyString);

    for i in 0..20 {
        add( &mut m, 10100 + i, &format!( "sim/multiplay/generic/string[{i}]"), BuggyString);
        add( &mut m, 10200 + i, &format!( "sim/multiplay/generic/float[{i}]"), Float);
        add( &mut m, 10300 + i, &format!( "sim/multiplay/generic/int[{i}]"), Int);
    }

    m
}
