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

/// FGMS position report framing: a 32-byte header followed by a fixed 200-byte
/// position payload and a variable tail of property entries.

use tracing::debug;

use otg_common::geodesy::{geodetic_to_cartesian, Cartesian3};
use otg_common::stopwatch;

use crate::{CALLSIGN_LEN, HEADER_LEN, MAGIC, MODEL_LEN, MSG_POSITION, PROTO_VERSION};
use crate::buffer::PacketBuffer;
use crate::errors::{parse_error, Result};
use crate::orientation::rotation_vector;
use crate::properties::{lookup_property, PropertyValue, PROP_XPDR_ALT, PROP_XPDR_CODE};

/// everything the codec needs from an aircraft to emit one position report
#[derive(Debug,Clone)]
pub struct PositionInfo<'a> {
    pub callsign: &'a str,
    pub model: &'a str,
    pub lat: f64,
    pub lon: f64,
    pub alt_ft: f64,     // geometric altitude AMSL
    pub heading: f64,    // degrees, internal frame
    pub speed_kt: f64,
    pub squawk: i32,
}

/// frame a pre-built payload into a full packet: magic, protocol version, message
/// type, total length, two reserved words, padded callsign, payload
pub fn make_position_message (callsign: &str, payload: &PacketBuffer)->PacketBuffer {
    let mut packet = PacketBuffer::new();

    packet.append_bytes( MAGIC);
    packet.append_bytes( &PROTO_VERSION);
    packet.pack_i32( MSG_POSITION);
    packet.pack_i32( (HEADER_LEN + payload.len()) as i32);
    packet.append_bytes( &[0u8; 8]); // reserved
    packet.pack_string( CALLSIGN_LEN, callsign);
    packet.append_packed( payload);
    packet
}

/// the fixed part of the position payload: model path, stopwatch time, lag, WGS84
/// cartesian position, rotation vector, velocity heuristic, zeroed dynamics
pub fn position_payload (info: &PositionInfo)->PacketBuffer {
    let mut buf = PacketBuffer::new();

    buf.pack_string( MODEL_LEN, info.model);
    buf.pack_f64( stopwatch::elapsed_seconds());
    buf.pack_f64( 0.0); // lag

    let pos = geodetic_to_cartesian( info.lon, info.lat, info.alt_ft);
    buf.pack_f64( pos.x);
    buf.pack_f64( pos.y);
    buf.pack_f64( pos.z);

    let (ox, oy, oz) = rotation_vector( info.lon, info.lat, info.heading, 0.0, 0.0);
    buf.pack_f32( ox as f32);
    buf.pack_f32( oy as f32);
    buf.pack_f32( oz as f32);

    // speed/6 approximation so receivers can draw a predicted track line
    buf.pack_f32( (info.speed_kt / 6.0) as f32);
    buf.pack_f32( 0.0);
    buf.pack_f32( 0.0);

    for _ in 0..9 { // angular velocity, linear and angular acceleration
        buf.pack_f32( 0.0);
    }
    buf.append_bytes( &[0u8; 4]); // padding

    buf
}

/// build one complete outbound position report with the transponder properties
/// appended - those are the only two entries we transmit
pub fn position_message (info: &PositionInfo)->Vec<u8> {
    let mut payload = position_payload( info);

    payload.pack_i32( PROP_XPDR_CODE);
    payload.pack_i32( info.squawk);
    payload.pack_i32( PROP_XPDR_ALT);
    payload.pack_i32( info.alt_ft as i32);

    make_position_message( info.callsign, &payload).as_bytes().to_vec()
}

/// a decoded inbound position report
#[derive(Debug,Clone)]
pub struct PositionReport {
    pub callsign: String,
    pub declared_len: i32,
    pub model: String,
    pub time: f64,
    pub lag: f64,
    pub position: Cartesian3,
    pub orientation: (f32,f32,f32),
    pub velocity: (f32,f32,f32),
    pub properties: Vec<(i32,PropertyValue)>,
}

/// decode an inbound datagram. Short data never aborts - missing bytes read as
/// zeros - and unknown property codes are skipped without losing the rest of the
/// packet. Only a bad magic tag or a non-position message type is an error.
pub fn decode_position_message (datagram: &[u8])->Result<PositionReport> {
    let mut buf = PacketBuffer::from_bytes( datagram);

    let magic = buf.unpack_bytes( 4);
    if magic != MAGIC {
        return Err( parse_error!( "bad magic tag {:?}", magic));
    }
    let _version = buf.unpack_bytes( 4);

    let msg_type = buf.unpack_i32();
    if msg_type != MSG_POSITION {
        return Err( parse_error!( "not a position message (type {})", msg_type));
    }

    let declared_len = buf.unpack_i32();
    let _reserved = buf.unpack_bytes( 8);
    let callsign = buf.unpack_string( CALLSIGN_LEN);

    let model = buf.unpack_string( MODEL_LEN);
    let time = buf.unpack_f64();
    let lag = buf.unpack_f64();
    let position = Cartesian3::new( buf.unpack_f64(), buf.unpack_f64(), buf.unpack_f64());
    let orientation = (buf.unpack_f32(), buf.unpack_f32(), buf.unpack_f32());
    let velocity = (buf.unpack_f32(), buf.unpack_f32(), buf.unpack_f32());
    buf.unpack_bytes( 36); // zeroed dynamics
    buf.unpack_bytes( 4);  // padding

    let mut properties = Vec::new();
    while buf.len() >= 4 {
        let code = buf.unpack_i32();
        if let Some(prop) = lookup_property( code) {
            properties.push( (code, prop.ptype.unpack( &mut buf)));
        } else {
            // width is unknown for codes we don't have in the registry - skip an
            // int-sized value and keep going
            debug!( "skipping unknown property code {}", code);
            buf.unpack_bytes( 4);
        }
    }

    Ok( PositionReport { callsign, declared_len, model, time, lag, position, orientation, velocity, properties })
}
