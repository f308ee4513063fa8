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
#![allow(unused)]

use otg_fgms::{HEADER_LEN, MSG_POSITION};
use otg_fgms::buffer::PacketBuffer;
use otg_fgms::orientation::{rotation_vector, Quaternion};
use otg_fgms::properties::{lookup_property, property_code_by_name, PropertyType, PropertyValue,
                           PROP_XPDR_ALT, PROP_XPDR_CODE};
use otg_fgms::protocol::{decode_position_message, make_position_message, position_message, PositionInfo};

fn test_info<'a> ()->PositionInfo<'a> {
    PositionInfo {
        callsign: "OTG001",
        model: "Aircraft/777/Models/777-200ER.xml",
        lat: 37.618806,
        lon: -122.375416,
        alt_ft: 8000.0,
        heading: 283.0,
        speed_kt: 240.0,
        squawk: 4701,
    }
}

// run with "cargo test -p otg_fgms -- --nocapture"

#[test]
fn test_declared_length_matches_payload () {
    // the length field is 32 + payload length for any payload content
    for n in [0usize, 1, 7, 200, 517] {
        let mut payload = PacketBuffer::new();
        payload.append_bytes( &vec![0xabu8; n]);
        let packet = make_position_message( "OTG001", &payload);

        let bytes = packet.as_bytes();
        assert_eq!( bytes.len(), HEADER_LEN + n);
        let declared = i32::from_be_bytes( [bytes[12], bytes[13], bytes[14], bytes[15]]);
        assert_eq!( declared as usize, HEADER_LEN + n);
    }
}

#[test]
fn test_header_layout () {
    let packet = position_message( &test_info());

    assert_eq!( &packet[0..4], b"FGFS");
    assert_eq!( &packet[4..8], &[0, 1, 0, 1]); // protocol version 1.1
    assert_eq!( i32::from_be_bytes( [packet[8], packet[9], packet[10], packet[11]]), MSG_POSITION);
    assert_eq!( &packet[16..24], &[0u8; 8]); // reserved
    assert_eq!( &packet[24..32], b"OTG001\0\0");
}

#[test]
fn test_position_message_roundtrip () {
    let info = test_info();
    let packet = position_message( &info);
    let report = decode_position_message( &packet).unwrap();

    assert_eq!( report.callsign, "OTG001");
    assert_eq!( report.model, info.model);
    assert_eq!( report.declared_len as usize, packet.len());
    assert_eq!( report.lag, 0.0);
    assert_eq!( report.velocity.0, (info.speed_kt / 6.0) as f32);

    // transponder code and altitude are the only transmitted properties
    assert_eq!( report.properties, vec![
        (PROP_XPDR_CODE, PropertyValue::Int( 4701)),
        (PROP_XPDR_ALT, PropertyValue::Int( 8000)),
    ]);

    // cartesian position is in the earth radius ballpark
    let r = report.position.length();
    assert!( r > 6.3e6 && r < 6.4e6, "position length was {r}");
}

#[test]
fn test_decode_tolerates_unknown_property () {
    let info = test_info();
    let mut payload = otg_fgms::protocol::position_payload( &info);

    payload.pack_i32( 31337); // not in the registry
    payload.pack_i32( 99);
    payload.pack_i32( PROP_XPDR_CODE);
    payload.pack_i32( 4701);

    let packet = make_position_message( info.callsign, &payload);
    let report = decode_position_message( packet.as_bytes()).unwrap();

    // the unknown code is skipped, the entry after it still decodes
    assert_eq!( report.properties, vec![(PROP_XPDR_CODE, PropertyValue::Int( 4701))]);
}

#[test]
fn test_decode_truncated_datagram_completes () {
    let packet = position_message( &test_info());
    // cut into the position payload - decode still completes with zero fill
    let report = decode_position_message( &packet[..64]).unwrap();
    assert_eq!( report.callsign, "OTG001");
    assert_eq!( report.position.x, 0.0);
    assert!( report.properties.is_empty());
}

#[test]
fn test_decode_rejects_bad_magic () {
    let mut packet = position_message( &test_info());
    packet[0] = b'X';
    assert!( decode_position_message( &packet).is_err());
}

#[test]
fn test_property_registry () {
    assert_eq!( property_code_by_name( "instrumentation/transponder/transmitted-id"), Some( PROP_XPDR_CODE));
    assert_eq!( lookup_property( PROP_XPDR_ALT).unwrap().ptype, PropertyType::Int);
    assert_eq!( lookup_property( 10119).unwrap().ptype, PropertyType::BuggyString);
    assert_eq!( lookup_property( 392).unwrap().name, "engines/engine[9]/rpm");
    assert!( lookup_property( 31337).is_none());
}

#[test]
fn test_rotation_vector_near_identity_fallback () {
    // an (almost) identity rotation must not divide by the near-zero sine
    let q = Quaternion::new( 1.0, 0.0, 0.0, 0.0);
    assert_eq!( q.to_rotation_vector(), (1.0, 0.0, 0.0));

    // w drifting just above 1 from floating point error is clamped, not NaN
    let q = Quaternion::new( 1.0 + 1e-12, 0.0, 0.0, 0.0);
    assert_eq!( q.to_rotation_vector(), (1.0, 0.0, 0.0));
}

#[test]
fn test_rotation_vector_axis_angle () {
    // 90 deg rotation about z: w = cos(45 deg), z = sin(45 deg)
    let half = std::f64::consts::FRAC_PI_4;
    let q = Quaternion::new( half.cos(), 0.0, 0.0, half.sin());
    let (x, y, z) = q.to_rotation_vector();
    assert!( x.abs() < 1e-12 && y.abs() < 1e-12);
    assert!( (z - std::f64::consts::FRAC_PI_2).abs() < 1e-9, "z was {z}");
}

#[test]
fn test_quaternion_product_order_matters () {
    let a = Quaternion::from_euler( 1.0, 0.0, 0.0);
    let b = Quaternion::from_euler( 0.0, 1.0, 0.0);
    assert_ne!( a.multiply( &b), b.multiply( &a));
}

#[test]
fn test_rotation_vector_is_finite () {
    for (lon, lat, hdg) in [(-122.4, 37.6, 283.0), (0.0, 0.0, 0.0), (179.9, -89.9, 359.0)] {
        let (x, y, z) = rotation_vector( lon, lat, hdg, 0.0, 0.0);
        assert!( x.is_finite() && y.is_finite() && z.is_finite());
    }
}
