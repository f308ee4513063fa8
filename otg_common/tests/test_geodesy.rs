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

use otg_common::angle::{normalize_360, normalize_heading};
use otg_common::geo_constants::{EARTH_RADIUS_NM, FT_PER_METER};
use otg_common::geodesy::{bearing, distance, geodetic_to_cartesian, project};

// run with "cargo test -p otg_common -- --nocapture"

#[test]
fn test_project_bearing_roundtrip () {
    // step away from KSFO along a few headings, then take the bearing back
    let (lat0, lon0) = (37.618806, -122.375416);

    for hdg in [0.0, 45.0, 137.0, 211.5, 359.0] {
        let (lat1, lon1) = project( lat0, lon0, hdg, 25.0);
        let back = bearing( lat1, lon1, lat0, lon0);
        let reciprocal = normalize_360( hdg + 180.0);

        // 25 NM is small against the earth radius so the back bearing is close to reciprocal
        let diff = normalize_360( back - reciprocal + 180.0) - 180.0;
        assert!( diff.abs() < 0.5, "hdg {hdg}: back bearing {back} vs reciprocal {reciprocal}");
    }
}

#[test]
fn test_project_distance_consistent () {
    let (lat0, lon0) = (37.618806, -122.375416);
    let (lat1, lon1) = project( lat0, lon0, 82.0, 10.0);
    let d = distance( lat0, lon0, lat1, lon1);
    assert!( (d - 10.0).abs() < 1e-6, "distance after 10 NM step was {d}");
}

#[test]
fn test_distance_colocated_is_zero () {
    assert_eq!( distance( 37.0, -122.0, 37.0, -122.0), 0.0);
    assert_eq!( distance( 0.0, 0.0, 0.0, 0.0), 0.0);
    // near the pole the law-of-cosines argument can drift just above 1
    assert_eq!( distance( 89.9999999, 10.0, 89.9999999, 10.0), 0.0);
    assert_eq!( distance( -45.123456789, 170.5, -45.123456789, 170.5), 0.0);
}

#[test]
fn test_bearing_cardinals () {
    let b = bearing( 0.0, 0.0, 1.0, 0.0);
    assert!( b.abs() < 1e-9, "due north bearing was {b}");
    let b = bearing( 0.0, 0.0, 0.0, 1.0);
    assert!( (b - 90.0).abs() < 1e-9, "due east bearing was {b}");
    let b = bearing( 1.0, 0.0, 0.0, 0.0);
    assert!( (b - 180.0).abs() < 1e-9, "due south bearing was {b}");
    let b = bearing( 0.0, 1.0, 0.0, 0.0);
    assert!( (b - 270.0).abs() < 1e-9, "due west bearing was {b}");
}

#[test]
fn test_wgs84_cartesian () {
    // on the equator at the prime meridian, sea level: x is the equatorial radius
    let p = geodetic_to_cartesian( 0.0, 0.0, 0.0);
    assert!( (p.x - 6378137.0).abs() < 1e-6);
    assert!( p.y.abs() < 1e-6);
    assert!( p.z.abs() < 1e-6);

    // altitude is carried in feet
    let p1 = geodetic_to_cartesian( 0.0, 0.0, 1000.0);
    assert!( (p1.x - p.x - 1000.0 / FT_PER_METER).abs() < 1e-6);

    // at the north pole z is the polar radius (a * squash)
    let p = geodetic_to_cartesian( 0.0, 90.0, 0.0);
    assert!( (p.z - 6356752.3142).abs() < 1e-3, "polar z was {}", p.z);
}

#[test]
fn test_heading_normalization () {
    assert_eq!( normalize_heading( 360), 0);
    assert_eq!( normalize_heading( -1), 359);
    assert_eq!( normalize_heading( 725), 5);
    assert_eq!( normalize_heading( 0), 0);
}
