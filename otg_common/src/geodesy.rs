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

/// spherical navigation and WGS84 geodetic conversion. All angles are degrees,
/// all distances nautical miles unless a name says otherwise.
///
/// Note that we intentionally do not use uom here - the cartesian output feeds a
/// bit-exact wire format and has to stay plain f64 all the way through.

use serde::{Serialize,Deserialize};

use crate::angle::{normalize_360, wrap_latitude, wrap_longitude};
use crate::geo_constants::{EARTH_RADIUS_NM, EQUATORIAL_EARTH_RADIUS, E2, FT_PER_METER};

/// earth centered cartesian coordinates in meters
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Cartesian3 {
    pub fn new (x: f64, y: f64, z: f64)->Cartesian3 {
        Cartesian3{x,y,z}
    }

    pub fn zero ()->Cartesian3 {
        Cartesian3{x: 0.0, y: 0.0, z: 0.0}
    }

    pub fn length (&self) -> f64 {
        ((self.x * self.x) + (self.y * self.y) + (self.z * self.z)).sqrt()
    }
}

/// final position of a crow's flight from (lat,lon) with the given heading, as a
/// spherical direct geodesic step
pub fn project (lat: f64, lon: f64, heading_deg: f64, distance_nm: f64) -> (f64,f64) {
    let lat1 = lat.to_radians();
    let lon1 = lon.to_radians();
    let a = heading_deg.to_radians();
    let d = distance_nm / EARTH_RADIUS_NM;

    let lat2 = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * a.cos()).asin();
    let lon2 = lon1 + (a.sin() * d.sin() * lat1.cos()).atan2( d.cos() - lat1.sin() * lat2.sin());

    (wrap_latitude( lat2.to_degrees()), wrap_longitude( lon2.to_degrees()))
}

/// initial great circle bearing from (lat1,lon1) to (lat2,lon2), in [0,360)
pub fn bearing (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let theta = (dlon.sin() * lat2.cos()).atan2( lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos());
    normalize_360( theta.to_degrees())
}

/// great circle distance between two coordinates in NM, using the spherical law of cosines.
/// An arc cosine argument that falls outside [-1,1] from floating point error means
/// co-located points and yields 0, never a NaN.
pub fn distance (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    if a < -1.0 || a > 1.0 {
        0.0
    } else {
        a.acos() * EARTH_RADIUS_NM
    }
}

/// earth centered cartesian coordinates from geodetic coordinates on the WGS84 ellipsoid.
/// Translated from simgear/math/SGGeodesy.cxx, which is what the wire partner runs.
pub fn geodetic_to_cartesian (lon: f64, lat: f64, alt_ft: f64) -> Cartesian3 {
    let l = lon.to_radians();
    let phi = lat.to_radians();
    let h = alt_ft / FT_PER_METER;

    let sphi = phi.sin();
    let n = EQUATORIAL_EARTH_RADIUS / (1.0 - E2 * sphi * sphi).sqrt();
    let cphi = phi.cos();
    let slambda = l.sin();
    let clambda = l.cos();

    Cartesian3::new(
        (h + n) * cphi * clambda,
        (h + n) * cphi * slambda,
        (h + n - E2 * n) * sphi
    )
}
