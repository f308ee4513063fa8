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

/// orientation math for the position payload. The wire format does not carry the
/// orientation quaternion itself but a 3-vector "rotation vector" (axis scaled by
/// angle), computed from the composition of an earth-frame and a body-frame rotation.
/// Translated from the simgear conventions the wire partner uses.

use std::f64::consts::PI;

const EPSILON: f64 = 1e-8;

/// unit quaternion (w,x,y,z)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Quaternion {

    pub fn new (w: f64, x: f64, y: f64, z: f64)->Quaternion {
        Quaternion {w,x,y,z}
    }

    /// rotation of the local-level frame at (lon,lat) into the earth-centered frame
    pub fn from_earth_position (lon_deg: f64, lat_deg: f64)->Quaternion {
        let zd2 = lon_deg.to_radians() / 2.0;
        let yd2 = -PI / 4.0 - lat_deg.to_radians() / 2.0;

        let szd2 = zd2.sin();
        let syd2 = yd2.sin();
        let czd2 = zd2.cos();
        let cyd2 = yd2.cos();

        Quaternion::new( czd2 * cyd2, -szd2 * syd2, czd2 * syd2, szd2 * cyd2)
    }

    /// body rotation from z-y-x Euler angles (radians): yaw, pitch, roll
    pub fn from_euler (z: f64, y: f64, x: f64)->Quaternion {
        let zd2 = z / 2.0;
        let yd2 = y / 2.0;
        let xd2 = x / 2.0;

        let szd2 = zd2.sin();
        let syd2 = yd2.sin();
        let sxd2 = xd2.sin();
        let czd2 = zd2.cos();
        let cyd2 = yd2.cos();
        let cxd2 = xd2.cos();

        let cxd2czd2 = cxd2 * czd2;
        let cxd2szd2 = cxd2 * szd2;
        let sxd2szd2 = sxd2 * szd2;
        let sxd2czd2 = sxd2 * czd2;

        Quaternion::new(
            cxd2czd2 * cyd2 + sxd2szd2 * syd2,
            sxd2czd2 * cyd2 - cxd2szd2 * syd2,
            cxd2czd2 * syd2 + sxd2szd2 * cyd2,
            cxd2szd2 * cyd2 - sxd2czd2 * syd2
        )
    }

    /// quaternion product - non-commutative, self is applied first
    pub fn multiply (&self, q: &Quaternion)->Quaternion {
        Quaternion::new(
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y - self.x * q.z + self.y * q.w + self.z * q.x,
            self.w * q.z + self.x * q.y - self.y * q.x + self.z * q.w
        )
    }

    /// compact axis-times-angle encoding. A near-identity rotation would divide by a
    /// near-zero sine, so it yields the fixed fallback vector (1,0,0).
    pub fn to_rotation_vector (&self)->(f64,f64,f64) {
        let acw = self.w.clamp( -1.0, 1.0).acos();
        let sa = acw.sin();

        if sa.abs() < EPSILON {
            (1.0, 0.0, 0.0)
        } else {
            let angle = 2.0 * acw;
            let k = angle / sa;
            (k * self.x, k * self.y, k * self.z)
        }
    }
}

/// the rotation vector for an aircraft at (lon,lat) with the given heading, pitch and
/// roll (degrees), as transmitted in the position payload
pub fn rotation_vector (lon: f64, lat: f64, hdg: f64, pitch: f64, roll: f64)->(f64,f64,f64) {
    let body = Quaternion::from_euler( hdg.to_radians(), pitch.to_radians(), roll.to_radians());
    Quaternion::from_earth_position( lon, lat).multiply( &body).to_rotation_vector()
}
