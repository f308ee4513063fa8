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

/// angle normalization helpers. The flight engine works in an integer-degree
/// heading frame, the geodesy functions in f64 degrees - both sets live here.

#[inline]
pub fn normalize_90 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    d.rem_euclid( 360.0)
}

/// normalize an integer heading into [0,360)
#[inline]
pub fn normalize_heading (deg: i32) -> i32 {
    deg.rem_euclid( 360)
}

/// shift a latitude back into [-90,90) after a geodesic step
#[inline]
pub fn wrap_latitude (deg: f64) -> f64 {
    (deg + 90.0).rem_euclid( 180.0) - 90.0
}

/// shift a longitude back into [-180,180) after a geodesic step
#[inline]
pub fn wrap_longitude (deg: f64) -> f64 {
    (deg + 180.0).rem_euclid( 360.0) - 180.0
}
