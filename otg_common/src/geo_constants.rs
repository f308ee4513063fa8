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

/// common geodetic constants that should be consistent throughout otg-rs.
/// The squash factor and the ft/m ratio are the exact literals the FlightGear/simgear
/// sources use - the wire partner computes with these, so we do too.

/// semi major axis in meters
pub const EQUATORIAL_EARTH_RADIUS: f64 = 6378137.0;

/// WGS84 squash factor (semi minor / semi major axis)
pub const WGS84_SQUASH: f64 = 0.9966471893352525192801545;

/// first eccentricity squared, |1 - squash²|
pub const E2: f64 = 1.0 - WGS84_SQUASH * WGS84_SQUASH;

/// meters per nautical mile (1 NM is defined as 1852 m)
pub const METERS_PER_NM: f64 = 1852.0;

/// earth radius used for spherical navigation, in nautical miles
pub const EARTH_RADIUS_NM: f64 = EQUATORIAL_EARTH_RADIUS / METERS_PER_NM;

/// feet per meter
pub const FT_PER_METER: f64 = 3.2808399;
