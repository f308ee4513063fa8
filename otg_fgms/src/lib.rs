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

//! codec for the FlightGear multiplayer (FGMS) wire format. This includes the funny
//! legacy behavior the relay expects bit-for-bit: big endian primitives, fixed-size
//! null padded strings, "buggy strings" encoded as int sequences with 16-byte block
//! padding, and zero-filled reads from truncated datagrams.

pub mod buffer;
pub mod errors;
pub mod orientation;
pub mod properties;
pub mod protocol;

/// magic tag every FGMS packet starts with
pub const MAGIC: &[u8; 4] = b"FGFS";

/// protocol version 1.1, as it appears on the wire
pub const PROTO_VERSION: [u8; 4] = [0x00, 0x01, 0x00, 0x01];

/// message type code for position reports
pub const MSG_POSITION: i32 = 7;

/// header size in bytes (magic + version + type + length + 2 reserved words + callsign)
pub const HEADER_LEN: usize = 32;

/// callsign field width in the header
pub const CALLSIGN_LEN: usize = 8;

/// model path field width in the position payload
pub const MODEL_LEN: usize = 96;

pub const MAX_PACKET_SIZE: usize = 2048;

/// replacement for code points a buggy string fails to decode
pub const SUBSTITUTE_CHAR: char = '_';
