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

use otg_fgms::buffer::PacketBuffer;

// run with "cargo test -p otg_fgms -- --nocapture"

#[test]
fn test_primitive_roundtrip () {
    let mut buf = PacketBuffer::new();
    buf.pack_i32( -42);
    buf.pack_f32( 1.5);
    buf.pack_f64( -2.25);
    buf.pack_bool( true);

    assert_eq!( buf.len(), 4 + 4 + 8 + 4);
    assert_eq!( buf.unpack_i32(), -42);
    assert_eq!( buf.unpack_f32(), 1.5);
    assert_eq!( buf.unpack_f64(), -2.25);
    assert_eq!( buf.unpack_bool(), true);
    assert!( buf.is_empty());
}

#[test]
fn test_big_endian_layout () {
    let mut buf = PacketBuffer::new();
    buf.pack_i32( 7);
    assert_eq!( buf.as_bytes(), &[0, 0, 0, 7]);
}

#[test]
fn test_string_field_truncation_and_padding () {
    // source is truncated to size-1 bytes, the rest of the field is zero filled
    let mut buf = PacketBuffer::new();
    buf.pack_string( 8, "DLH123456");
    assert_eq!( buf.as_bytes(), b"DLH1234\0");

    let mut buf = PacketBuffer::new();
    buf.pack_string( 8, "BA1");
    assert_eq!( buf.as_bytes(), b"BA1\0\0\0\0\0");
    assert_eq!( buf.unpack_string( 8), "BA1");
}

#[test]
fn test_truncated_unpack_yields_zeros () {
    // consuming more than available gives a zero-filled value, never an error
    let mut buf = PacketBuffer::from_bytes( &[0, 0]);
    assert_eq!( buf.unpack_i32(), 0);
    assert_eq!( buf.unpack_f64(), 0.0);
    assert_eq!( buf.unpack_string( 8), "");
}

#[test]
fn test_buggy_string_roundtrip () {
    let mut buf = PacketBuffer::new();
    buf.pack_buggy_string( "ABC");

    // count word + 3 character words padded to the next 16-byte boundary
    assert_eq!( buf.len(), 4 + 16);
    assert_eq!( buf.unpack_buggy_string(), "ABC");
    assert!( buf.is_empty());
}

#[test]
fn test_buggy_string_empty () {
    let mut buf = PacketBuffer::new();
    buf.pack_buggy_string( "");
    // a zero count carries no character block at all
    assert_eq!( buf.as_bytes(), &[0, 0, 0, 0]);
    assert_eq!( buf.unpack_buggy_string(), "");
}

#[test]
fn test_buggy_string_block_sizes () {
    // 4 chars fill a block exactly, 5 spill into the next one
    let mut buf = PacketBuffer::new();
    buf.pack_buggy_string( "WXYZ");
    assert_eq!( buf.len(), 4 + 16);

    let mut buf = PacketBuffer::new();
    buf.pack_buggy_string( "WXYZ2");
    assert_eq!( buf.len(), 4 + 32);
    assert_eq!( buf.unpack_buggy_string(), "WXYZ2");
}

#[test]
fn test_buggy_string_truncated_decode () {
    // declared character count implies more bytes than present: the decode completes
    // with the characters actually present instead of raising
    let mut buf = PacketBuffer::new();
    buf.pack_i32( 3); // claims 3 chars, no character block follows
    assert_eq!( buf.unpack_buggy_string(), "");
    assert!( buf.is_empty());

    let mut buf = PacketBuffer::new();
    buf.pack_i32( 5); // claims 5 chars, carries 2
    buf.pack_i32( 'H' as i32);
    buf.pack_i32( 'I' as i32);
    assert_eq!( buf.unpack_buggy_string(), "HI");
}

#[test]
fn test_buggy_string_hostile_count_does_not_allocate () {
    // a quarter-billion character count in an 8-byte datagram must not size the
    // decode - the count is clamped to the single character word that is there
    let mut buf = PacketBuffer::new();
    buf.pack_i32( 250_000_000);
    buf.pack_i32( 'A' as i32);
    assert_eq!( buf.unpack_buggy_string(), "A");
    assert!( buf.is_empty());

    let mut buf = PacketBuffer::from_bytes( &i32::MAX.to_be_bytes());
    assert_eq!( buf.unpack_buggy_string(), "");
}

#[test]
fn test_buggy_string_invalid_codepoint () {
    // a surrogate code point cannot convert to a char and becomes the substitute
    let mut buf = PacketBuffer::new();
    buf.pack_i32( 1);
    buf.pack_i32( 0xD800);
    buf.append_bytes( &[0u8; 12]); // block padding
    assert_eq!( buf.unpack_buggy_string(), "_");
}

#[test]
fn test_pad_to_block () {
    let mut buf = PacketBuffer::new();
    buf.append_bytes( &[1, 2, 3]);
    buf.pad( 16);
    assert_eq!( buf.len(), 16);

    // already on a boundary: no padding added
    buf.pad( 16);
    assert_eq!( buf.len(), 16);
}
