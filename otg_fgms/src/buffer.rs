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

/// the append-at-back / consume-from-front byte buffer both sides of the codec run on.
///
/// Consuming more bytes than available never fails - it yields a zero-filled value of
/// the requested width. The relay tolerates truncated datagrams the same way, and
/// decode has to complete for whatever arrives.

use tracing::warn;

use crate::{MAX_PACKET_SIZE, SUBSTITUTE_CHAR};

#[derive(Debug,Default)]
pub struct PacketBuffer {
    data: Vec<u8>,
    pos: usize, // consumed prefix
}

impl PacketBuffer {

    pub fn new ()->PacketBuffer {
        PacketBuffer { data: Vec::new(), pos: 0 }
    }

    pub fn from_bytes (bytes: &[u8])->PacketBuffer {
        PacketBuffer { data: bytes.to_vec(), pos: 0 }
    }

    /// the not-yet-consumed bytes
    pub fn as_bytes (&self)->&[u8] {
        &self.data[self.pos..]
    }

    pub fn len (&self)->usize {
        self.data.len() - self.pos
    }

    pub fn is_empty (&self)->bool {
        self.len() == 0
    }

    //--- packing

    pub fn pack_i32 (&mut self, v: i32) {
        self.data.extend_from_slice( &v.to_be_bytes());
    }

    pub fn pack_bool (&mut self, v: bool) {
        self.pack_i32( v as i32);
    }

    pub fn pack_f32 (&mut self, v: f32) {
        self.data.extend_from_slice( &v.to_be_bytes());
    }

    pub fn pack_f64 (&mut self, v: f64) {
        self.data.extend_from_slice( &v.to_be_bytes());
    }

    /// fixed-size null padded string field: the source is truncated to size-1 bytes,
    /// the remainder of the field is zero filled
    pub fn pack_string (&mut self, size: usize, s: &str) {
        let bytes = s.as_bytes();
        let n = bytes.len().min( size - 1);
        self.data.extend_from_slice( &bytes[..n]);
        self.data.resize( self.data.len() + (size - n), 0);
    }

    pub fn append_bytes (&mut self, raw: &[u8]) {
        self.data.extend_from_slice( raw);
    }

    pub fn append_packed (&mut self, other: &PacketBuffer) {
        self.data.extend_from_slice( other.as_bytes());
    }

    /// zero fill up to the next multiple of `block` bytes
    pub fn pad (&mut self, block: usize) {
        let pad = (block - (self.len() % block)) % block;
        self.data.resize( self.data.len() + pad, 0);
    }

    /// the legacy per-codepoint string encoding: an i32 character count followed by one
    /// i32 per character, the character block zero padded to the next 16-byte boundary
    pub fn pack_buggy_string (&mut self, s: &str) {
        let mut strbuf = PacketBuffer::new();
        let mut nchars = 0;
        for c in s.chars() {
            strbuf.pack_i32( c as i32);
            nchars += 1;
        }
        strbuf.pad( 16);
        self.pack_i32( nchars);
        self.append_packed( &strbuf);
    }

    //--- unpacking

    /// pop `nbytes` from the front. A shortfall yields all zeros of the requested
    /// width - mirrors the wire partner's tolerance of truncated datagrams.
    pub fn unpack_bytes (&mut self, nbytes: usize)->Vec<u8> {
        let avail = self.len();
        if avail < nbytes {
            warn!( "truncated packet: expected {} bytes, only {} could be read", nbytes, avail);
            self.pos = self.data.len();
            return vec![0u8; nbytes];
        }
        let popped = self.data[self.pos..self.pos + nbytes].to_vec();
        self.pos += nbytes;
        popped
    }

    pub fn unpack_i32 (&mut self)->i32 {
        let b = self.unpack_bytes( 4);
        i32::from_be_bytes( [b[0], b[1], b[2], b[3]])
    }

    pub fn unpack_bool (&mut self)->bool {
        self.unpack_i32() != 0
    }

    pub fn unpack_f32 (&mut self)->f32 {
        let b = self.unpack_bytes( 4);
        f32::from_be_bytes( [b[0], b[1], b[2], b[3]])
    }

    pub fn unpack_f64 (&mut self)->f64 {
        let b = self.unpack_bytes( 8);
        f64::from_be_bytes( [b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// fixed-size string field: bytes up to the first NUL, lossily decoded
    pub fn unpack_string (&mut self, size: usize)->String {
        let bytes = self.unpack_bytes( size);
        let end = bytes.iter().position( |&b| b == 0).unwrap_or( bytes.len());
        String::from_utf8_lossy( &bytes[..end]).into_owned()
    }

    /// decode a buggy string: read the declared character count, then the block-padded
    /// character ints. The count is wire input and must never size an allocation - it
    /// is clamped to the character words the remaining bytes can actually carry. Code
    /// points that cannot be converted become the substitute character instead of
    /// failing the decode.
    pub fn unpack_buggy_string (&mut self)->String {
        let declared = self.unpack_i32().max( 0) as usize;

        let nchars = declared.min( self.len() / 4).min( MAX_PACKET_SIZE / 4);
        if nchars < declared {
            warn!( "declared string length {} exceeds packet data, clamped to {}", declared, nchars);
        }

        // padded block size; the -1 needs floor division so a zero count reads zero bytes
        let block_len = (((4 * nchars as i64) - 1).div_euclid( 16) + 1) * 16;
        let nbytes = (block_len as usize).min( self.len());
        let mut intbuf = PacketBuffer::from_bytes( &self.unpack_bytes( nbytes));

        let mut s = String::with_capacity( nchars);
        for _ in 0..nchars {
            let cp = intbuf.unpack_i32();
            s.push( char::from_u32( cp as u32).unwrap_or( SUBSTITUTE_CHAR));
        }
        s
    }
}
