// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! Unsigned LEB128-style variable length integers.
//!
//! Each byte carries seven bits of the value, least significant group
//! first, with the high bit set on every byte except the last.

use crate::{Error, Result};

#[cfg(test)]
#[path = "./varint_test.rs"]
mod varint_test;

/// The maximum number of bytes used to encode any `u64`.
pub const MAX_VARINT_LEN: usize = 10;

/// Decode an unsigned varint from the front of `buf`.
///
/// Returns the value and the number of bytes read. The count also
/// signals failure:
///
/// - `0`: the buffer ended before a terminating byte was found
/// - negative: the value does not fit in 64 bits, and `-count` is
///   the number of bytes that were read before giving up
///
/// ```
/// use multihash_codec::varint;
///
/// assert_eq!(varint::decode_raw(&[0xac, 0x02, 0x07]), (300, 2));
/// assert_eq!(varint::decode_raw(&[]), (0, 0));
/// ```
pub fn decode_raw(buf: &[u8]) -> (u64, i32) {
    let mut value = 0u64;
    let mut shift = 0u32;
    for (i, &b) in buf.iter().enumerate() {
        if i == MAX_VARINT_LEN {
            return (0, -(i as i32 + 1));
        }
        if b < 0x80 {
            if i == MAX_VARINT_LEN - 1 && b > 1 {
                return (0, -(i as i32 + 1));
            }
            return (value | (u64::from(b) << shift), i as i32 + 1);
        }
        value |= u64::from(b & 0x7f) << shift;
        shift += 7;
    }
    (0, 0)
}

/// Decode an unsigned varint and advance `buf` past the bytes that were read.
///
/// The cursor is left untouched when decoding fails.
pub fn decode(buf: &mut &[u8]) -> Result<u64> {
    let remaining: &[u8] = *buf;
    let (value, count) = decode_raw(remaining);
    match count {
        0 => Err(Error::VarintBufferTooShort),
        c if c < 0 => Err(Error::VarintTooLong {
            read: c.unsigned_abs() as usize,
        }),
        c => {
            *buf = &remaining[c as usize..];
            Ok(value)
        }
    }
}

/// Encode `value` using the minimal number of bytes.
pub fn encode(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(value));
    encode_into(&mut buf, value);
    buf
}

/// Append the encoded form of `value` to the given buffer.
pub fn encode_into(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            return;
        }
        buf.push(byte | 0x80);
    }
}

/// The number of bytes that [`encode`] produces for `value`.
pub fn encoded_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()).max(1) as usize;
    bits.div_ceil(7)
}
