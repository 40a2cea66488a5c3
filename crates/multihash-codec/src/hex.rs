// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./hex_test.rs"]
mod hex_test;

/// Decode hexadecimal text into raw bytes.
///
/// Digits may be upper or lower case. The text must contain an even
/// number of characters and nothing but hex digits, there are no
/// separators or prefixes.
pub fn decode_hex<S: AsRef<str>>(text: S) -> Result<Vec<u8>> {
    let text = text.as_ref();
    HEXLOWER_PERMISSIVE
        .decode(text.as_bytes())
        .map_err(|err| {
            use data_encoding::DecodeKind::*;
            let reason = match err.kind {
                Length => "hex text must have an even number of characters".to_string(),
                Symbol => format!("non-hex character at position {}", err.position),
                _ => err.to_string(),
            };
            Error::InvalidInput {
                reason,
                given: text.to_owned(),
            }
        })
}

/// Encode raw bytes as lowercase hexadecimal text.
pub fn encode_hex<B: AsRef<[u8]>>(bytes: B) -> String {
    HEXLOWER.encode(bytes.as_ref())
}
