// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use serde::{Deserialize, Serialize};

use crate::multihash::LEGACY_MAX_LENGTH;

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

/// Limits applied when decoding multihash records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Reject any encoded record longer than this many bytes
    ///
    /// The limit covers the whole record, including the code and
    /// length prefixes. If unset, which is the default, records of
    /// any size are accepted.
    pub max_length: Option<usize>,
}

impl Config {
    /// A config that only accepts records shorter than 129 bytes.
    pub fn legacy() -> Self {
        Self {
            max_length: Some(LEGACY_MAX_LENGTH),
        }
    }

    /// Check an encoded record's size against the configured limit.
    pub(crate) fn check_length(&self, actual: usize) -> crate::Result<()> {
        match self.max_length {
            Some(max) if actual > max => {
                tracing::debug!(max, actual, "multihash exceeds configured max_length");
                Err(crate::Error::TooLong { max, actual })
            }
            _ => Ok(()),
        }
    }
}
