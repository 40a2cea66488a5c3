// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! The fixed table of known hash functions.
//!
//! Numeric codes are the authority for whether a record is valid. Names
//! are a convenience for the most common functions and do not cover
//! every code: the blake2 families are parametrized ranges that are only
//! represented here by their bounds.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;

/// Identifies the algorithm that produced a digest.
///
/// The codec never runs these algorithms, it only carries their code.
#[derive(
    Debug,
    Display,
    EnumIter,
    IntoStaticStr,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum HashFunction {
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "sha1")]
    Sha1,
    #[strum(serialize = "sha2-256")]
    Sha2_256,
    #[strum(serialize = "sha2-512")]
    Sha2_512,
    #[strum(serialize = "sha3-224")]
    Sha3_224,
    #[strum(serialize = "sha3-256")]
    Sha3_256,
    #[strum(serialize = "sha3-384")]
    Sha3_384,
    #[strum(serialize = "sha3-512")]
    Sha3_512,
    /// Generic sha3, sharing its code with [`HashFunction::Sha3_512`]
    #[strum(serialize = "sha3")]
    Sha3,
    #[strum(serialize = "keccak-224")]
    Keccak224,
    #[strum(serialize = "keccak-256")]
    Keccak256,
    #[strum(serialize = "keccak-384")]
    Keccak384,
    #[strum(serialize = "keccak-512")]
    Keccak512,
    #[strum(serialize = "shake-128")]
    Shake128,
    #[strum(serialize = "shake-256")]
    Shake256,
    #[strum(serialize = "blake2b-min")]
    Blake2bMin,
    #[strum(serialize = "blake2b-max")]
    Blake2bMax,
    #[strum(serialize = "blake2s-min")]
    Blake2sMin,
    #[strum(serialize = "blake2s-max")]
    Blake2sMax,
    #[strum(serialize = "dbl-sha2-256")]
    DblSha2_256,
    #[strum(serialize = "murmur3")]
    Murmur3,
    #[strum(serialize = "x11")]
    X11,
}

impl HashFunction {
    /// The numeric code written on the wire for this function.
    pub const fn code(self) -> u64 {
        match self {
            Self::Id => 0x00,
            Self::Sha1 => 0x11,
            Self::Sha2_256 => 0x12,
            Self::Sha2_512 => 0x13,
            Self::Sha3_512 | Self::Sha3 => 0x14,
            Self::Sha3_384 => 0x15,
            Self::Sha3_256 => 0x16,
            Self::Sha3_224 => 0x17,
            Self::Shake128 => 0x18,
            Self::Shake256 => 0x19,
            Self::Keccak224 => 0x1a,
            Self::Keccak256 => 0x1b,
            Self::Keccak384 => 0x1c,
            Self::Keccak512 => 0x1d,
            Self::Murmur3 => 0x22,
            Self::DblSha2_256 => 0x56,
            Self::X11 => 0x1100,
            Self::Blake2bMin => 0xb201,
            Self::Blake2bMax => 0xb240,
            Self::Blake2sMin => 0xb241,
            Self::Blake2sMax => 0xb260,
        }
    }

    /// The canonical lowercase name of this function.
    ///
    /// Not every name can be resolved back through [`lookup_by_name`].
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl std::str::FromStr for HashFunction {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        lookup_by_name(name).ok_or_else(|| Error::UnknownHashName(name.to_owned()))
    }
}

// Deserialization accepts every canonical name, including the ones
// that lookup_by_name does not resolve, so that serialized values
// always load back.
impl TryFrom<String> for HashFunction {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        use strum::IntoEnumIterator;

        Self::iter()
            .find(|function| function.name() == name)
            .ok_or(Error::UnknownHashName(name))
    }
}

/// Resolve a wire code to its hash function, if it is registered.
///
/// The code `0x14` is shared by sha3-512 and generic sha3, and always
/// resolves to [`HashFunction::Sha3_512`].
pub const fn lookup_by_code(code: u64) -> Option<HashFunction> {
    let function = match code {
        0x00 => HashFunction::Id,
        0x11 => HashFunction::Sha1,
        0x12 => HashFunction::Sha2_256,
        0x13 => HashFunction::Sha2_512,
        0x14 => HashFunction::Sha3_512,
        0x15 => HashFunction::Sha3_384,
        0x16 => HashFunction::Sha3_256,
        0x17 => HashFunction::Sha3_224,
        0x18 => HashFunction::Shake128,
        0x19 => HashFunction::Shake256,
        0x1a => HashFunction::Keccak224,
        0x1b => HashFunction::Keccak256,
        0x1c => HashFunction::Keccak384,
        0x1d => HashFunction::Keccak512,
        0x22 => HashFunction::Murmur3,
        0x56 => HashFunction::DblSha2_256,
        0x1100 => HashFunction::X11,
        0xb201 => HashFunction::Blake2bMin,
        0xb240 => HashFunction::Blake2bMax,
        0xb241 => HashFunction::Blake2sMin,
        0xb260 => HashFunction::Blake2sMax,
        _ => return None,
    };
    Some(function)
}

/// Resolve a lowercase name to its hash function.
pub fn lookup_by_name(name: &str) -> Option<HashFunction> {
    let function = match name {
        "id" => HashFunction::Id,
        "sha1" => HashFunction::Sha1,
        "sha2-256" => HashFunction::Sha2_256,
        "sha2-512" => HashFunction::Sha2_512,
        "sha3-224" => HashFunction::Sha3_224,
        "sha3-256" => HashFunction::Sha3_256,
        "sha3-384" => HashFunction::Sha3_384,
        "sha3-512" => HashFunction::Sha3_512,
        "dbl-sha2-256" => HashFunction::DblSha2_256,
        "murmur3" => HashFunction::Murmur3,
        "keccak-224" => HashFunction::Keccak224,
        "keccak-256" => HashFunction::Keccak256,
        "keccak-384" => HashFunction::Keccak384,
        "keccak-512" => HashFunction::Keccak512,
        "shake-128" => HashFunction::Shake128,
        "shake-256" => HashFunction::Shake256,
        "x11" => HashFunction::X11,
        _ => return None,
    };
    Some(function)
}

/// True if the code is present in the registry.
pub const fn is_valid(code: u64) -> bool {
    lookup_by_code(code).is_some()
}
