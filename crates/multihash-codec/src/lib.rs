// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! Encoding and decoding of self-describing multihash digests.
//!
//! A multihash is laid out on the wire as
//! `varint(code) varint(length) digest[length]`, where the code
//! identifies the hash function that produced the digest.
//!
//! ```
//! use multihash_codec::{HashFunction, Multihash};
//!
//! let mh: Multihash = "11148a173fd3e32c0fa78b90fe42d305f202244e2739".parse().unwrap();
//! assert_eq!(mh.hash_function(), HashFunction::Sha1);
//! assert_eq!(mh.digest_length(), 20);
//! ```

mod config;
mod error;
pub mod hex;
pub mod multihash;
pub mod prelude;
pub mod registry;
pub mod varint;

pub use config::Config;
pub use error::{Error, Result};
pub use hex::{decode_hex, encode_hex};
pub use multihash::{Encodable, LEGACY_MAX_LENGTH, MIN_LENGTH, Multihash};
pub use registry::{HashFunction, is_valid, lookup_by_code, lookup_by_name};
