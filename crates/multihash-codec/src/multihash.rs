// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::fmt::Display;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::registry::{self, HashFunction};
use crate::{Config, Error, Result, hex, varint};

#[cfg(test)]
#[path = "./multihash_test.rs"]
mod multihash_test;

/// The smallest possible record: a one byte code and a one byte length.
pub const MIN_LENGTH: usize = 2;

/// The largest record accepted by [`Config::legacy`].
pub const LEGACY_MAX_LENGTH: usize = 128;

/// Encodable is a type that can be binary-encoded to a byte stream
pub trait Encodable
where
    Self: Sized,
{
    /// Write this object in binary format.
    fn encode(&self, writer: &mut impl Write) -> Result<()>;

    /// Encode this object into it's binary form in memory.
    fn encode_to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }
}

/// A digest tagged with the function code that produced it.
///
/// A value of this type always holds a registered code, and the
/// digest length that is written on the wire is always the length
/// of the held digest.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Multihash {
    function: HashFunction,
    code: u64,
    digest: Vec<u8>,
}

impl Multihash {
    /// Tag a digest with a known hash function.
    ///
    /// The stored function is the one registered for its code, so
    /// wrapping [`HashFunction::Sha3`] yields a sha3-512 record.
    pub fn wrap<D: Into<Vec<u8>>>(function: HashFunction, digest: D) -> Self {
        let code = function.code();
        Self {
            function: registry::lookup_by_code(code).unwrap_or(function),
            code,
            digest: digest.into(),
        }
    }

    /// Tag a digest with a numeric function code.
    ///
    /// Fails if the code is not registered.
    pub fn new<D: Into<Vec<u8>>>(code: u64, digest: D) -> Result<Self> {
        let function = registry::lookup_by_code(code).ok_or(Error::UnknownHashCode(code))?;
        Ok(Self {
            function,
            code,
            digest: digest.into(),
        })
    }

    /// Decode a complete record from the given bytes.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        Self::decode_with(buf, &Config::default())
    }

    /// Decode a complete record, enforcing the limits in `config`.
    ///
    /// The buffer must hold exactly one record: a varint code, a
    /// varint length and then precisely that many digest bytes.
    pub fn decode_with(buf: &[u8], config: &Config) -> Result<Self> {
        decode_record(buf, config).inspect_err(|err| {
            tracing::trace!(len = buf.len(), "rejected multihash: {err}");
        })
    }

    /// Decode a record from its hexadecimal text form.
    pub fn from_hex<S: AsRef<str>>(text: S) -> Result<Self> {
        decode_hex(text)
    }

    /// The raw function code, as read from or written to the wire.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// The hash function identified by this record's code.
    pub fn hash_function(&self) -> HashFunction {
        self.function
    }

    /// The number of digest bytes.
    pub fn digest_length(&self) -> usize {
        self.digest.len()
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn into_digest(self) -> Vec<u8> {
        self.digest
    }

    /// The canonical binary encoding of this record.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(
            varint::encoded_len(self.code)
                + varint::encoded_len(self.digest.len() as u64)
                + self.digest.len(),
        );
        write_record(&mut buf, self.code, &self.digest);
        buf
    }

    /// The canonical binary encoding of this record, as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode_hex(self.to_bytes())
    }
}

impl std::fmt::Debug for Multihash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Multihash")
            .field("hash", &self.function.name())
            .field("code", &format_args!("{:#x}", self.code))
            .field("size", &self.digest.len())
            .field("digest", &format_args!("{}", hex::encode_hex(&self.digest)))
            .finish()
    }
}

impl Display for Multihash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Multihash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode_hex(s)
    }
}

impl TryFrom<&[u8]> for Multihash {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        Self::decode(buf)
    }
}

impl Encodable for Multihash {
    fn encode(&self, writer: &mut impl Write) -> Result<()> {
        writer
            .write_all(&self.to_bytes())
            .map_err(Error::EncodingWriteError)
    }
}

impl Serialize for Multihash {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Multihash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        /// Visits a serialized string, decoding it as a multihash
        struct StringVisitor;
        impl serde::de::Visitor<'_> for StringVisitor {
            type Value = Multihash;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("hex encoded multihash")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Multihash, E>
            where
                E: serde::de::Error,
            {
                decode_hex(value).map_err(|_| {
                    serde::de::Error::invalid_value(serde::de::Unexpected::Str(value), &self)
                })
            }
        }
        deserializer.deserialize_str(StringVisitor)
    }
}

/// Decode a complete record from the given bytes.
pub fn decode(buf: &[u8]) -> Result<Multihash> {
    Multihash::decode(buf)
}

/// Decode a record from hexadecimal text.
///
/// Text that is too short to hold a record is rejected as
/// [`Error::TooShort`] before it is checked for valid hex digits.
pub fn decode_hex<S: AsRef<str>>(text: S) -> Result<Multihash> {
    let text = text.as_ref();
    let actual = text.len() / 2;
    if actual < MIN_LENGTH {
        tracing::trace!(len = text.len(), "rejected multihash text: too short");
        return Err(Error::TooShort { actual });
    }
    let buf = hex::decode_hex(text).inspect_err(|err| {
        tracing::trace!(len = text.len(), "rejected multihash text: {err}");
    })?;
    Multihash::decode(&buf)
}

/// Encode a digest under the given function code.
///
/// The digest is copied verbatim, only the code is validated.
pub fn encode(digest: &[u8], code: u64) -> Result<Vec<u8>> {
    if !registry::is_valid(code) {
        return Err(Error::UnknownHashCode(code));
    }
    let mut buf = Vec::new();
    write_record(&mut buf, code, digest);
    Ok(buf)
}

/// Encode a hex digest under the given function code, returning hex text.
pub fn encode_hex<S: AsRef<str>>(digest: S, code: u64) -> Result<String> {
    let digest = hex::decode_hex(digest)?;
    encode(&digest, code).map(hex::encode_hex)
}

/// Encode a digest under the named hash function.
pub fn encode_by_name(digest: &[u8], name: &str) -> Result<Vec<u8>> {
    let function: HashFunction = name.parse()?;
    encode(digest, function.code())
}

fn decode_record(buf: &[u8], config: &Config) -> Result<Multihash> {
    if buf.len() < MIN_LENGTH {
        return Err(Error::TooShort { actual: buf.len() });
    }
    config.check_length(buf.len())?;

    let mut remaining = buf;
    let code = varint::decode(&mut remaining)?;
    let declared = varint::decode(&mut remaining)?;
    if remaining.len() as u64 != declared {
        return Err(Error::InconsistentLength {
            declared,
            actual: remaining.len(),
        });
    }

    let function = registry::lookup_by_code(code).ok_or(Error::UnknownHashCode(code))?;
    Ok(Multihash {
        function,
        code,
        digest: remaining.to_vec(),
    })
}

fn write_record(buf: &mut Vec<u8>, code: u64, digest: &[u8]) {
    varint::encode_into(buf, code);
    varint::encode_into(buf, digest.len() as u64);
    buf.extend_from_slice(digest);
}
