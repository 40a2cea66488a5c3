// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::io;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Diagnostic, Debug, Error)]
#[diagnostic(
    url(
        "https://spkenv.dev/error_codes#{}",
        self.code().unwrap_or_else(|| Box::new("multihash::generic"))
    )
)]
pub enum Error {
    #[error("multihash too short, must be >= 2 bytes (got {actual})")]
    #[diagnostic(code(multihash::too_short))]
    TooShort { actual: usize },
    #[error("multihash too long, must be <= {max} bytes (got {actual})")]
    #[diagnostic(
        code(multihash::too_long),
        help("raise or remove the configured max_length to accept larger records")
    )]
    TooLong { max: usize, actual: usize },
    #[error("uvarint: buffer too small")]
    #[diagnostic(code(multihash::varint_buffer_too_short))]
    VarintBufferTooShort,
    #[error("uvarint: varint too big (max 64bit), read {read} bytes")]
    #[diagnostic(code(multihash::varint_too_long))]
    VarintTooLong { read: usize },
    #[error("multihash length inconsistent: declared {declared}, found {actual}")]
    #[diagnostic(code(multihash::inconsistent_length))]
    InconsistentLength { declared: u64, actual: usize },
    #[error("unknown hash function code: {0:#x}")]
    #[diagnostic(code(multihash::unknown_hash_code))]
    UnknownHashCode(u64),
    #[error("unknown hash function name: {0}")]
    #[diagnostic(
        code(multihash::unknown_hash_name),
        help("hash function names are lowercase, eg: sha2-256")
    )]
    UnknownHashName(String),
    #[error("invalid input: {reason} [{given}]")]
    #[diagnostic(code(multihash::invalid_input))]
    InvalidInput { reason: String, given: String },
    #[error("Encoding write error")]
    #[diagnostic(code(multihash::write))]
    EncodingWriteError(#[source] io::Error),
}
