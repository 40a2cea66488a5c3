// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use rstest::rstest;
use strum::IntoEnumIterator;

use super::{HashFunction, is_valid, lookup_by_code, lookup_by_name};
use crate::Error;

#[rstest]
#[case(0x00, HashFunction::Id)]
#[case(0x11, HashFunction::Sha1)]
#[case(0x12, HashFunction::Sha2_256)]
#[case(0x13, HashFunction::Sha2_512)]
#[case(0x14, HashFunction::Sha3_512)]
#[case(0x15, HashFunction::Sha3_384)]
#[case(0x16, HashFunction::Sha3_256)]
#[case(0x17, HashFunction::Sha3_224)]
#[case(0x18, HashFunction::Shake128)]
#[case(0x19, HashFunction::Shake256)]
#[case(0x1a, HashFunction::Keccak224)]
#[case(0x1b, HashFunction::Keccak256)]
#[case(0x1c, HashFunction::Keccak384)]
#[case(0x1d, HashFunction::Keccak512)]
#[case(0x22, HashFunction::Murmur3)]
#[case(0x56, HashFunction::DblSha2_256)]
#[case(0x1100, HashFunction::X11)]
#[case(0xb201, HashFunction::Blake2bMin)]
#[case(0xb240, HashFunction::Blake2bMax)]
#[case(0xb241, HashFunction::Blake2sMin)]
#[case(0xb260, HashFunction::Blake2sMax)]
fn test_lookup_by_code(#[case] code: u64, #[case] expected: HashFunction) {
    assert_eq!(lookup_by_code(code), Some(expected));
    assert!(is_valid(code));
    assert_eq!(expected.code(), code);
}

#[rstest]
#[case(0x01)]
#[case(0x10)]
#[case(0x1e)]
#[case(0xb202)]
#[case(0xb25f)]
#[case(u64::MAX)]
fn test_unknown_code(#[case] code: u64) {
    assert_eq!(lookup_by_code(code), None);
    assert!(!is_valid(code));
}

#[rstest]
fn test_sha3_alias_shares_code() {
    assert_eq!(HashFunction::Sha3.code(), HashFunction::Sha3_512.code());
    assert_eq!(
        lookup_by_code(HashFunction::Sha3.code()),
        Some(HashFunction::Sha3_512),
        "the shared code resolves to the first registration"
    );
}

#[rstest]
fn test_every_function_has_registered_code() {
    for function in HashFunction::iter() {
        assert!(is_valid(function.code()), "{function} should be registered");
    }
}

#[rstest]
#[case("id", HashFunction::Id)]
#[case("sha1", HashFunction::Sha1)]
#[case("sha2-256", HashFunction::Sha2_256)]
#[case("sha2-512", HashFunction::Sha2_512)]
#[case("sha3-224", HashFunction::Sha3_224)]
#[case("sha3-256", HashFunction::Sha3_256)]
#[case("sha3-384", HashFunction::Sha3_384)]
#[case("sha3-512", HashFunction::Sha3_512)]
#[case("dbl-sha2-256", HashFunction::DblSha2_256)]
#[case("murmur3", HashFunction::Murmur3)]
#[case("keccak-224", HashFunction::Keccak224)]
#[case("keccak-256", HashFunction::Keccak256)]
#[case("keccak-384", HashFunction::Keccak384)]
#[case("keccak-512", HashFunction::Keccak512)]
#[case("shake-128", HashFunction::Shake128)]
#[case("shake-256", HashFunction::Shake256)]
#[case("x11", HashFunction::X11)]
fn test_lookup_by_name(#[case] name: &str, #[case] expected: HashFunction) {
    assert_eq!(lookup_by_name(name), Some(expected));
    assert_eq!(expected.to_string(), name);
    assert_eq!(name.parse::<HashFunction>().unwrap(), expected);
}

#[rstest]
#[case("SHA1")]
#[case("sha3")]
#[case("blake2b-min")]
#[case("sha256")]
#[case("")]
fn test_unnamed_or_unknown(#[case] name: &str) {
    assert_eq!(lookup_by_name(name), None);
    assert!(matches!(
        name.parse::<HashFunction>(),
        Err(Error::UnknownHashName(n)) if n == name
    ));
}

#[rstest]
fn test_serde_uses_names() {
    let json = serde_json::to_string(&HashFunction::Sha2_256).unwrap();
    assert_eq!(json, "\"sha2-256\"");

    for function in HashFunction::iter() {
        let json = serde_json::to_string(&function).unwrap();
        let loaded: HashFunction = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, function);
    }

    assert!(serde_json::from_str::<HashFunction>("\"md5\"").is_err());
}
