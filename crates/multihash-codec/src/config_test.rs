// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use rstest::rstest;

use super::Config;
use crate::{Error, LEGACY_MAX_LENGTH};

#[rstest]
fn test_default_is_unbounded() {
    let config = Config::default();
    assert_eq!(config.max_length, None);
    assert!(config.check_length(usize::MAX).is_ok());
}

#[rstest]
#[case(LEGACY_MAX_LENGTH, true)]
#[case(LEGACY_MAX_LENGTH + 1, false)]
#[case(2, true)]
fn test_legacy_limit(#[case] actual: usize, #[case] ok: bool) {
    let result = Config::legacy().check_length(actual);
    assert_eq!(result.is_ok(), ok);
    if let Err(err) = result {
        assert!(matches!(err, Error::TooLong { max: LEGACY_MAX_LENGTH, actual: a } if a == actual));
    }
}

#[rstest]
fn test_deserialize() {
    let config: Config = serde_json::from_str(r#"{"max_length": 64}"#).unwrap();
    assert_eq!(config.max_length, Some(64));

    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default(), "missing fields should use defaults");
}
