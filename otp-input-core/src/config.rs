// File:    config.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Configuration of an OTP input: box count, validation pattern and focus behaviour.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{OtpInputError, Result};
use crate::pattern::ValidationPattern;

/// The number of boxes used when none is configured.
pub const DEFAULT_LENGTH: usize = 6;

/// Settings for an [`OtpInput`](crate::input::OtpInput).
///
/// Missing fields in a JSON document fall back to the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OtpInputConfig {
    /// The number of boxes.
    pub length: usize,
    /// The regular expression typed and pasted values must match.
    pub pattern: String,
    /// Focus the first box when the boxes are attached or reset.
    pub auto_focus: bool,
    /// Drop focus once every box holds a character.
    pub auto_blur: bool,
}

impl Default for OtpInputConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            pattern: ValidationPattern::DIGITS.to_owned(),
            auto_focus: true,
            auto_blur: true,
        }
    }
}

impl OtpInputConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that the input has at least one box and a usable pattern.
    ///
    /// # Errors
    ///
    /// Returns [`OtpInputError::ZeroLength`] or
    /// [`OtpInputError::InvalidPattern`].
    pub fn validate(&self) -> Result<()> {
        self.validation_pattern().map(|_| ())
    }

    /// Compiles the configured pattern after checking the length.
    ///
    /// # Errors
    ///
    /// Returns [`OtpInputError::ZeroLength`] or
    /// [`OtpInputError::InvalidPattern`].
    pub fn validation_pattern(&self) -> Result<ValidationPattern> {
        if self.length == 0 {
            return Err(OtpInputError::ZeroLength);
        }
        ValidationPattern::new(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = OtpInputConfig::from_json_str(r#"{ "length": 4 }"#).unwrap();
        assert_eq!(config.length, 4);
        assert_eq!(config.pattern, ValidationPattern::DIGITS);
        assert!(config.auto_focus);
        assert!(config.auto_blur);
    }

    #[test]
    fn zero_length_is_rejected() {
        let err = OtpInputConfig::from_json_str(r#"{ "length": 0 }"#).unwrap_err();
        assert!(matches!(err, OtpInputError::ZeroLength));
    }

    #[test]
    fn bad_pattern_is_rejected() {
        let err = OtpInputConfig::from_json_str(r#"{ "pattern": "(" }"#).unwrap_err();
        assert!(matches!(err, OtpInputError::InvalidPattern(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = OtpInputConfig::from_json_str(r#"{ "size": 6 }"#).unwrap_err();
        assert!(matches!(err, OtpInputError::Config(_)));
    }
}
