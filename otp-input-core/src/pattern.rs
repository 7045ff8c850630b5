// File:    pattern.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: The regular expression every typed or pasted value is tested against.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::{OtpInputError, Result};

/// Gates which characters or pasted strings are accepted.
#[derive(Debug, Clone)]
pub struct ValidationPattern {
    regex: Regex,
}

impl ValidationPattern {
    /// Digits only, the pattern used when none is configured.
    pub const DIGITS: &'static str = r"^[0-9]+$";

    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`OtpInputError::InvalidPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Whether `text` contains a match. Anchor the pattern to require the
    /// whole text to match.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The source of the pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl FromStr for ValidationPattern {
    type Err = OtpInputError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ValidationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
