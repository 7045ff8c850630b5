// File:    error.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Error types raised while configuring or attaching an OTP input.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use thiserror::Error;

/// Errors raised while building an OTP input.
///
/// Event handling itself never fails: rejected characters are reverted or
/// cleared and reported through ordinary value-change events.
#[derive(Debug, Error)]
pub enum OtpInputError {
    /// The validation pattern is not a valid regular expression.
    #[error("Invalid validation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The input was configured with no boxes.
    #[error("An OTP input needs at least one box")]
    ZeroLength,

    /// The number of attached boxes differs from the configured length.
    #[error("Expected {expected} boxes but {actual} were attached")]
    LengthMismatch {
        /// The configured number of boxes.
        expected: usize,
        /// The number of boxes actually attached.
        actual: usize,
    },

    /// A configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, OtpInputError>;
