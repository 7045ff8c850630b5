// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: The main library crate for otp-input-core, wiring box handles, validation, navigation and paste handling.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # OTP Input Core Library
//!
//! This library provides the behaviour of a segmented one-time-password input:
//! a fixed row of single-character boxes with keyboard navigation, per-box
//! validation and paste distribution. Rendering is left to the caller, which
//! exposes its boxes through the [`box_handle::BoxHandle`] trait.

/// Box handles, the in-memory handle implementation and the ordered box group.
pub mod box_handle;
/// Component configuration.
pub mod config;
/// Error types for configuration and attachment.
pub mod error;
/// Events emitted by the handlers and the synchronous emitter.
pub mod events;
/// The OTP input component combining both handlers with a value form.
pub mod input;
/// Arrow-key, backspace and input-change handling.
pub mod navigation;
/// Clipboard paste distribution.
pub mod paste;
/// The regular expression gating accepted input.
pub mod pattern;
/// The externally owned per-box value record.
pub mod snapshot;

pub use box_handle::{BoxGroup, BoxHandle, BoxId, FocusTracker, MemoryBox};
pub use config::OtpInputConfig;
pub use error::{OtpInputError, Result};
pub use events::{DefaultAction, EventEmitter, OtpEvent};
pub use input::{Key, OtpInput, OtpInputEvent};
pub use navigation::InputNavigations;
pub use paste::PasteHandler;
pub use pattern::ValidationPattern;
pub use snapshot::{OtpForm, ValueSnapshot};
