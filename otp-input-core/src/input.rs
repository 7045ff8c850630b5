// File:    input.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: The OTP input component, wiring the navigation and paste handlers to one value form.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A ready-to-use OTP input.
//!
//! [`OtpInput`] owns the value form both handlers read from, commits every
//! handler event to it and reports the combined value to its listeners. The
//! form is authoritative: after each event the boxes are redrawn from it.

use log::{debug, info};
use serde::Serialize;
use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use crate::box_handle::{BoxGroup, BoxHandle, BoxId};
use crate::config::OtpInputConfig;
use crate::error::{OtpInputError, Result};
use crate::events::{DefaultAction, EventEmitter, OtpEvent};
use crate::navigation::InputNavigations;
use crate::paste::PasteHandler;
use crate::snapshot::OtpForm;

/// Keys with dedicated handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move focus one box to the left.
    ArrowLeft,
    /// Move focus one box to the right.
    ArrowRight,
    /// Clear the box and move focus one box to the left.
    Backspace,
}

/// What listeners of an [`OtpInput`] are told.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OtpInputEvent {
    /// The committed values after an event changed them.
    Change {
        /// One value per box, empty where nothing is committed.
        values: Vec<String>,
    },
    /// Every box holds a character.
    Filled {
        /// The joined value.
        value: String,
    },
}

/// A segmented OTP input over boxes of type `B`.
#[derive(Debug)]
pub struct OtpInput<B> {
    config: OtpInputConfig,
    form: OtpForm,
    boxes: BoxGroup<B>,
    navigations: InputNavigations<B, OtpForm>,
    paste: PasteHandler<B>,
    pending: Rc<RefCell<Vec<OtpEvent>>>,
    emitter: EventEmitter<OtpInputEvent>,
}

impl<B: BoxHandle + Clone> OtpInput<B> {
    /// Builds an input from `config`. Boxes are attached separately with
    /// [`Self::attach`] once they exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: OtpInputConfig) -> Result<Self> {
        let pattern = config.validation_pattern()?;
        let form = OtpForm::new(config.length);
        let pending = Rc::new(RefCell::new(Vec::new()));

        let mut navigations = InputNavigations::new(pattern.clone(), form.clone());
        let queue = Rc::clone(&pending);
        navigations.subscribe(move |event: &OtpEvent| queue.borrow_mut().push(event.clone()));

        let mut paste = PasteHandler::new(pattern);
        let queue = Rc::clone(&pending);
        paste.subscribe(move |event: &OtpEvent| queue.borrow_mut().push(event.clone()));

        Ok(Self {
            config,
            form,
            boxes: BoxGroup::default(),
            navigations,
            paste,
            pending,
            emitter: EventEmitter::new(),
        })
    }

    /// Captures the rendered boxes, in display order, and clears them.
    ///
    /// # Errors
    ///
    /// Returns [`OtpInputError::LengthMismatch`] if the number of boxes
    /// differs from the configured length.
    pub fn attach(&mut self, boxes: Vec<B>) -> Result<()> {
        if boxes.len() != self.config.length {
            return Err(OtpInputError::LengthMismatch {
                expected: self.config.length,
                actual: boxes.len(),
            });
        }
        self.navigations.initialize(boxes.clone());
        self.paste.initialize(boxes.clone());
        self.boxes = BoxGroup::new(boxes);
        self.sync_boxes();
        info!(
            "OTP input attached to {} boxes with pattern {}",
            self.boxes.len(),
            self.config.pattern
        );
        if self.config.auto_focus {
            self.boxes.focus(0);
        }
        Ok(())
    }

    /// Registers a listener for change and fill events.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&OtpInputEvent) + 'static,
    {
        self.emitter.subscribe(listener);
    }

    /// Handles a key press on `origin`.
    pub fn on_key(&mut self, origin: BoxId, key: Key) -> DefaultAction {
        let action = match key {
            Key::ArrowLeft => {
                self.navigations.on_arrow_left(origin);
                DefaultAction::Allow
            }
            Key::ArrowRight => {
                self.navigations.on_arrow_right(origin);
                DefaultAction::Allow
            }
            Key::Backspace => self.navigations.on_backspace(origin),
        };
        self.flush();
        action
    }

    /// Handles the raw value of `origin` after the host applied an edit.
    pub fn on_input(&mut self, origin: BoxId, raw: &str) {
        self.navigations.on_input_changed(origin, raw);
        self.flush();
    }

    /// Handles clipboard text pasted anywhere in the group.
    pub fn on_paste(&mut self, text: Option<&str>) -> DefaultAction {
        let action = self.paste.on_paste(text);
        self.flush();
        action
    }

    /// Clears every box and committed value.
    pub fn reset(&mut self) {
        self.form.clear();
        self.sync_boxes();
        if self.config.auto_focus {
            self.boxes.focus(0);
        }
        debug!("OTP input reset");
        self.emitter.emit(&OtpInputEvent::Change {
            values: self.form.values(),
        });
    }

    /// The committed values joined into one string.
    #[must_use]
    pub fn value(&self) -> String {
        self.form.value()
    }

    /// The committed value of every box.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.form.values()
    }

    /// Whether every box holds a committed character.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.form.is_complete()
    }

    /// The configuration this input was built from.
    #[must_use]
    pub const fn config(&self) -> &OtpInputConfig {
        &self.config
    }

    /// The attached boxes.
    #[must_use]
    pub const fn boxes(&self) -> &BoxGroup<B> {
        &self.boxes
    }

    fn sync_boxes(&self) {
        for (index, b) in self.boxes.iter().enumerate() {
            b.set_value(&self.form.get(index).unwrap_or_default());
        }
    }

    fn flush(&mut self) {
        let events = mem::take(&mut *self.pending.borrow_mut());
        if events.is_empty() {
            return;
        }
        for event in &events {
            self.form.apply(event);
        }
        self.sync_boxes();
        self.emitter.emit(&OtpInputEvent::Change {
            values: self.form.values(),
        });
        if self.form.is_complete() {
            if self.config.auto_blur {
                self.boxes.iter().for_each(BoxHandle::blur);
            }
            let value = self.form.value();
            debug!("All {} boxes filled", self.boxes.len());
            self.emitter.emit(&OtpInputEvent::Filled { value });
        }
    }
}
