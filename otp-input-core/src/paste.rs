// File:    paste.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Distributes clipboard text across the boxes of an OTP input.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Clipboard paste distribution across the box group.

use log::debug;

use crate::box_handle::{split_chars, BoxGroup, BoxHandle};
use crate::events::{DefaultAction, EventEmitter, OtpEvent};
use crate::pattern::ValidationPattern;

/// Reacts to clipboard pastes anywhere in the box group.
#[derive(Debug)]
pub struct PasteHandler<B> {
    boxes: BoxGroup<B>,
    pattern: ValidationPattern,
    emitter: EventEmitter<OtpEvent>,
}

impl<B: BoxHandle> PasteHandler<B> {
    /// Creates a handler with no boxes attached yet.
    #[must_use]
    pub fn new(pattern: ValidationPattern) -> Self {
        Self {
            boxes: BoxGroup::default(),
            pattern,
            emitter: EventEmitter::new(),
        }
    }

    /// Captures the boxes once they exist.
    pub fn initialize(&mut self, boxes: Vec<B>) {
        self.boxes = BoxGroup::new(boxes);
    }

    /// Registers a listener for paste events.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&OtpEvent) + 'static,
    {
        self.emitter.subscribe(listener);
    }

    /// Writes one pasted character per box starting at the first box and
    /// focuses the box after the pasted text, or the last box.
    ///
    /// Missing text, text failing the pattern, or a handler without boxes
    /// leaves everything untouched. The host's own paste is always
    /// suppressed.
    pub fn on_paste(&mut self, text: Option<&str>) -> DefaultAction {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            debug!("Ignoring paste without text");
            return DefaultAction::Prevent;
        };
        if !self.pattern.matches(text) {
            debug!("Ignoring paste rejected by {}", self.pattern);
            return DefaultAction::Prevent;
        }
        if self.boxes.is_empty() {
            debug!("Ignoring paste before boxes were attached");
            return DefaultAction::Prevent;
        }

        let values = split_chars(text);
        self.boxes.distribute(&values);
        let pasted = values.len();
        let event = OtpEvent::Paste { values };
        debug!("Emitting {event:?}");
        self.emitter.emit(&event);
        self.boxes.focus_after_paste(pasted);
        DefaultAction::Prevent
    }
}
