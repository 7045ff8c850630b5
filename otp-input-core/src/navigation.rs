// File:    navigation.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Handles arrow keys, backspace and raw input changes on the boxes of an OTP input.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Keyboard navigation and per-box editing.

use log::{debug, trace, warn};

use crate::box_handle::{split_chars, BoxGroup, BoxHandle, BoxId};
use crate::events::{DefaultAction, EventEmitter, OtpEvent};
use crate::pattern::ValidationPattern;
use crate::snapshot::ValueSnapshot;

/// How a raw input change is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    /// A character was typed over an existing one.
    Overwrite,
    /// A character was typed into an empty box.
    Insert,
    /// Several characters landed in one empty box.
    InlinePaste,
    /// Invalid input over an existing value.
    Revert,
    /// Invalid input with nothing to revert to.
    Clear,
}

impl Edit {
    const fn classify(len: usize, matched: bool, has_previous: bool) -> Self {
        match (len, matched, has_previous) {
            (2, true, true) => Self::Overwrite,
            (1, true, false) => Self::Insert,
            (n, true, false) if n > 1 => Self::InlinePaste,
            (_, false, true) => Self::Revert,
            _ => Self::Clear,
        }
    }
}

/// Reacts to key presses and input changes on any box of the group.
///
/// `S` is the externally owned record of committed values. The handler only
/// reads it; keeping it current with the emitted events is up to the owner.
#[derive(Debug)]
pub struct InputNavigations<B, S> {
    boxes: BoxGroup<B>,
    snapshot: S,
    pattern: ValidationPattern,
    emitter: EventEmitter<OtpEvent>,
}

impl<B: BoxHandle, S: ValueSnapshot> InputNavigations<B, S> {
    /// Creates a handler with no boxes attached yet.
    #[must_use]
    pub fn new(pattern: ValidationPattern, snapshot: S) -> Self {
        Self {
            boxes: BoxGroup::default(),
            snapshot,
            pattern,
            emitter: EventEmitter::new(),
        }
    }

    /// Captures the boxes once they exist. Their order must match the snapshot.
    pub fn initialize(&mut self, boxes: Vec<B>) {
        self.boxes = BoxGroup::new(boxes);
        debug!("Navigation handler attached to {} boxes", self.boxes.len());
    }

    /// Registers a listener for value-change and paste events.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&OtpEvent) + 'static,
    {
        self.emitter.subscribe(listener);
    }

    /// The captured boxes.
    #[must_use]
    pub const fn boxes(&self) -> &BoxGroup<B> {
        &self.boxes
    }

    fn find_index(&self, origin: BoxId) -> Option<usize> {
        let index = self.boxes.index_of(origin);
        if index.is_none() {
            warn!("Event from box {} which is not part of the group", origin.get());
        }
        index
    }

    fn emit(&mut self, event: &OtpEvent) {
        debug!("Emitting {event:?}");
        self.emitter.emit(event);
    }

    /// Moves focus to the previous box. Does nothing on the first box.
    pub fn on_arrow_left(&self, origin: BoxId) {
        if let Some(index) = self.find_index(origin).filter(|&i| i > 0) {
            self.boxes.focus(index - 1);
        }
    }

    /// Moves focus to the next box. Does nothing on the last box.
    pub fn on_arrow_right(&self, origin: BoxId) {
        if let Some(index) = self.find_index(origin) {
            self.boxes.focus(index + 1);
        }
    }

    /// Clears the origin box and moves focus back one box.
    ///
    /// The host's own backspace handling is suppressed whenever the origin
    /// belongs to the group.
    pub fn on_backspace(&mut self, origin: BoxId) -> DefaultAction {
        let Some(index) = self.find_index(origin) else {
            return DefaultAction::Allow;
        };
        self.emit(&OtpEvent::value_change(index, ""));
        if let Some(previous) = index.checked_sub(1) {
            self.boxes.focus(previous);
        }
        DefaultAction::Prevent
    }

    /// Normalizes the raw value of the origin box after an input event.
    ///
    /// The first matching rule wins:
    ///
    /// 1. two valid characters over a committed one: keep only the new one;
    /// 2. one valid character in an empty box: accept it;
    /// 3. several valid characters in an empty box: distribute them like a paste;
    /// 4. invalid input over a committed value: restore that value;
    /// 5. anything else: clear the box.
    ///
    /// Rule 1 assumes the raw value is the committed character plus exactly
    /// one typed character. When the committed character is not part of the
    /// raw value (an input method rewrote the box), the last character is
    /// kept so a box never holds more than one.
    pub fn on_input_changed(&mut self, origin: BoxId, raw: &str) {
        let Some(index) = self.find_index(origin) else {
            return;
        };
        let previous = self.snapshot.value_at(index).unwrap_or_default();
        let matched = self.pattern.matches(raw);
        let edit = Edit::classify(raw.chars().count(), matched, !previous.is_empty());
        trace!("Box {index}: raw {raw:?}, previous {previous:?} -> {edit:?}");

        match edit {
            Edit::Overwrite => {
                let typed = overwritten_char(raw, &previous);
                self.commit(index, &typed);
                self.boxes.focus(index + 1);
            }
            Edit::Insert => {
                self.commit(index, raw);
                self.boxes.focus(index + 1);
            }
            Edit::InlinePaste => {
                let values = split_chars(raw);
                self.boxes.distribute(&values);
                let pasted = values.len();
                self.emit(&OtpEvent::Paste { values });
                self.boxes.focus_after_paste(pasted);
            }
            Edit::Revert => self.commit(index, &previous),
            Edit::Clear => self.commit(index, ""),
        }
    }

    fn commit(&mut self, index: usize, value: &str) {
        self.emit(&OtpEvent::value_change(index, value));
        self.boxes.set_value(index, value);
    }
}

/// The character typed over `previous`: `raw` with exactly one occurrence of
/// `previous` removed, or the last character of `raw` if that does not leave
/// a single character.
fn overwritten_char(raw: &str, previous: &str) -> String {
    let typed = raw.replacen(previous, "", 1);
    if typed.chars().count() == 1 {
        typed
    } else {
        raw.chars().last().map(String::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_rule_order() {
        assert_eq!(Edit::classify(2, true, true), Edit::Overwrite);
        assert_eq!(Edit::classify(1, true, false), Edit::Insert);
        assert_eq!(Edit::classify(2, true, false), Edit::InlinePaste);
        assert_eq!(Edit::classify(6, true, false), Edit::InlinePaste);
        assert_eq!(Edit::classify(1, false, true), Edit::Revert);
        assert_eq!(Edit::classify(2, false, true), Edit::Revert);
        assert_eq!(Edit::classify(1, false, false), Edit::Clear);
        assert_eq!(Edit::classify(0, false, false), Edit::Clear);
    }

    #[test]
    fn overwrite_keeps_one_character() {
        assert_eq!(overwritten_char("53", "5"), "3");
        assert_eq!(overwritten_char("35", "5"), "3");
        assert_eq!(overwritten_char("55", "5"), "5");
        // Committed value missing from the raw value: best effort, keep the last.
        assert_eq!(overwritten_char("34", "5"), "4");
    }

    #[test]
    fn valid_input_of_unexpected_shape_is_cleared() {
        // Three valid characters over a committed value match no rule but the last.
        assert_eq!(Edit::classify(3, true, true), Edit::Clear);
        // An emptied box fails the pattern and reverts to the committed value.
        assert_eq!(Edit::classify(0, false, true), Edit::Revert);
        // A valid single character over a committed value also clears.
        assert_eq!(Edit::classify(1, true, true), Edit::Clear);
    }
}
