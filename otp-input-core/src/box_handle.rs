// File:    box_handle.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: The capability interface over a single input box, an in-memory implementation and the ordered box group.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Box handles and the ordered group the handlers operate on.
//!
//! A handle behaves like a DOM element reference: it is cheap to clone and
//! every method takes `&self`, so the same box can be held by the caller, by
//! the navigation handler and by the paste handler at once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identity of one input box, used to locate the box an event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(usize);

impl BoxId {
    /// Creates an identity from a raw number.
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw number behind this identity.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// The operations the handlers need from a single-character input box.
pub trait BoxHandle {
    /// The identity of this box.
    fn id(&self) -> BoxId;
    /// The text currently displayed in the box.
    fn value(&self) -> String;
    /// Replaces the displayed text.
    fn set_value(&self, value: &str);
    /// Moves keyboard focus to this box.
    fn focus(&self);
    /// Removes keyboard focus from this box if it holds it.
    fn blur(&self);
}

/// Shared record of which box currently holds focus.
///
/// Focusing a box implicitly takes focus away from every other box that
/// shares the same tracker.
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    focused: Rc<Cell<Option<BoxId>>>,
}

impl FocusTracker {
    /// Creates a tracker with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The box that currently holds focus, if any.
    #[must_use]
    pub fn focused(&self) -> Option<BoxId> {
        self.focused.get()
    }

    fn set(&self, id: Option<BoxId>) {
        self.focused.set(id);
    }
}

/// An input box that lives entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryBox {
    id: BoxId,
    value: Rc<RefCell<String>>,
    tracker: FocusTracker,
}

impl MemoryBox {
    /// Creates an empty box reporting focus changes to `tracker`.
    #[must_use]
    pub fn new(id: BoxId, tracker: FocusTracker) -> Self {
        Self {
            id,
            value: Rc::new(RefCell::new(String::new())),
            tracker,
        }
    }

    /// Creates `len` empty boxes with ids `0..len` sharing one focus tracker.
    #[must_use]
    pub fn group(len: usize) -> (Vec<Self>, FocusTracker) {
        let tracker = FocusTracker::new();
        let boxes = (0..len)
            .map(|i| Self::new(BoxId::new(i), tracker.clone()))
            .collect();
        (boxes, tracker)
    }

    /// Whether this box currently holds focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.tracker.focused() == Some(self.id)
    }
}

impl BoxHandle for MemoryBox {
    fn id(&self) -> BoxId {
        self.id
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_owned();
    }

    fn focus(&self) {
        self.tracker.set(Some(self.id));
    }

    fn blur(&self) {
        if self.is_focused() {
            self.tracker.set(None);
        }
    }
}

/// The fixed, ordered list of boxes captured once the boxes exist.
#[derive(Debug, Clone)]
pub struct BoxGroup<B> {
    boxes: Vec<B>,
}

impl<B> Default for BoxGroup<B> {
    fn default() -> Self {
        Self { boxes: Vec::new() }
    }
}

impl<B: BoxHandle> BoxGroup<B> {
    /// Captures `boxes` in display order.
    #[must_use]
    pub const fn new(boxes: Vec<B>) -> Self {
        Self { boxes }
    }

    /// The number of boxes in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the group has no boxes (for example before initialization).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The box at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&B> {
        self.boxes.get(index)
    }

    /// Iterates the boxes in display order.
    pub fn iter(&self) -> impl Iterator<Item = &B> {
        self.boxes.iter()
    }

    /// Finds the position of the box with identity `id`.
    #[must_use]
    pub fn index_of(&self, id: BoxId) -> Option<usize> {
        self.boxes.iter().position(|b| b.id() == id)
    }

    /// Focuses the box at `index`. Out-of-range indices are ignored.
    ///
    /// Returns whether focus was moved.
    pub fn focus(&self, index: usize) -> bool {
        let Some(b) = self.boxes.get(index) else {
            return false;
        };
        log::debug!("Focusing box {index}");
        b.focus();
        true
    }

    /// Sets the displayed value of the box at `index`, if it exists.
    pub fn set_value(&self, index: usize, value: &str) {
        if let Some(b) = self.boxes.get(index) {
            b.set_value(value);
        }
    }

    /// Writes character `k` into box `k` for every box that has a
    /// corresponding character. Boxes beyond the pasted length are untouched
    /// and characters beyond the last box are dropped.
    pub fn distribute(&self, chars: &[String]) {
        for (b, c) in self.boxes.iter().zip(chars) {
            b.set_value(c);
        }
    }

    /// Focuses the box following a paste of `pasted` characters, clamped to
    /// the last box.
    pub fn focus_after_paste(&self, pasted: usize) {
        if let Some(last) = self.boxes.len().checked_sub(1) {
            self.focus(pasted.min(last));
        }
    }
}

/// Splits `text` into one string per character.
#[must_use]
pub fn split_chars(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}
