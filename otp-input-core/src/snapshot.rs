// File:    snapshot.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: The externally owned record of each box's last committed value.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The committed value of every box, owned outside the handlers.
//!
//! Handlers only read it through [`ValueSnapshot`]; whoever owns the form
//! applies the emitted events to it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::OtpEvent;

/// Read access to the last committed value of every box.
///
/// The navigation handler consults this to tell an insert into an empty box
/// from an overwrite or an inline paste.
pub trait ValueSnapshot {
    /// The committed value at `index`, or `None` if there is no such box.
    fn value_at(&self, index: usize) -> Option<String>;
}

impl ValueSnapshot for Vec<String> {
    fn value_at(&self, index: usize) -> Option<String> {
        self.get(index).cloned()
    }
}

/// A shared, fixed-length array of committed box values.
///
/// Clones share the same storage, so the form can be handed to a handler as
/// its snapshot while the owner keeps applying emitted events to it.
#[derive(Debug, Clone, Default)]
pub struct OtpForm {
    values: Rc<RefCell<Vec<String>>>,
}

impl OtpForm {
    /// Creates a form of `len` empty values.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            values: Rc::new(RefCell::new(vec![String::new(); len])),
        }
    }

    /// The number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Whether the form holds no values at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    /// The value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<String> {
        self.values.borrow().get(index).cloned()
    }

    /// Commits `value` at `index`. Returns `false` if `index` is out of range.
    pub fn set(&self, index: usize, value: &str) -> bool {
        let mut values = self.values.borrow_mut();
        let Some(slot) = values.get_mut(index) else {
            log::warn!("Ignoring value for out-of-range index {index}");
            return false;
        };
        value.clone_into(slot);
        true
    }

    /// Commits the outcome of a handler event.
    ///
    /// A paste writes character `k` at index `k`; characters beyond the last
    /// index are dropped and trailing values are left as they were.
    pub fn apply(&self, event: &OtpEvent) {
        match event {
            OtpEvent::ValueChange { index, value } => {
                self.set(*index, value);
            }
            OtpEvent::Paste { values } => {
                let mut slots = self.values.borrow_mut();
                for (slot, value) in slots.iter_mut().zip(values) {
                    value.clone_into(slot);
                }
            }
        }
    }

    /// A copy of every value in order.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.values.borrow().clone()
    }

    /// All values joined into one string.
    #[must_use]
    pub fn value(&self) -> String {
        self.values.borrow().concat()
    }

    /// Whether every box holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let values = self.values.borrow();
        !values.is_empty() && values.iter().all(|v| !v.is_empty())
    }

    /// Empties every value.
    pub fn clear(&self) {
        for value in self.values.borrow_mut().iter_mut() {
            value.clear();
        }
    }
}

impl ValueSnapshot for OtpForm {
    fn value_at(&self, index: usize) -> Option<String> {
        self.get(index)
    }
}
