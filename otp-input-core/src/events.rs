// File:    events.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: The events both handlers emit and a synchronous listener list to deliver them.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Handler events and their synchronous delivery.

use serde::Serialize;
use std::fmt;

/// An event produced by the navigation or paste handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OtpEvent {
    /// The value at `index` changed (to zero or one character).
    ValueChange {
        /// Position of the box in the group.
        index: usize,
        /// The new value of the box.
        value: String,
    },
    /// Text was pasted and distributed from the first box onwards.
    Paste {
        /// Every pasted character, including any that did not fit.
        values: Vec<String>,
    },
}

impl OtpEvent {
    /// Shorthand for a [`OtpEvent::ValueChange`].
    #[must_use]
    pub fn value_change(index: usize, value: impl Into<String>) -> Self {
        Self::ValueChange {
            index,
            value: value.into(),
        }
    }
}

/// Whether the host should still run its default action for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DefaultAction {
    /// Let the host handle the event as usual.
    Allow,
    /// Suppress the host's default handling.
    Prevent,
}

impl DefaultAction {
    /// Whether the default action must be suppressed.
    #[must_use]
    pub const fn is_prevented(self) -> bool {
        matches!(self, Self::Prevent)
    }
}

type Listener<T> = Box<dyn FnMut(&T)>;

/// Delivers events synchronously, in subscription order, to every listener.
pub struct EventEmitter<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> EventEmitter<T> {
    /// Creates an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registers a listener.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Hands `event` to every listener before returning.
    pub fn emit(&mut self, event: &T) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    /// The number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
