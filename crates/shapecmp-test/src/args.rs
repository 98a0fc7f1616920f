//! Argument builders for tests.

use std::cell::Cell;
use std::rc::Rc;

use shapecmp_core::{Argument, Value, VecEnumeration};

/// A sequence argument of string elements.
pub fn strings(items: &[&str]) -> Argument {
    Argument::sequence(items.iter().copied())
}

/// A sequence argument of integer elements.
pub fn ints(items: &[i64]) -> Argument {
    Argument::sequence(items.iter().copied())
}

/// An external cursor over `items`.
pub fn iter_of(items: Vec<Value>) -> Argument {
    Argument::iter(items)
}

/// A legacy enumeration over `items`.
pub fn enumeration_of(items: Vec<Value>) -> Argument {
    Argument::enumeration(VecEnumeration::new(items))
}

/// Counts the elements pulled out of a cursor.
///
/// Cloned handles share the same count, so a test can keep one handle while
/// the cursor is moved into an [`Argument`].
#[derive(Debug, Clone, Default)]
pub struct DrainCounter {
    pulled: Rc<Cell<usize>>,
}

impl DrainCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements pulled so far.
    pub fn pulled(&self) -> usize {
        self.pulled.get()
    }

    /// An external cursor over `items` that bumps this counter on every
    /// element it yields.
    pub fn cursor(&self, items: Vec<Value>) -> Argument {
        let pulled = Rc::clone(&self.pulled);
        Argument::iter(items.into_iter().inspect(move |_| pulled.set(pulled.get() + 1)))
    }
}
