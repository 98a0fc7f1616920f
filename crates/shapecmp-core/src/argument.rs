//! Container-like arguments and their shapes.
//!
//! Every predicate in shapecmp takes a slice of [`Argument`]s. An argument is
//! classified once into a closed [`Shape`], and [`Argument::elements`] is the
//! single element producer shared by all predicates.
//!
//! Single-use cursors ([`Argument::Iterator`] and [`Argument::Enumeration`])
//! can be drained only once. [`Argument::materialize`] replaces such a cursor
//! with the [`Argument::Sequence`] of its elements; it must run before any
//! predicate that could consume the cursor, and before [`Argument::elements`]
//! or [`Argument::element_count`] are read.

use std::fmt;
use std::iter::{self, Peekable};

use crate::value::{Value, ValueMap};

/// External single-pass cursor.
pub type ExternalIter = Peekable<Box<dyn Iterator<Item = Value>>>;

/// Legacy enumeration cursor.
///
/// Unlike an iterator, an enumeration can report whether elements remain
/// without yielding one.
pub trait Enumeration {
    /// Returns true if another element can be read.
    fn has_more_elements(&self) -> bool;

    /// Reads the next element, or `None` when exhausted.
    fn next_element(&mut self) -> Option<Value>;
}

/// An [`Enumeration`] over an owned vector.
#[derive(Debug, Clone)]
pub struct VecEnumeration {
    items: std::vec::IntoIter<Value>,
}

impl VecEnumeration {
    /// Creates an enumeration yielding `items` in order.
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl Enumeration for VecEnumeration {
    fn has_more_elements(&self) -> bool {
        self.items.len() > 0
    }

    fn next_element(&mut self) -> Option<Value> {
        self.items.next()
    }
}

fn drain(source: &mut dyn Enumeration) -> impl Iterator<Item = Value> + '_ {
    iter::from_fn(move || source.next_element())
}

/// Runtime classification of an [`Argument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Absent argument.
    Null,
    /// Ordered collection.
    Sequence,
    /// Key/value collection; only values are read.
    Mapping,
    /// Fixed-size array.
    Array,
    /// Single-pass external iterator.
    ExternalIterator,
    /// Single-pass legacy enumeration.
    EnumerationCursor,
    /// Anything else; never iterated.
    Opaque,
}

impl Shape {
    /// Returns true for the single-pass cursor shapes.
    pub fn is_cursor(self) -> bool {
        matches!(self, Shape::ExternalIterator | Shape::EnumerationCursor)
    }
}

/// One caller-supplied, container-like argument.
pub enum Argument {
    /// Absent argument.
    Null,
    /// Ordered collection.
    Sequence(Vec<Value>),
    /// Key/value collection.
    Mapping(ValueMap),
    /// Fixed-size array.
    Array(Box<[Value]>),
    /// Single-pass external iterator.
    Iterator(ExternalIter),
    /// Single-pass legacy enumeration.
    Enumeration(Box<dyn Enumeration>),
    /// A value that is not a container.
    Opaque(Value),
}

impl Argument {
    /// Creates a sequence argument.
    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Argument::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Creates an array argument.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Argument::Array(items.into_iter().map(Into::into).collect())
    }

    /// Creates a mapping argument from key/value pairs.
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Argument::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wraps any iterator as a single-pass external cursor.
    pub fn iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        let boxed: Box<dyn Iterator<Item = Value>> = Box::new(items.into_iter());
        Argument::Iterator(boxed.peekable())
    }

    /// Wraps a legacy enumeration cursor.
    pub fn enumeration<E: Enumeration + 'static>(source: E) -> Self {
        Argument::Enumeration(Box::new(source))
    }

    /// Returns the shape of this argument.
    pub fn shape(&self) -> Shape {
        match self {
            Argument::Null => Shape::Null,
            Argument::Sequence(_) => Shape::Sequence,
            Argument::Mapping(_) => Shape::Mapping,
            Argument::Array(_) => Shape::Array,
            Argument::Iterator(_) => Shape::ExternalIterator,
            Argument::Enumeration(_) => Shape::EnumerationCursor,
            Argument::Opaque(_) => Shape::Opaque,
        }
    }

    /// Returns true if this argument is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Argument::Null)
    }

    /// Drains a cursor argument into a [`Argument::Sequence`].
    ///
    /// Returns true if a cursor was drained. Other shapes are left alone, so
    /// calling this twice never drains anything twice.
    pub fn materialize(&mut self) -> bool {
        let drained: Vec<Value> = match self {
            Argument::Iterator(cursor) => cursor.by_ref().collect(),
            Argument::Enumeration(cursor) => drain(&mut **cursor).collect(),
            _ => return false,
        };
        *self = Argument::Sequence(drained);
        true
    }

    /// Number of elements, for shapes that have a length.
    ///
    /// `Null`, `Opaque` and not-yet-materialized cursors have no length and
    /// return `None`.
    pub fn element_count(&self) -> Option<usize> {
        match self {
            Argument::Sequence(items) => Some(items.len()),
            Argument::Array(items) => Some(items.len()),
            Argument::Mapping(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Elements in natural order.
    ///
    /// Mappings yield their values, `Opaque` yields itself, `Null` yields
    /// nothing. Cursors yield nothing until [`materialize`](Self::materialize)
    /// has run.
    pub fn elements(&self) -> Elements<'_> {
        match self {
            Argument::Sequence(items) => Elements::Slice(items.iter()),
            Argument::Array(items) => Elements::Slice(items.iter()),
            Argument::Mapping(entries) => Elements::Values(entries.values()),
            Argument::Opaque(value) => Elements::Single(iter::once(value)),
            Argument::Null | Argument::Iterator(_) | Argument::Enumeration(_) => Elements::Empty,
        }
    }

    /// True if this argument is null or has no elements.
    ///
    /// Cursors are checked without consuming an element. `Opaque` counts as
    /// one element.
    pub fn size_is_empty(&mut self) -> bool {
        match self {
            Argument::Null => true,
            Argument::Sequence(items) => items.is_empty(),
            Argument::Array(items) => items.is_empty(),
            Argument::Mapping(entries) => entries.is_empty(),
            Argument::Iterator(cursor) => cursor.peek().is_none(),
            Argument::Enumeration(cursor) => !cursor.has_more_elements(),
            Argument::Opaque(_) => false,
        }
    }

    /// True if every element is `Null`, or there are none.
    ///
    /// Cursors are consumed up to the first non-null element.
    pub fn is_all_empty(&mut self) -> bool {
        match self {
            Argument::Iterator(cursor) => cursor.all(|v| v.is_null()),
            Argument::Enumeration(cursor) => drain(&mut **cursor).all(|v| v.is_null()),
            other => other.elements().all(Value::is_null),
        }
    }

    /// True if this argument is null, has no elements, or holds a `Null`.
    ///
    /// Cursors are consumed up to the first null element.
    pub fn is_any_empty(&mut self) -> bool {
        if self.size_is_empty() {
            return true;
        }
        match self {
            Argument::Iterator(cursor) => cursor.any(|v| v.is_null()),
            Argument::Enumeration(cursor) => drain(&mut **cursor).any(|v| v.is_null()),
            other => other.elements().any(Value::is_null),
        }
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Null => f.write_str("Null"),
            Argument::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Argument::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
            Argument::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Argument::Iterator(_) => f.write_str("Iterator(..)"),
            Argument::Enumeration(_) => f.write_str("Enumeration(..)"),
            Argument::Opaque(value) => f.debug_tuple("Opaque").field(value).finish(),
        }
    }
}

impl From<Value> for Argument {
    /// Classifies a value: lists become sequences, maps become mappings,
    /// `Null` stays null, and anything else is opaque.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Argument::Null,
            Value::List(items) => Argument::Sequence(items),
            Value::Map(entries) => Argument::Mapping(entries),
            other => Argument::Opaque(other),
        }
    }
}

impl From<Vec<Value>> for Argument {
    fn from(items: Vec<Value>) -> Self {
        Argument::Sequence(items)
    }
}

impl From<ValueMap> for Argument {
    fn from(entries: ValueMap) -> Self {
        Argument::Mapping(entries)
    }
}

impl From<Box<[Value]>> for Argument {
    fn from(items: Box<[Value]>) -> Self {
        Argument::Array(items)
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(v: Option<T>) -> Self {
        v.map_or(Argument::Null, Into::into)
    }
}

/// Element producer returned by [`Argument::elements`].
#[derive(Debug)]
pub enum Elements<'a> {
    /// Sequence or array elements.
    Slice(std::slice::Iter<'a, Value>),
    /// Mapping values.
    Values(indexmap::map::Values<'a, String, Value>),
    /// The single element of an opaque argument.
    Single(iter::Once<&'a Value>),
    /// No elements.
    Empty,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        match self {
            Elements::Slice(it) => it.next(),
            Elements::Values(it) => it.next(),
            Elements::Single(it) => it.next(),
            Elements::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Elements::Slice(it) => it.size_hint(),
            Elements::Values(it) => it.size_hint(),
            Elements::Single(it) => it.size_hint(),
            Elements::Empty => (0, Some(0)),
        }
    }
}
