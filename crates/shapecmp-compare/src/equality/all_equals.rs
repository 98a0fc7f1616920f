//! Rolling concatenation comparison.

use std::borrow::Cow;

use shapecmp_core::{to_comparable_value, Argument, Result, Value};
use tracing::trace;

use super::{admit, SkipPredicate};
use crate::arity::require_at_least;

/// Single "previous element" slot shared by every argument of one call.
///
/// `None` means no element has been seen yet; a `Null` element is stored and
/// compared like any other value.
#[derive(Debug, Default)]
struct RollingCursor<'a> {
    previous: Option<Cow<'a, Value>>,
}

impl<'a> RollingCursor<'a> {
    /// Compares `next` with the previous element and advances.
    ///
    /// Returns false on mismatch.
    fn accept(&mut self, next: Cow<'a, Value>) -> bool {
        if let Some(previous) = &self.previous {
            if **previous != *next {
                return false;
            }
        }
        self.previous = Some(next);
        true
    }
}

/// True if every element of every admitted argument, read as one stream,
/// equals the element immediately before it.
///
/// Arguments are handled in order: a cursor is materialized, then `skip` may
/// exclude it. Sequences and arrays yield their elements, mappings their
/// values, an opaque argument yields itself and a null argument yields
/// nothing. With `by_value`, elements are compared by their canonical text
/// (see [`to_comparable_value`]).
///
/// A `None` list is vacuously true, as is any input with fewer than two
/// elements in total.
///
/// # Errors
///
/// Returns `InvalidArgument` if `objects` is an empty slice.
///
/// # Examples
///
/// ```
/// use shapecmp_compare::all_equals;
/// use shapecmp_core::Argument;
///
/// let mut args = [Argument::sequence(["1"]), Argument::sequence(["1"])];
/// assert!(all_equals(false, None, Some(&mut args)).unwrap());
///
/// let mut args = [Argument::sequence(["1"]), Argument::sequence(["2"])];
/// assert!(!all_equals(false, None, Some(&mut args)).unwrap());
///
/// // In value mode 1, 1.0 and "1" all read as "1".
/// let mut args = [Argument::sequence([1.0]), Argument::array(["1"]), Argument::sequence([1])];
/// assert!(all_equals(true, None, Some(&mut args)).unwrap());
/// ```
pub fn all_equals(
    by_value: bool,
    mut skip: Option<SkipPredicate<'_>>,
    objects: Option<&mut [Argument]>,
) -> Result<bool> {
    let Some(objects) = objects else {
        return Ok(true);
    };
    require_at_least(objects.len(), 1, "objects")?;

    let mut cursor = RollingCursor::default();
    for (position, object) in objects.iter_mut().enumerate() {
        if !admit(position, object, &mut skip) {
            continue;
        }
        let object: &Argument = object;
        for element in object.elements() {
            if !cursor.accept(to_comparable_value(element, by_value)) {
                trace!(
                    argument = position,
                    kind = element.type_name(),
                    %element,
                    "element differs from its predecessor"
                );
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Negation of [`all_equals`].
///
/// # Errors
///
/// Returns `InvalidArgument` if `objects` is an empty slice.
pub fn not_all_equals(
    by_value: bool,
    skip: Option<SkipPredicate<'_>>,
    objects: Option<&mut [Argument]>,
) -> Result<bool> {
    all_equals(by_value, skip, objects).map(|equal| !equal)
}
