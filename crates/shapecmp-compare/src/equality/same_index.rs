//! Positional comparison.

use std::borrow::Cow;

use shapecmp_core::{to_comparable_value, Argument, Result, Value};
use tracing::trace;

use super::{admit, SkipPredicate};
use crate::arity::require_at_least;

/// True if admitted arguments have equal lengths and agree element by
/// element at every position.
///
/// Pass one materializes cursors, applies `skip` once per argument and checks
/// lengths; mappings count their values. Null and opaque arguments have no
/// length and are left out of both passes. Pass two compares the elements at
/// each index across the remaining arguments, normalized as in
/// [`all_equals`](super::all_equals).
///
/// A `None` list is vacuously true.
///
/// # Errors
///
/// Returns `InvalidArgument` if `objects` has fewer than two arguments.
///
/// # Examples
///
/// ```
/// use shapecmp_compare::all_equals_same_index;
/// use shapecmp_core::Argument;
///
/// let mut args = [Argument::sequence([1, 2]), Argument::array([1, 2])];
/// assert!(all_equals_same_index(false, None, Some(&mut args)).unwrap());
///
/// let mut args = [Argument::sequence([1, 2]), Argument::sequence([1, 2, 3])];
/// assert!(!all_equals_same_index(false, None, Some(&mut args)).unwrap());
/// ```
pub fn all_equals_same_index(
    by_value: bool,
    mut skip: Option<SkipPredicate<'_>>,
    objects: Option<&mut [Argument]>,
) -> Result<bool> {
    let Some(objects) = objects else {
        return Ok(true);
    };
    require_at_least(objects.len(), 2, "objects")?;

    let mut counted = Vec::with_capacity(objects.len());
    let mut expected_len: Option<usize> = None;
    for (position, object) in objects.iter_mut().enumerate() {
        let len = if admit(position, object, &mut skip) {
            object.element_count()
        } else {
            None
        };
        counted.push(len.is_some());
        let Some(len) = len else {
            continue;
        };
        match expected_len {
            Some(expected) if expected != len => {
                trace!(argument = position, expected, len, "length differs");
                return Ok(false);
            }
            _ => expected_len = Some(len),
        }
    }

    let mut slots: Vec<Cow<'_, Value>> = Vec::with_capacity(expected_len.unwrap_or(0));
    let admitted = objects
        .iter()
        .enumerate()
        .zip(counted)
        .filter_map(|(entry, is_counted)| is_counted.then_some(entry));
    for (position, object) in admitted {
        for (index, element) in object.elements().enumerate() {
            let next = to_comparable_value(element, by_value);
            match slots.get(index) {
                None => slots.push(next),
                Some(stored) if **stored != *next => {
                    trace!(
                        argument = position,
                        index,
                        kind = element.type_name(),
                        %element,
                        "element differs at index"
                    );
                    return Ok(false);
                }
                Some(_) => {}
            }
        }
    }
    Ok(true)
}

/// Negation of [`all_equals_same_index`].
///
/// # Errors
///
/// Returns `InvalidArgument` if `objects` has fewer than two arguments.
pub fn not_all_equals_same_index(
    by_value: bool,
    skip: Option<SkipPredicate<'_>>,
    objects: Option<&mut [Argument]>,
) -> Result<bool> {
    all_equals_same_index(by_value, skip, objects).map(|equal| !equal)
}
