//! Shape-polymorphic equality predicates.
//!
//! - [`all_equals`] reads every admitted argument as one concatenated stream
//!   and compares each element with the one before it.
//! - [`all_equals_same_index`] first requires admitted arguments to agree on
//!   length, then compares elements at the same position.
//!
//! Both entry points admit arguments through the same step: cursors are
//! materialized, then the optional skip-predicate decides whether the
//! argument takes part. Elements are normalized with
//! [`to_comparable_value`](shapecmp_core::to_comparable_value) before any
//! comparison.

mod all_equals;
mod same_index;

#[cfg(test)]
mod tests;

pub use all_equals::{all_equals, not_all_equals};
pub use same_index::{all_equals_same_index, not_all_equals_same_index};

use shapecmp_core::Argument;
use tracing::{debug, trace};

/// Caller-supplied predicate that excludes an argument from comparison.
///
/// It always sees a materialized argument, never a cursor, so it may read
/// the argument freely. The per-argument emptiness checks on [`Argument`]
/// (`size_is_empty`, `is_all_empty`, `is_any_empty`) fit this shape.
pub type SkipPredicate<'a> = &'a mut dyn FnMut(&mut Argument) -> bool;

/// Materializes `object` and runs the skip-predicate on it.
///
/// Returns true if the argument takes part in the comparison.
fn admit(position: usize, object: &mut Argument, skip: &mut Option<SkipPredicate<'_>>) -> bool {
    let shape = object.shape();
    if shape.is_cursor() {
        object.materialize();
        trace!(argument = position, ?shape, "materialized cursor");
    }
    let skipped = match skip.as_deref_mut() {
        Some(pred) => pred(object),
        None => false,
    };
    if skipped {
        debug!(argument = position, ?shape, "skipped");
    }
    !skipped
}
