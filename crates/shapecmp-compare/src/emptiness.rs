//! Emptiness predicates over argument lists.
//!
//! Every predicate takes an optional list. `None` stands for an absent list
//! and gets the vacuous answer; a present but empty list is rejected with
//! [`Error::InvalidArgument`](shapecmp_core::Error::InvalidArgument).
//!
//! These predicates read cursors, and `is_all_empty`/`is_any_empty` may
//! consume them. The equality predicates materialize cursors first, so the
//! per-argument forms on [`Argument`] are safe to use as skip-predicates there.

use shapecmp_core::{Argument, Result, Value};

use crate::arity::require_at_least;

/// True if every collection is `None` or has no elements.
///
/// # Errors
///
/// Returns `InvalidArgument` if `colls` is an empty slice.
///
/// # Examples
///
/// ```
/// use shapecmp_compare::is_empty;
/// use shapecmp_core::Value;
///
/// let empty: Vec<Value> = Vec::new();
/// assert!(is_empty(Some(&[None, Some(empty)][..])).unwrap());
/// assert!(!is_empty(Some(&[Some(vec![Value::Null])][..])).unwrap());
/// assert!(is_empty::<Vec<Value>>(None).unwrap());
/// ```
pub fn is_empty<C: AsRef<[Value]>>(colls: Option<&[Option<C>]>) -> Result<bool> {
    let Some(colls) = colls else {
        return Ok(true);
    };
    require_at_least(colls.len(), 1, "colls")?;
    Ok(colls
        .iter()
        .all(|coll| coll.as_ref().map_or(true, |c| c.as_ref().is_empty())))
}

/// Negation of [`is_empty`].
pub fn is_not_empty<C: AsRef<[Value]>>(colls: Option<&[Option<C>]>) -> Result<bool> {
    is_empty(colls).map(|empty| !empty)
}

/// True if every argument is null or has no elements.
///
/// Cursors are checked without consuming them.
///
/// # Errors
///
/// Returns `InvalidArgument` if `objects` is an empty slice.
pub fn size_is_empty(objects: Option<&mut [Argument]>) -> Result<bool> {
    let Some(objects) = objects else {
        return Ok(true);
    };
    require_at_least(objects.len(), 1, "objects")?;
    Ok(objects.iter_mut().all(Argument::size_is_empty))
}

/// Negation of [`size_is_empty`].
pub fn size_is_not_empty(objects: Option<&mut [Argument]>) -> Result<bool> {
    size_is_empty(objects).map(|empty| !empty)
}

/// True if every argument's elements are all `Null`, or it has none.
///
/// # Errors
///
/// Returns `InvalidArgument` if `objects` is an empty slice.
pub fn is_all_empty(objects: Option<&mut [Argument]>) -> Result<bool> {
    let Some(objects) = objects else {
        return Ok(true);
    };
    require_at_least(objects.len(), 1, "objects")?;
    Ok(objects.iter_mut().all(Argument::is_all_empty))
}

/// Negation of [`is_all_empty`].
pub fn is_not_all_empty(objects: Option<&mut [Argument]>) -> Result<bool> {
    is_all_empty(objects).map(|empty| !empty)
}

/// True if some argument is null, has no elements, or holds a `Null`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `objects` is an empty slice.
pub fn is_any_empty(objects: Option<&mut [Argument]>) -> Result<bool> {
    let Some(objects) = objects else {
        return Ok(true);
    };
    require_at_least(objects.len(), 1, "objects")?;
    Ok(objects.iter_mut().any(Argument::is_any_empty))
}

/// Negation of [`is_any_empty`].
pub fn is_not_any_empty(objects: Option<&mut [Argument]>) -> Result<bool> {
    is_any_empty(objects).map(|empty| !empty)
}
