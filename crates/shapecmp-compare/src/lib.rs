//! Emptiness and equality predicates over heterogeneous containers.
//!
//! All predicates take a slice of [`Argument`](shapecmp_core::Argument)s of
//! mixed shape and return `Result<bool>`:
//!
//! - [`emptiness`]: `is_empty`, `size_is_empty`, `is_all_empty`,
//!   `is_any_empty` and their negations
//! - [`equality`]: `all_equals` and `all_equals_same_index` and their negations
//! - [`legacy`]: deprecated in-place array helpers

mod arity;
pub mod emptiness;
pub mod equality;
pub mod legacy;


pub use emptiness::{
    is_all_empty, is_any_empty, is_empty, is_not_all_empty, is_not_any_empty, is_not_empty,
    size_is_empty, size_is_not_empty,
};
pub use equality::{
    all_equals, all_equals_same_index, not_all_equals, not_all_equals_same_index, SkipPredicate,
};
