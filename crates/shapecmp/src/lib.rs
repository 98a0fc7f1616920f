//! shapecmp - Emptiness and equality predicates over heterogeneous containers
//!
//! Pass a list of container-like arguments of any shape (sequences, arrays,
//! mappings, external cursors, legacy enumerations, lone scalars) and ask
//! whether they are empty or whether their elements agree.
//!
//! # Example
//!
//! ```rust
//! use shapecmp::prelude::*;
//!
//! let mut args = [Argument::sequence(["1"]), Argument::iter(vec![Value::from("1")])];
//! assert!(all_equals(false, None, Some(&mut args)).unwrap());
//!
//! // Value mode compares numbers by their canonical text.
//! let mut args = [Argument::sequence([1.50]), Argument::sequence(["1.5"])];
//! assert!(all_equals(true, None, Some(&mut args)).unwrap());
//! ```

// Value model and argument shapes
pub use shapecmp_core::{
    is_basic_scalar, plain_decimal, plain_float, to_comparable_value, Argument, Elements,
    Enumeration, Error, ExternalIter, Result, Shape, Value, ValueMap, VecEnumeration,
};

// Predicates
pub use shapecmp_compare::{
    all_equals, all_equals_same_index, is_all_empty, is_any_empty, is_empty, is_not_all_empty,
    is_not_any_empty, is_not_empty, not_all_equals, not_all_equals_same_index, size_is_empty,
    size_is_not_empty, SkipPredicate,
};

// Deprecated array helpers
pub use shapecmp_compare::legacy;

// Configuration
pub use shapecmp_config::{CompareConfig, ConfigError, SkipPolicy};

mod comparator;
pub use comparator::Comparator;

pub mod prelude {
    pub use super::{Argument, Shape, Value, ValueMap};
    pub use super::{
        all_equals, all_equals_same_index, is_all_empty, is_any_empty, is_empty,
        is_not_all_empty, is_not_any_empty, is_not_empty, not_all_equals,
        not_all_equals_same_index, size_is_empty, size_is_not_empty,
    };
    pub use super::{Comparator, CompareConfig, SkipPolicy};
}
