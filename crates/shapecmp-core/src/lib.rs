//! shapecmp Core - Value model and container shapes
//!
//! This crate provides the fundamental abstractions for shapecmp:
//! - [`Value`] elements held by containers
//! - [`Argument`] container-like inputs and their [`Shape`]
//! - Value-mode normalization used by the equality predicates
//! - The [`Error`] type shared by all predicates

pub mod argument;
pub mod error;
pub mod normalize;
pub mod value;


pub use argument::{Argument, Elements, Enumeration, ExternalIter, Shape, VecEnumeration};
pub use error::{Error, Result};
pub use normalize::{plain_decimal, plain_float, to_comparable_value};
pub use value::{is_basic_scalar, Value, ValueMap};
