//! Element values held by containers.
//!
//! `Value` is the element type every container shape yields. It covers the
//! basic scalars, arbitrary-precision numbers, strings and nested containers.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use num_bigint::BigInt;
use rust_decimal::Decimal;

/// Mapping storage. Keys are kept for display only; comparisons read values.
pub type ValueMap = IndexMap<String, Value>;

/// A single element of a container.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Absent element.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Single character.
    Char(char),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary-precision integer.
    BigInt(BigInt),
    /// Exact decimal number.
    Decimal(Decimal),
    /// String value.
    Str(Arc<str>),
    /// Nested ordered sequence.
    List(Vec<Value>),
    /// Nested mapping.
    Map(ValueMap),
}

impl Value {
    /// Returns true if this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for booleans, characters, integers and floats.
    ///
    /// Arbitrary-precision numbers, strings and nested containers are not
    /// basic scalars.
    pub fn is_basic_scalar(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Char(_) | Value::Int(_) | Value::Float(_)
        )
    }

    /// Returns the variant name, used in log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::BigInt(_) => "bigint",
            Value::Decimal(_) => "decimal",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

/// Free-function form of [`Value::is_basic_scalar`].
pub fn is_basic_scalar(value: &Value) -> bool {
    value.is_basic_scalar()
}

impl PartialEq for Value {
    /// Variant-strict structural equality. `Int(1)` never equals `Str("1")`.
    ///
    /// Numbers compare by representation: floats by bit pattern, so `0.0`
    /// and `-0.0` differ while any two NaNs are equal, and decimals by value
    /// and scale, so `1.50` and `1.5` differ. Value-mode normalization is
    /// what makes such pairs meet. Mappings compare by key/value pairs
    /// regardless of insertion order.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => {
                a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
            }
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b && a.scale() == b.scale(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::BigInt(i) => write!(f, "{i}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}={v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Value {
        Value::Char(c)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Value {
        // Widen through the shortest decimal form so 1.1f32 stays 1.1.
        Value::Float(x.to_string().parse().unwrap_or(f64::from(x)))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Value {
        Value::BigInt(i)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Value {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(Arc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::List(items)
    }
}

impl From<ValueMap> for Value {
    fn from(entries: ValueMap) -> Value {
        Value::Map(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Value {
        v.map_or(Value::Null, Into::into)
    }
}
