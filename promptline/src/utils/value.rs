//! # Answer Values
//!
//! Every answer is read into one of four *wide* representations, no matter how
//! narrow the caller's destination is:
//!
//! | [`ValueType`] | wide Rust type |
//! |---------------|----------------|
//! | `Int`         | `i64`          |
//! | `Uint`        | `u64`          |
//! | `Float`       | `f64`          |
//! | `String`      | `String`       |
//!
//! Narrowing into `i8`, `u16`, `f32`, ... only happens at the very end, see
//! [`crate::utils::cast`].
//!
//! Defaults and first-answers are handed to a [`crate::utils::Question`] as a
//! [`Value`]. The `From` impls below pick the family from the Rust type:
//!
//! ```rust
//! use promptline::utils::{Value, ValueType};
//!
//! assert_eq!(Value::from(13i32), Value::Int(13));
//! assert_eq!(Value::from(255u8).value_type(), ValueType::Uint);
//! assert_eq!(Value::from("yes"), Value::Str("yes".to_string()));
//! ```
use std::fmt::Display;

/// The type family a question reads.
///
/// The slice variants are reserved: asking for them always fails with
/// [`crate::utils::PromptError::Unimplemented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    Uint,
    Float,
    String,
    StringSlice,
    IntSlice,
    UintSlice,
    FloatSlice,
}

impl ValueType {
    /// Returns `true` for the reserved list-typed variants.
    pub fn is_slice(&self) -> bool {
        matches!(
            self,
            Self::StringSlice | Self::IntSlice | Self::UintSlice | Self::FloatSlice
        )
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "Int"),
            Self::Uint => write!(f, "Uint"),
            Self::Float => write!(f, "Float"),
            Self::String => write!(f, "String"),
            Self::StringSlice => write!(f, "StringSlice"),
            Self::IntSlice => write!(f, "IntSlice"),
            Self::UintSlice => write!(f, "UintSlice"),
            Self::FloatSlice => write!(f, "FloatSlice"),
        }
    }
}

/// A wide, typed answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
}

impl Value {
    /// The family this value belongs to.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Int(_) => ValueType::Int,
            Self::Uint(_) => ValueType::Uint,
            Self::Float(_) => ValueType::Float,
            Self::Str(_) => ValueType::String,
        }
    }

    /// Renders the value as a literal: strings are quoted and escaped,
    /// numbers print as usual.
    pub fn literal(&self) -> String {
        match self {
            Self::Str(s) => format!("{:?}", s),
            other => other.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(x) => write!(f, "{}", x),
            Self::Uint(x) => write!(f, "{}", x),
            Self::Float(x) => write!(f, "{}", x),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Implements `From<$t> for Value` by widening into the given variant.
macro_rules! widen_into {
    ($variant:ident, $wide:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(x: $t) -> Self {
                    Value::$variant(x as $wide)
                }
            }
        )+
    };
}

widen_into!(Int, i64, i8, i16, i32, i64, isize);
widen_into!(Uint, u64, u8, u16, u32, u64, usize);
widen_into!(Float, f64, f32, f64);

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
