//! # Destination Narrowing
//!
//! Answers are parsed into wide values (`i64`, `u64`, `f64`, `String`). The
//! caller's destination may be narrower. Every supported destination shape
//! implements [`Answerable`], which ties the shape to its family and knows
//! how to narrow a wide value into it.
//!
//! Narrowing is checked: the narrowed value is widened again and compared to
//! the parsed value. Any difference is a recoverable
//! [`PromptError::Precision`], so the user can be asked again.
//!
//! ```rust
//! use promptline::utils::{cast, PromptError, Value};
//!
//! let mut small: i8 = 0;
//! assert!(matches!(cast(&Value::Int(300), &mut small), Err(PromptError::Precision { .. })));
//! cast(&Value::Int(100), &mut small).unwrap();
//! assert_eq!(small, 100);
//! ```
use crate::utils::{
    errors::PromptError,
    value::{Value, ValueType},
};

/// A destination a question can write its answer into.
pub trait Answerable: Sized {
    /// The family read for this destination.
    const VALUE_TYPE: ValueType;
    /// Rust name of the destination, for diagnostics.
    const SHAPE: &'static str;

    /// Narrows a wide value into this shape.
    ///
    /// # Errors
    /// - [`PromptError::Precision`] if the value does not survive narrowing.
    /// - [`PromptError::UnexpectedCastType`] if `value` is of another family.
    fn narrow(value: &Value) -> Result<Self, PromptError>;
}

fn unexpected<T: Answerable>(value: &Value) -> PromptError {
    PromptError::UnexpectedCastType {
        expected: value.value_type(),
        destination: T::SHAPE,
    }
}

/// Implements [`Answerable`] for integer shapes of one family.
macro_rules! integer_shape {
    ($variant:ident, $wide:ty, $vt:expr, $($t:ty),+) => {
        $(
            impl Answerable for $t {
                const VALUE_TYPE: ValueType = $vt;
                const SHAPE: &'static str = stringify!($t);

                #[allow(clippy::unnecessary_cast)]
                fn narrow(value: &Value) -> Result<Self, PromptError> {
                    match value {
                        Value::$variant(wide) => {
                            let thin = *wide as $t;
                            if thin as $wide != *wide {
                                return Err(PromptError::Precision {
                                    wide: value.clone(),
                                    thin: Value::$variant(thin as $wide),
                                });
                            }
                            Ok(thin)
                        }
                        _ => Err(unexpected::<$t>(value)),
                    }
                }
            }
        )+
    };
}

integer_shape!(Int, i64, ValueType::Int, i8, i16, i32, i64, isize);
integer_shape!(Uint, u64, ValueType::Uint, u8, u16, u32, u64, usize);

impl Answerable for f32 {
    const VALUE_TYPE: ValueType = ValueType::Float;
    const SHAPE: &'static str = "f32";

    fn narrow(value: &Value) -> Result<Self, PromptError> {
        match value {
            Value::Float(wide) => {
                let thin = *wide as f32;
                let back = thin as f64;
                // NaN never compares equal to itself.
                if back != *wide && !(wide.is_nan() && back.is_nan()) {
                    return Err(PromptError::Precision {
                        wide: value.clone(),
                        thin: Value::Float(back),
                    });
                }
                Ok(thin)
            }
            _ => Err(unexpected::<f32>(value)),
        }
    }
}

impl Answerable for f64 {
    const VALUE_TYPE: ValueType = ValueType::Float;
    const SHAPE: &'static str = "f64";

    fn narrow(value: &Value) -> Result<Self, PromptError> {
        match value {
            Value::Float(wide) => Ok(*wide),
            _ => Err(unexpected::<f64>(value)),
        }
    }
}

impl Answerable for String {
    const VALUE_TYPE: ValueType = ValueType::String;
    const SHAPE: &'static str = "String";

    fn narrow(value: &Value) -> Result<Self, PromptError> {
        match value {
            Value::Str(s) => Ok(s.clone()),
            _ => Err(unexpected::<String>(value)),
        }
    }
}

/// Narrows `value` into `dest`. `dest` is untouched on error.
pub fn cast<T: Answerable>(value: &Value, dest: &mut T) -> Result<(), PromptError> {
    *dest = T::narrow(value)?;
    Ok(())
}
