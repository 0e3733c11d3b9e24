//! # Prompt Errors
//!
//! Every failure in the toolkit is a [`PromptError`]. Errors come in two
//! flavours:
//!
//! - **recoverable**: bad user input. The prompt driver prints the error and
//!   asks again.
//! - **fatal**: a programming error or a broken input stream. The ask
//!   operation stops and hands the error back to the caller.
//!
//! The driver only ever looks at [`PromptError::is_recoverable`], so adding a
//! new variant never requires touching the retry loop.
//!
//! ```rust
//! use promptline::utils::{PromptError, ValueType};
//!
//! let err = PromptError::Parse { input: "12abc".into(), expected: ValueType::Int };
//! assert!(err.is_recoverable());
//! assert!(!PromptError::NoChoices.is_recoverable());
//! ```
use thiserror::Error;

use crate::utils::{responses::Response, value::Value, value::ValueType};

#[derive(Debug, Error)]
pub enum PromptError {
    /// The (normalized) input was empty and no default was configured.
    #[error("Can not use empty string as value")]
    EmptyInput,

    /// The text could not be read as the question's type.
    #[error("Could not read {input:?} as {expected}")]
    Parse { input: String, expected: ValueType },

    /// The parsed value was rejected by the question's constraint set.
    #[error("{}", render_not_in_set(.response, .set, .value))]
    NotInSet {
        response: String,
        set: String,
        value: Value,
    },

    /// Narrowing into the destination changed the value. `thin` is the
    /// narrowed value widened back.
    #[error("Input out of destination range ({wide} -> {thin})")]
    Precision { wide: Value, thin: Value },

    /// A default or first-answer belongs to the wrong type family.
    #[error("{response} ({received} != {expected})")]
    TypeMismatch {
        response: String,
        expected: ValueType,
        received: ValueType,
    },

    /// A constraint set was asked about a value of a foreign family.
    #[error("{set} set can't contain {member}")]
    MemberType { set: ValueType, member: ValueType },

    /// The destination does not belong to the question's family.
    #[error("Can not assign a {expected} answer to a {destination} destination")]
    UnexpectedCastType {
        expected: ValueType,
        destination: &'static str,
    },

    /// The line read was not valid UTF-8. `input` is its lossy decoding.
    #[error("Input is not valid UTF-8 ({input:?})")]
    InvalidEncoding { input: String },

    #[error("No menu choices given")]
    NoChoices,

    /// A menu answer passed the menu's set but selects no choice.
    #[error("No menu choice matches {0:?}")]
    UnknownChoice(String),

    #[error("Range max is less than min ({max} < {min})")]
    EmptyRange { min: String, max: String },

    #[error("{0} unimplemented")]
    Unimplemented(ValueType),

    /// The line source is exhausted.
    #[error("End of input")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PromptError {
    /// Whether a prompt can recover from this error by asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::Parse { .. }
                | Self::NotInSet { .. }
                | Self::Precision { .. }
                | Self::TypeMismatch { .. }
                | Self::InvalidEncoding { .. }
        )
    }

    /// The response template this error was rendered with, if any.
    pub fn response(&self) -> Option<Response> {
        match self {
            Self::NotInSet { .. } => Some(Response::NotInSet),
            Self::TypeMismatch { .. } => Some(Response::InvalidType),
            _ => None,
        }
    }
}

fn render_not_in_set(response: &str, set: &str, value: &Value) -> String {
    if response.is_empty() {
        return String::from("Not in set");
    }
    format!("{} {} ({})", response, set, value.literal())
}
