//! # Response Templates
//!
//! The human-readable fragments a [`crate::utils::Question`] uses when it has
//! to talk back to the user. Each one can be overridden independently:
//!
//! ```rust
//! use promptline::utils::{Response, ResponseTemplates};
//!
//! let mut responses = ResponseTemplates::default();
//! responses[Response::AskOnError] = "Try again: ".to_string();
//! assert_eq!(responses[Response::NotInSet], "Answer must be in");
//! ```
//!
//! With the `serde` feature the whole table can be loaded from JSON. Keys
//! left out keep their defaults:
//!
//! ```rust,ignore
//! let responses = ResponseTemplates::from_json_str(r#"{ "ask_on_error": "Again? " }"#)?;
//! ```
use std::ops::{Index, IndexMut};

/// The kinds of responses a question can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Response {
    /// Replaces the prompt text after a recoverable error.
    AskOnError,
    /// Prefix for [`crate::utils::PromptError::TypeMismatch`].
    InvalidType,
    /// Prefix for [`crate::utils::PromptError::NotInSet`].
    NotInSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResponseTemplates {
    pub ask_on_error: String,
    pub invalid_type: String,
    pub not_in_set: String,
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            ask_on_error: String::from("?  "),
            invalid_type: String::from("Invalid type"),
            not_in_set: String::from("Answer must be in"),
        }
    }
}

impl Index<Response> for ResponseTemplates {
    type Output = String;

    fn index(&self, response: Response) -> &String {
        match response {
            Response::AskOnError => &self.ask_on_error,
            Response::InvalidType => &self.invalid_type,
            Response::NotInSet => &self.not_in_set,
        }
    }
}

impl IndexMut<Response> for ResponseTemplates {
    fn index_mut(&mut self, response: Response) -> &mut String {
        match response {
            Response::AskOnError => &mut self.ask_on_error,
            Response::InvalidType => &mut self.invalid_type,
            Response::NotInSet => &mut self.not_in_set,
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        impl ResponseTemplates {
            /// Reads a template table from JSON. Missing keys keep their defaults.
            pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
                serde_json::from_str(json)
            }

            /// Writes the template table as pretty-printed JSON.
            pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
                serde_json::to_string_pretty(self)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_reads_each_template() {
        let responses = ResponseTemplates::default();
        assert_eq!(responses[Response::AskOnError], "?  ");
        assert_eq!(responses[Response::InvalidType], "Invalid type");
        assert_eq!(responses[Response::NotInSet], "Answer must be in");
    }

    #[test]
    fn test_templates_override_independently() {
        let mut responses = ResponseTemplates::default();
        responses[Response::NotInSet] = String::from("Pick from");
        assert_eq!(responses.not_in_set, "Pick from");
        assert_eq!(responses[Response::AskOnError], "?  ");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_partial_override() {
        let responses =
            ResponseTemplates::from_json_str(r#"{ "ask_on_error": "Again: " }"#).unwrap();
        assert_eq!(responses[Response::AskOnError], "Again: ");
        assert_eq!(responses[Response::InvalidType], "Invalid type");

        let json = responses.to_json_string().unwrap();
        assert_eq!(ResponseTemplates::from_json_str(&json).unwrap(), responses);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_rejects_garbage() {
        assert!(ResponseTemplates::from_json_str("[1, 2]").is_err());
    }
}
