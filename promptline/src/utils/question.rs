//! # Questions
//!
//! A [`Question`] holds everything one prompt needs: the text shown to the
//! user, the type family to read, normalization options, an optional
//! [`Constraint`], a default, a first-answer and the response templates.
//!
//! The heart of it is [`Question::parse`], which turns one raw line into a
//! wide [`Value`]:
//!
//! 1. forget any previous value,
//! 2. [`normalize`] the line,
//! 3. empty input takes the default (or fails with
//!    [`PromptError::EmptyInput`]), anything else is parsed as the family,
//! 4. the value is checked against the constraint set,
//! 5. on success the value is kept, see [`Question::value`].
//!
//! ```rust
//! use promptline::utils::{AnswerSet, PromptError, Question, Value, ValueType};
//!
//! let mut q = Question::new(ValueType::Int);
//! q.in_set(AnswerSet::range(-3i64, 10).unwrap());
//!
//! q.parse(" 5 ").unwrap();
//! assert_eq!(q.value(), Some(&Value::Int(5)));
//!
//! assert!(matches!(q.parse("11"), Err(PromptError::NotInSet { .. })));
//! assert_eq!(q.value(), None);
//! ```
use tracing::trace;

use crate::utils::{
    cast::Answerable,
    errors::PromptError,
    normalize::{CasePolicy, WhitespacePolicy, normalize},
    responses::{Response, ResponseTemplates},
    say::trailing_whitespace,
    set::Constraint,
    value::{Value, ValueType},
};

/// Called with every fatal error before the ask operation returns it.
pub type FatalHandler = Box<dyn FnMut(&PromptError)>;

pub struct Question {
    /// Text shown to the user.
    pub question: String,
    pub whitespace: WhitespacePolicy,
    pub case: CasePolicy,
    /// Used when the user submits an empty line.
    pub default: Option<Value>,
    /// When present and valid, the user is never prompted.
    pub first_answer: Option<Value>,
    pub responses: ResponseTemplates,
    pub on_fatal: Option<FatalHandler>,
    value_type: ValueType,
    set: Option<Constraint>,
    value: Option<Value>,
}

impl Question {
    /// Creates a question reading `value_type`.
    ///
    /// Strings are trimmed by default; every other family is trimmed and
    /// collapsed.
    pub fn new(value_type: ValueType) -> Self {
        let whitespace = match value_type {
            ValueType::String => WhitespacePolicy::TRIM,
            _ => WhitespacePolicy::TRIM | WhitespacePolicy::COLLAPSE,
        };
        Self {
            question: String::new(),
            whitespace,
            case: CasePolicy::None,
            default: None,
            first_answer: None,
            responses: ResponseTemplates::default(),
            on_fatal: None,
            value_type,
            set: None,
            value: None,
        }
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Restricts answers to `set`.
    ///
    /// A set of another family is accepted here but makes every parse fail
    /// with [`PromptError::MemberType`].
    pub fn in_set(&mut self, set: impl Into<Constraint>) {
        self.set = Some(set.into());
    }

    pub fn set(&self) -> Option<&Constraint> {
        self.set.as_ref()
    }

    pub fn set_default(&mut self, default: impl Into<Value>) {
        self.default = Some(default.into());
    }

    pub fn set_first_answer(&mut self, answer: impl Into<Value>) {
        self.first_answer = Some(answer.into());
    }

    /// The last successfully parsed value. `None` after any failure.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Parses and validates one raw line.
    pub fn parse(&mut self, input: &str) -> Result<(), PromptError> {
        self.value = None;
        if self.value_type.is_slice() {
            return Err(PromptError::Unimplemented(self.value_type));
        }

        let clean = normalize(input, self.whitespace, self.case);
        let value = if clean.is_empty() {
            match &self.default {
                Some(default) => self.coerce(default)?,
                None => return Err(PromptError::EmptyInput),
            }
        } else {
            self.read(&clean)?
        };

        self.check(&value)?;
        trace!(value = %value.literal(), "answer accepted");
        self.value = Some(value);
        Ok(())
    }

    /// Validates the configured first-answer and keeps it as the value.
    ///
    /// Returns `Ok(false)` when no first-answer is configured.
    pub fn try_first_answer(&mut self) -> Result<bool, PromptError> {
        self.value = None;
        let Some(answer) = &self.first_answer else {
            return Ok(false);
        };
        let value = self.coerce(answer)?;
        self.check(&value)?;
        self.value = Some(value);
        Ok(true)
    }

    /// Brings a caller-supplied value into this question's family.
    ///
    /// # Errors
    /// - [`PromptError::Unimplemented`] for slice questions.
    /// - [`PromptError::TypeMismatch`] if `value` is of another family.
    pub fn coerce(&self, value: &Value) -> Result<Value, PromptError> {
        if self.value_type.is_slice() {
            return Err(PromptError::Unimplemented(self.value_type));
        }
        if value.value_type() != self.value_type {
            return Err(PromptError::TypeMismatch {
                response: self.responses[Response::InvalidType].clone(),
                expected: self.value_type,
                received: value.value_type(),
            });
        }
        Ok(value.clone())
    }

    /// Narrows the parsed value into `dest`.
    ///
    /// # Errors
    /// [`PromptError::EmptyInput`] if nothing has been parsed yet, otherwise
    /// whatever [`Answerable::narrow`] reports.
    pub fn cast<T: Answerable>(&self, dest: &mut T) -> Result<(), PromptError> {
        match &self.value {
            Some(value) => {
                *dest = T::narrow(value)?;
                Ok(())
            }
            None => Err(PromptError::EmptyInput),
        }
    }

    /// The prompt line shown to the user. With a default configured it reads
    /// `"<prompt>|<default>|<prompt's trailing whitespace>"`.
    pub fn render_prompt(&self, prompt: &str) -> String {
        match &self.default {
            Some(default) => format!("{}|{}|{}", prompt, default, trailing_whitespace(prompt)),
            None => prompt.to_string(),
        }
    }

    fn read(&self, text: &str) -> Result<Value, PromptError> {
        let parse_error = || PromptError::Parse {
            input: text.to_string(),
            expected: self.value_type,
        };
        match self.value_type {
            ValueType::Int => text.parse().map(Value::Int).map_err(|_| parse_error()),
            ValueType::Uint => text.parse().map(Value::Uint).map_err(|_| parse_error()),
            ValueType::Float => text.parse().map(Value::Float).map_err(|_| parse_error()),
            ValueType::String => Ok(Value::Str(text.to_string())),
            slice => Err(PromptError::Unimplemented(slice)),
        }
    }

    fn check(&self, value: &Value) -> Result<(), PromptError> {
        match &self.set {
            Some(set) if !set.has(value)? => Err(PromptError::NotInSet {
                response: self.responses[Response::NotInSet].clone(),
                set: set.describe(),
                value: value.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Debug for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("question", &self.question)
            .field("value_type", &self.value_type)
            .field("whitespace", &self.whitespace)
            .field("case", &self.case)
            .field("set", &self.set)
            .field("default", &self.default)
            .field("first_answer", &self.first_answer)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::set::{AnswerSet, string_set};

    fn good(q: &mut Question, input: &str, expected: Value) {
        if let Err(e) = q.parse(input) {
            panic!("{:?} should parse as {}: {}", input, q.value_type(), e);
        }
        assert_eq!(q.value(), Some(&expected));
    }

    fn bad(q: &mut Question, input: &str) -> PromptError {
        let err = match q.parse(input) {
            Ok(()) => panic!("{:?} should not parse as {}", input, q.value_type()),
            Err(e) => e,
        };
        assert_eq!(q.value(), None, "value must be unset after a failure");
        err
    }

    #[test]
    fn test_default_policies() {
        assert_eq!(Question::new(ValueType::String).whitespace, WhitespacePolicy::TRIM);
        assert_eq!(
            Question::new(ValueType::Uint).whitespace,
            WhitespacePolicy::TRIM | WhitespacePolicy::COLLAPSE
        );
        assert_eq!(Question::new(ValueType::String).case, CasePolicy::None);
    }

    #[test]
    fn test_int_answers() {
        let mut q = Question::new(ValueType::Int);
        good(&mut q, "1234", Value::Int(1234));
        let err = bad(&mut q, "123JumpStreet");
        assert!(matches!(err, PromptError::Parse { .. }));
        assert!(err.is_recoverable());

        q.in_set(AnswerSet::range(-3i64, 10).unwrap());
        good(&mut q, "5", Value::Int(5));
        good(&mut q, "-3", Value::Int(-3));
        good(&mut q, "10", Value::Int(10));
        assert!(matches!(bad(&mut q, "-4"), PromptError::NotInSet { .. }));
        assert!(matches!(bad(&mut q, "11"), PromptError::NotInSet { .. }));
    }

    #[test]
    fn test_uint_answers() {
        let mut q = Question::new(ValueType::Uint);
        good(&mut q, "1234", Value::Uint(1234));
        good(&mut q, " 4321  \n", Value::Uint(4321));
        bad(&mut q, "123JumpStreet");
        bad(&mut q, "-1");

        q.in_set(AnswerSet::range(1u64, 10).unwrap());
        good(&mut q, "5", Value::Uint(5));
        good(&mut q, "1", Value::Uint(1));
        good(&mut q, "10", Value::Uint(10));
        bad(&mut q, "0");
        bad(&mut q, "11");
    }

    #[test]
    fn test_float_answers() {
        let mut q = Question::new(ValueType::Float);
        good(&mut q, "1234", Value::Float(1234.0));
        good(&mut q, "-12.75", Value::Float(-12.75));
        good(&mut q, "123.5e+1", Value::Float(1235.0));
        bad(&mut q, "123.5+i5");

        q.in_set(AnswerSet::range(1.0f64, 10.0).unwrap());
        good(&mut q, "5", Value::Float(5.0));
        good(&mut q, "1", Value::Float(1.0));
        good(&mut q, "10", Value::Float(10.0));
        bad(&mut q, "0");
        bad(&mut q, "11");
    }

    #[test]
    fn test_string_answers() {
        let mut q = Question::new(ValueType::String);
        good(&mut q, "1234", Value::from("1234"));

        q.whitespace = q.whitespace & !WhitespacePolicy::TRIM;
        good(&mut q, " 4321  \n", Value::from(" 4321  \n"));
        q.whitespace |= WhitespacePolicy::COLLAPSE;
        good(&mut q, " 4321  \tabc  \n", Value::from(" 4321 abc \n"));

        q.in_set(AnswerSet::range(String::from("aaa"), String::from("zzz")).unwrap());
        good(&mut q, "tidoeids", Value::from("tidoeids"));
        good(&mut q, "aaa", Value::from("aaa"));
        good(&mut q, "zzz", Value::from("zzz"));
        bad(&mut q, "ZZZ");
        bad(&mut q, "{");

        q.in_set(string_set(["abc", "def", "ghi"]));
        good(&mut q, "def", Value::from("def"));
        bad(&mut q, "blah");
    }

    #[test]
    fn test_canonical_forms_round_trip() {
        let cases = [
            (ValueType::Int, Value::Int(i64::MIN)),
            (ValueType::Uint, Value::Uint(u64::MAX)),
            (ValueType::Float, Value::Float(-0.015625)),
            (ValueType::String, Value::from("go fish")),
        ];
        for (ty, value) in cases {
            let mut q = Question::new(ty);
            good(&mut q, &value.to_string(), value);
        }
    }

    #[test]
    fn test_case_policy_applies_before_the_set() {
        let mut q = Question::new(ValueType::String);
        q.case = CasePolicy::Lower;
        q.in_set(string_set(["yes", "no"]));
        good(&mut q, "  YES ", Value::from("yes"));
    }

    #[test]
    fn test_empty_input_without_default() {
        for ty in [ValueType::Int, ValueType::Uint, ValueType::Float, ValueType::String] {
            let mut q = Question::new(ty);
            assert!(matches!(bad(&mut q, "  \t "), PromptError::EmptyInput));
        }
    }

    #[test]
    fn test_empty_input_takes_default() {
        let mut q = Question::new(ValueType::Int);
        q.set_default(13);
        good(&mut q, "", Value::Int(13));
        good(&mut q, "   ", Value::Int(13));
        good(&mut q, "7", Value::Int(7));
    }

    #[test]
    fn test_default_goes_through_the_set() {
        let mut q = Question::new(ValueType::Int);
        q.set_default(13);
        q.in_set(AnswerSet::range(26i64, 62).unwrap());
        let err = bad(&mut q, "");
        assert!(matches!(err, PromptError::NotInSet { .. }));
        assert_eq!(err.to_string(), "Answer must be in range [26, 62] (13)");
    }

    #[test]
    fn test_default_of_wrong_family() {
        let mut q = Question::new(ValueType::Uint);
        q.set_default(-1i32);
        let err = bad(&mut q, "");
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Invalid type (Int != Uint)");

        q.responses[Response::InvalidType] = String::from("Wrong kind of default");
        assert_eq!(bad(&mut q, "").to_string(), "Wrong kind of default (Int != Uint)");
    }

    #[test]
    fn test_first_answer() {
        let mut q = Question::new(ValueType::Uint);
        assert!(!q.try_first_answer().unwrap());

        q.set_first_answer(0xFFu8);
        q.in_set(AnswerSet::range(200u64, 255).unwrap());
        assert!(q.try_first_answer().unwrap());
        assert_eq!(q.value(), Some(&Value::Uint(255)));

        q.set_first_answer(12u8);
        assert!(matches!(q.try_first_answer(), Err(PromptError::NotInSet { .. })));
        assert_eq!(q.value(), None);
    }

    #[test]
    fn test_foreign_set_is_fatal() {
        let mut q = Question::new(ValueType::String);
        q.in_set(AnswerSet::range(1i64, 3).unwrap());
        let err = bad(&mut q, "2");
        assert!(matches!(err, PromptError::MemberType { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_slice_types_are_unimplemented() {
        let mut q = Question::new(ValueType::IntSlice);
        let err = bad(&mut q, "1 2 3");
        assert!(matches!(err, PromptError::Unimplemented(ValueType::IntSlice)));
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "IntSlice unimplemented");
    }

    #[test]
    fn test_cast_after_parse() {
        let mut q = Question::new(ValueType::Int);
        let mut dest: i8 = 0;
        assert!(matches!(q.cast(&mut dest), Err(PromptError::EmptyInput)));

        q.parse("300").unwrap();
        assert!(matches!(q.cast(&mut dest), Err(PromptError::Precision { .. })));

        q.parse("100").unwrap();
        q.cast(&mut dest).unwrap();
        assert_eq!(dest, 100);
    }

    #[test]
    fn test_render_prompt_with_default() {
        let mut q = Question::new(ValueType::Int);
        assert_eq!(q.render_prompt("Enter an int:  "), "Enter an int:  ");
        q.set_default(13);
        assert_eq!(q.render_prompt("Enter an int:  "), "Enter an int:  |13|  ");
        assert_eq!(q.render_prompt("Enter an int"), "Enter an int|13|");
    }
}
