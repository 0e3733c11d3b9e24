//! # Answer Sets
//!
//! Small composable predicates used to validate parsed answers. An
//! [`AnswerSet<T>`] answers two questions: "does this value belong?"
//! ([`AnswerSet::has`]) and "what do you accept?" ([`AnswerSet::describe`]).
//!
//! Sets are parameterized by their member type, so an `AnswerSet<i64>` can
//! only ever be asked about an `i64`. Members are the wide answer types:
//! `i64`, `u64`, `f64` and `String`.
//!
//! ## Variants
//! - [`AnswerSet::Set`]: exact equality against a list of members.
//! - [`AnswerSet::Range`]: the closed interval `[min, max]`.
//! - [`AnswerSet::Bounded`] / [`AnswerSet::BoundedStrictly`]: one-sided
//!   intervals, `x >= X` (`x > X`) or `x <= X` (`x < X`).
//! - [`AnswerSet::Union`] / [`AnswerSet::Intersection`]: combinators over
//!   other sets. Open and half-open intervals are built from these.
//!
//! ## Example
//! ```rust
//! use promptline::utils::AnswerSet;
//!
//! // (0, 10]
//! let half_open = AnswerSet::Intersection(vec![
//!     AnswerSet::above_strictly(0i64),
//!     AnswerSet::below(10i64),
//! ]);
//! assert!(!half_open.has(&0));
//! assert!(half_open.has(&10));
//! ```
//!
//! A question holds its set as a [`Constraint`], which tags the set with its
//! family so it can be checked against a dynamically typed [`Value`].
use std::fmt::{Debug, Display};

use crate::utils::{
    errors::PromptError,
    menu::split_shell_command,
    value::{Value, ValueType},
};

/// A wide answer type that can be stored in an [`AnswerSet`].
pub trait Member: Clone + PartialOrd + Debug {
    const VALUE_TYPE: ValueType;

    /// How the member is written inside a set description.
    fn describe(&self) -> String;
}

macro_rules! numeric_member {
    ($t:ty, $vt:expr) => {
        impl Member for $t {
            const VALUE_TYPE: ValueType = $vt;

            fn describe(&self) -> String {
                self.to_string()
            }
        }
    };
}

numeric_member!(i64, ValueType::Int);
numeric_member!(u64, ValueType::Uint);
numeric_member!(f64, ValueType::Float);

impl Member for String {
    const VALUE_TYPE: ValueType = ValueType::String;

    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

/// Which side of the bound a one-sided interval extends to.
///
/// ```text
///     -Infinity ... <----------------|----------------> ... Infinity
///                  Below             X             Above
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Above,
    Below,
}

impl Direction {
    /// `"Infinity"` or `"-Infinity"`.
    pub fn infinity(&self) -> &'static str {
        match self {
            Self::Above => "Infinity",
            Self::Below => "-Infinity",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnswerSet<T> {
    Set(Vec<T>),
    Range { min: T, max: T },
    Bounded { direction: Direction, x: T },
    BoundedStrictly { direction: Direction, x: T },
    Union(Vec<AnswerSet<T>>),
    /// Note: intersections can easily end up empty without it being obvious.
    Intersection(Vec<AnswerSet<T>>),
}

impl<T: Member> AnswerSet<T> {
    /// Builds `[min, max]`, refusing empty ranges.
    pub fn range(min: T, max: T) -> Result<Self, PromptError> {
        if max < min {
            return Err(PromptError::EmptyRange {
                min: min.describe(),
                max: max.describe(),
            });
        }
        Ok(Self::Range { min, max })
    }

    /// `[x, Infinity)`
    pub fn above(x: T) -> Self {
        Self::Bounded {
            direction: Direction::Above,
            x,
        }
    }

    /// `(-Infinity, x]`
    pub fn below(x: T) -> Self {
        Self::Bounded {
            direction: Direction::Below,
            x,
        }
    }

    /// `(x, Infinity)`
    pub fn above_strictly(x: T) -> Self {
        Self::BoundedStrictly {
            direction: Direction::Above,
            x,
        }
    }

    /// `(-Infinity, x)`
    pub fn below_strictly(x: T) -> Self {
        Self::BoundedStrictly {
            direction: Direction::Below,
            x,
        }
    }

    /// The empty intersection. Accepts everything.
    pub fn universe() -> Self {
        Self::Intersection(Vec::new())
    }

    /// The empty union. Accepts nothing.
    pub fn empty() -> Self {
        Self::Union(Vec::new())
    }

    pub fn has(&self, x: &T) -> bool {
        match self {
            Self::Set(members) => members.iter().any(|m| m == x),
            Self::Range { min, max } => x >= min && x <= max,
            Self::Bounded { direction, x: bound } => match direction {
                Direction::Above => x >= bound,
                Direction::Below => x <= bound,
            },
            Self::BoundedStrictly { direction, x: bound } => match direction {
                Direction::Above => x > bound,
                Direction::Below => x < bound,
            },
            Self::Union(sets) => sets.iter().any(|s| s.has(x)),
            Self::Intersection(sets) => sets.iter().all(|s| s.has(x)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Set(members) if members.is_empty() => String::from("{}"),
            Self::Set(members) => {
                let items: Vec<String> = members.iter().map(Member::describe).collect();
                format!("set {{{}}}", items.join(", "))
            }
            Self::Range { min, max } => {
                format!("range [{}, {}]", min.describe(), max.describe())
            }
            Self::Bounded { direction, x } => match direction {
                Direction::Above => format!("range [{}, {})", x.describe(), direction.infinity()),
                Direction::Below => format!("range ({}, {}]", direction.infinity(), x.describe()),
            },
            Self::BoundedStrictly { direction, x } => match direction {
                Direction::Above => format!("range ({}, {})", x.describe(), direction.infinity()),
                Direction::Below => format!("range ({}, {})", direction.infinity(), x.describe()),
            },
            Self::Union(sets) if sets.is_empty() => String::from("empty set"),
            Self::Union(sets) => composite("union", sets),
            Self::Intersection(sets) if sets.is_empty() => String::from("universal set"),
            Self::Intersection(sets) => composite("intersection", sets),
        }
    }
}

fn composite<T: Member>(name: &str, sets: &[AnswerSet<T>]) -> String {
    let parts: Vec<String> = sets.iter().map(AnswerSet::describe).collect();
    format!("{} of {}", name, parts.join(", and "))
}

impl<T: Member> Display for AnswerSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// An [`AnswerSet`] tagged with its family.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Int(AnswerSet<i64>),
    Uint(AnswerSet<u64>),
    Float(AnswerSet<f64>),
    Str(AnswerSet<String>),
    /// Checks only the first word of a string answer, shell style.
    Command(AnswerSet<String>),
}

impl Constraint {
    /// The family of values this constraint can judge.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Int(_) => ValueType::Int,
            Self::Uint(_) => ValueType::Uint,
            Self::Float(_) => ValueType::Float,
            Self::Str(_) | Self::Command(_) => ValueType::String,
        }
    }

    /// Checks membership of a wide value.
    ///
    /// # Errors
    /// [`PromptError::MemberType`] if `value` belongs to another family.
    pub fn has(&self, value: &Value) -> Result<bool, PromptError> {
        match (self, value) {
            (Self::Int(set), Value::Int(x)) => Ok(set.has(x)),
            (Self::Uint(set), Value::Uint(x)) => Ok(set.has(x)),
            (Self::Float(set), Value::Float(x)) => Ok(set.has(x)),
            (Self::Str(set), Value::Str(s)) => Ok(set.has(s)),
            (Self::Command(set), Value::Str(s)) => {
                let (name, _) = split_shell_command(s);
                Ok(set.has(&name.to_string()))
            }
            _ => Err(PromptError::MemberType {
                set: self.value_type(),
                member: value.value_type(),
            }),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Int(set) => set.describe(),
            Self::Uint(set) => set.describe(),
            Self::Float(set) => set.describe(),
            Self::Str(set) | Self::Command(set) => set.describe(),
        }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl From<AnswerSet<i64>> for Constraint {
    fn from(set: AnswerSet<i64>) -> Self {
        Self::Int(set)
    }
}

impl From<AnswerSet<u64>> for Constraint {
    fn from(set: AnswerSet<u64>) -> Self {
        Self::Uint(set)
    }
}

impl From<AnswerSet<f64>> for Constraint {
    fn from(set: AnswerSet<f64>) -> Self {
        Self::Float(set)
    }
}

impl From<AnswerSet<String>> for Constraint {
    fn from(set: AnswerSet<String>) -> Self {
        Self::Str(set)
    }
}

/// Shorthand for a discrete string set.
///
/// ```rust
/// use promptline::utils::string_set;
///
/// assert!(string_set(["yes", "no"]).has(&"no".to_string()));
/// ```
pub fn string_set<I, S>(members: I) -> AnswerSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    AnswerSet::Set(members.into_iter().map(Into::into).collect())
}
