//! # Input Normalization
//!
//! Raw lines are cleaned up before they are parsed:
//!
//! 1. Whitespace, governed by [`WhitespacePolicy`]:
//!    - `REMOVE` strips every whitespace character and overrides the rest.
//!    - otherwise `CHOMP` (one trailing `\r`), then `TRIM` (both ends), then
//!      `COLLAPSE` (runs of spaces/tabs become a single space).
//! 2. Case, governed by [`CasePolicy`].
//!
//! ```rust
//! use promptline::utils::{normalize, CasePolicy, WhitespacePolicy};
//!
//! let out = normalize("  Hello \t World \r", WhitespacePolicy::CHOMP | WhitespacePolicy::TRIM | WhitespacePolicy::COLLAPSE, CasePolicy::Lower);
//! assert_eq!(out, "hello world");
//! ```
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Whitespace handling flags. Combine with `|`, drop with `& !flag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhitespacePolicy(u8);

impl WhitespacePolicy {
    pub const NONE: Self = Self(0);
    /// Drop a single trailing carriage return (CRLF input).
    pub const CHOMP: Self = Self(1);
    /// Strip leading and trailing whitespace.
    pub const TRIM: Self = Self(1 << 1);
    /// Replace each internal run of spaces and tabs with one space.
    pub const COLLAPSE: Self = Self(1 << 2);
    /// Strip all whitespace. Supersedes the other flags.
    pub const REMOVE: Self = Self(1 << 3);

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl BitOr for WhitespacePolicy {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for WhitespacePolicy {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for WhitespacePolicy {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for WhitespacePolicy {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CasePolicy {
    #[default]
    None,
    Upper,
    Lower,
    /// Lowercase everything, then uppercase the first character.
    Capitalize,
}

/// Applies the whitespace policy and then the case policy to `input`.
pub fn normalize(input: &str, whitespace: WhitespacePolicy, case: CasePolicy) -> String {
    let spaced = if whitespace.contains(WhitespacePolicy::REMOVE) {
        input.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        let mut s = input;
        if whitespace.contains(WhitespacePolicy::CHOMP) {
            s = s.strip_suffix('\r').unwrap_or(s);
        }
        if whitespace.contains(WhitespacePolicy::TRIM) {
            s = s.trim();
        }
        if whitespace.contains(WhitespacePolicy::COLLAPSE) {
            collapse(s)
        } else {
            s.to_string()
        }
    };

    match case {
        CasePolicy::None => spaced,
        CasePolicy::Upper => spaced.to_uppercase(),
        CasePolicy::Lower => spaced.to_lowercase(),
        CasePolicy::Capitalize => capitalize(&spaced),
    }
}

fn collapse(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c == ' ' || c == '\t' {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => lower,
    }
}
