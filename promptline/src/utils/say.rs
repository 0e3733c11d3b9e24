//! # Output Helpers
//!
//! Plain text output for prompts, messages and lists of items.
//!
//! [`say`] decides between an interactive prompt and a full line by looking
//! at the message: a message ending in whitespace is written as-is, leaving
//! the cursor after it; anything else gets a trailing newline.
//!
//! [`list`] lays out a list of items in rows, inline prose or columns:
//!
//! ```rust
//! use promptline::utils::{list, ListMode};
//!
//! let mut out = Vec::new();
//! list(&mut out, &["cat", "dog", "go fish"], &ListMode::ColumnsDown { width: 15 }).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "cat     go fish\ndog\n");
//! ```
use std::io::{self, Write};

/// Writes `msg`, adding a newline unless it already ends in whitespace.
pub fn say<W: Write>(w: &mut W, msg: &str) -> io::Result<()> {
    match msg.chars().last() {
        Some(c) if c.is_whitespace() => write!(w, "{}", msg)?,
        _ => writeln!(w, "{}", msg)?,
    }
    w.flush()
}

/// Removes trailing whitespace from `msg`, then [`say`]s it.
pub fn say_trimmed<W: Write>(w: &mut W, msg: &str) -> io::Result<()> {
    say(w, msg.trim_end())
}

/// The longest suffix of `s` made only of whitespace.
pub fn trailing_whitespace(s: &str) -> &str {
    &s[s.trim_end().len()..]
}

/// How [`list`] lays out its items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListMode {
    /// Columns filled left to right, lines at most `width` wide.
    ColumnsAcross { width: usize },
    /// Columns filled top to bottom, lines at most `width` wide.
    ColumnsDown { width: usize },
    /// `"a, b, <join>c"`.
    Inline { join: String },
    /// One item per line.
    #[default]
    Rows,
}

impl ListMode {
    pub const DEFAULT_WIDTH: usize = 80;

    pub fn columns_across() -> Self {
        Self::ColumnsAcross {
            width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn columns_down() -> Self {
        Self::ColumnsDown {
            width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn inline() -> Self {
        Self::Inline {
            join: String::from("or "),
        }
    }
}

/// Writes `items` to `w` laid out according to `mode`.
pub fn list<W, S>(w: &mut W, items: &[S], mode: &ListMode) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let items: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();
    match mode {
        ListMode::Rows => rows(w, &items),
        ListMode::Inline { join } => inline(w, &items, join),
        ListMode::ColumnsAcross { width } => columns(w, &items, *width, true),
        ListMode::ColumnsDown { width } => columns(w, &items, *width, false),
    }
}

fn rows<W: Write>(w: &mut W, items: &[&str]) -> io::Result<()> {
    for item in items {
        say_trimmed(w, item)?;
    }
    Ok(())
}

fn inline<W: Write>(w: &mut W, items: &[&str], join: &str) -> io::Result<()> {
    match items {
        [] => Ok(()),
        [only] => say_trimmed(w, only),
        [first, second] => say_trimmed(w, &format!("{} {}{}", first, join, second)),
        [init @ .., last] => {
            let mut parts: Vec<String> = init.iter().map(|s| s.to_string()).collect();
            parts.push(format!("{}{}", join, last));
            say_trimmed(w, &parts.join(", "))
        }
    }
}

fn columns<W: Write>(w: &mut W, items: &[&str], wrap: usize, across: bool) -> io::Result<()> {
    let longest = items.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    let ncols = (wrap + 1) / (longest + 1);
    if ncols <= 1 {
        return rows(w, items);
    }

    let n = items.len();
    let nrows = n.div_ceil(ncols);
    let padded: Vec<String> = items
        .iter()
        .map(|s| format!("{:<width$}", s, width = longest))
        .collect();

    if across {
        for row in padded.chunks(ncols) {
            say_trimmed(w, &row.join(" "))?;
        }
    } else {
        for i in 0..nrows {
            let row: Vec<&str> = (0..ncols)
                .map(|j| j * nrows + i)
                .take_while(|&index| index < n)
                .map(|index| padded[index].as_str())
                .collect();
            say_trimmed(w, &row.join(" "))?;
        }
    }
    Ok(())
}
