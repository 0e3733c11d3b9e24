//! # Menus
//!
//! A [`Menu`] is a list of choices shown to the user, followed by a string
//! question restricted to those choices. Each choice can be picked by its
//! index token (`1`, `2`, ... or `a`, `b`, ...) or by its full text.
//!
//! In `shell` mode only the first word of the answer has to match; the rest
//! is handed to the choice's action as arguments, so a menu can behave like a
//! tiny command prompt.
//!
//! ## Example
//! ```rust,no_run
//! use promptline::utils::{IndexMode, Terminal};
//!
//! let mut term = Terminal::stdio();
//! let picked = term
//!     .choose(|m| {
//!         m.header = String::from("Choose a scan type");
//!         m.index_mode = IndexMode::Letter;
//!         m.choice("quick");
//!         m.choice("deep");
//!         m.choice_with("custom", |_, _| println!("Configuring..."));
//!     })
//!     .unwrap();
//! println!("Picked #{}: {}", picked.index, picked.label);
//! ```
use std::io::Write;

use tracing::debug;

use crate::utils::{
    errors::PromptError,
    say::{ListMode, list, say},
    set::{AnswerSet, Constraint},
    terminal::{LineSource, Terminal},
};

/// How choices are labelled when listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexMode {
    /// `1. cat`
    #[default]
    Number,
    /// `a. cat`
    Letter,
    /// `cat`
    NoIndex,
}

impl IndexMode {
    /// The token selecting the choice at `index`, if this mode has one.
    pub fn token(&self, index: usize) -> Option<String> {
        match self {
            Self::Number => Some((index + 1).to_string()),
            Self::Letter => Some(letters(index)),
            Self::NoIndex => None,
        }
    }
}

/// Bijective base-26: `a`..`z`, `aa`, `ab`, ...
fn letters(mut index: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Called with the selection and its arguments when a choice is picked.
pub type Action<'a> = Box<dyn FnMut(&str, &str) + 'a>;

pub struct Menu<'a> {
    /// Printed before the choices, when not empty.
    pub header: String,
    /// The prompt shown after the choices.
    pub question: String,
    pub list_mode: ListMode,
    pub index_mode: IndexMode,
    pub shell: bool,
    choices: Vec<(String, Option<Action<'a>>)>,
}

impl Default for Menu<'_> {
    fn default() -> Self {
        Self {
            header: String::new(),
            question: String::from("?  "),
            list_mode: ListMode::Rows,
            index_mode: IndexMode::Number,
            shell: false,
            choices: Vec::new(),
        }
    }
}

impl<'a> Menu<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a choice without an action.
    pub fn choice(&mut self, label: impl Into<String>) {
        self.choices.push((label.into(), None));
    }

    /// Adds a choice that runs `action` when picked.
    pub fn choice_with(&mut self, label: impl Into<String>, action: impl FnMut(&str, &str) + 'a) {
        self.choices.push((label.into(), Some(Box::new(action))));
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// The choices as listed to the user.
    pub fn rendered(&self) -> Vec<String> {
        self.choices
            .iter()
            .enumerate()
            .map(|(i, (label, _))| match self.index_mode.token(i) {
                Some(token) => format!("{}. {}", token, label),
                None => label.clone(),
            })
            .collect()
    }

    /// Every accepted answer with the index of the choice it selects, in
    /// listing order: each choice's index token, then its text.
    ///
    /// When two choices share a token, the first one wins.
    pub fn selections(&self) -> Vec<(String, usize)> {
        let mut selections: Vec<(String, usize)> = Vec::new();
        for (i, (label, _)) in self.choices.iter().enumerate() {
            for token in self.index_mode.token(i).into_iter().chain([label.clone()]) {
                if !selections.iter().any(|(seen, _)| *seen == token) {
                    selections.push((token, i));
                }
            }
        }
        selections
    }

    /// The index of the choice `answer` selects.
    pub fn select(&self, answer: &str) -> Option<usize> {
        self.selections()
            .into_iter()
            .find(|(token, _)| token == answer)
            .map(|(_, i)| i)
    }

    fn constraint(&self) -> Constraint {
        let members = self.selections().into_iter().map(|(token, _)| token).collect();
        let set = AnswerSet::Set(members);
        if self.shell {
            Constraint::Command(set)
        } else {
            Constraint::Str(set)
        }
    }
}

/// The outcome of [`Terminal::choose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub index: usize,
    pub label: String,
    /// Everything after the command name in shell mode, empty otherwise.
    pub args: String,
}

/// Splits a command line into its first word and the remaining arguments.
///
/// ```rust
/// use promptline::utils::split_shell_command;
///
/// assert_eq!(split_shell_command("  which  6g"), ("which", "6g"));
/// assert_eq!(split_shell_command("exit"), ("exit", ""));
/// ```
pub fn split_shell_command(cmd: &str) -> (&str, &str) {
    let cmd = cmd.trim_start();
    match cmd.find(char::is_whitespace) {
        Some(end) => (&cmd[..end], cmd[end..].trim_start()),
        None => (cmd, ""),
    }
}

impl<R: LineSource, W: Write> Terminal<R, W> {
    /// Shows a menu and lets the user pick one of its choices.
    ///
    /// # Errors
    /// [`PromptError::NoChoices`] if `configure` adds no choices,
    /// [`PromptError::UnknownChoice`] if an accepted answer selects nothing,
    /// otherwise any fatal error from [`Terminal::ask`].
    pub fn choose<'a>(&mut self, configure: impl FnOnce(&mut Menu<'a>)) -> Result<Choice, PromptError> {
        let mut menu = Menu::new();
        configure(&mut menu);
        if menu.is_empty() {
            return Err(PromptError::NoChoices);
        }

        if !menu.header.is_empty() {
            say(&mut self.output, &menu.header)?;
        }
        list(&mut self.output, &menu.rendered(), &menu.list_mode)?;

        let constraint = menu.constraint();
        let mut response = String::new();
        self.ask(&mut response, &menu.question, |q| q.in_set(constraint))?;

        let (selection, args) = if menu.shell {
            split_shell_command(&response)
        } else {
            (response.as_str(), "")
        };
        let Some(index) = menu.select(selection) else {
            return Err(PromptError::UnknownChoice(selection.to_string()));
        };
        debug!(index, selection, "menu choice picked");

        let (label, action) = &mut menu.choices[index];
        if let Some(action) = action {
            action(selection, args);
        }
        Ok(Choice {
            index,
            label: label.clone(),
            args: args.to_string(),
        })
    }
}

/// [`Terminal::choose`] on standard input and output.
pub fn choose<'a>(configure: impl FnOnce(&mut Menu<'a>)) -> Result<Choice, PromptError> {
    Terminal::stdio().choose(configure)
}
