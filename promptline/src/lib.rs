//! # Promptline
//!
//! A Rust library for building interactive command-line prompts: typed answers,
//! constraint sets, input normalization, menus and list layout.
//!
//! ## Features
//!
//! ### Currently Available
//!
//! (Default)
//! - **Typed Questions** - Answers are read into `i8`..`i64`, `u8`..`u64`, `f32`, `f64` or `String`
//! - **Constraint Sets** - Literal sets, ranges, half-open bounds, unions and intersections
//! - **Input Normalization** - Configurable whitespace trimming/collapsing and case folding
//! - **Checked Narrowing** - Answers that do not fit the destination are asked again
//! - **Menus** - Numbered, lettered or plain choices, with a shell-style command mode
//! - **List Layout** - Rows, inline prose and terminal-width columns
//!
//! ("serde" feature)
//! - **Response Templates** - Load and save the user-facing messages as JSON
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! promptline = "0.1.0"
//! promptline = { version = "0.1.0", features = ["serde"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Bounded Integer With a Default
//!
//! ```rust,no_run
//! use promptline::utils::{ask, AnswerSet};
//!
//! let mut age: i32 = 0;
//! ask(&mut age, "Enter your age:  ", |q| {
//!     q.set_default(30i32);
//!     q.in_set(AnswerSet::range(0i64, 150).unwrap());
//! })
//! .unwrap();
//! println!("Age: {}", age);
//! ```
//!
//! ### Strings From a Fixed Set
//!
//! ```rust,no_run
//! use promptline::utils::{ask, string_set, CasePolicy};
//!
//! let mut scan = String::new();
//! ask(&mut scan, "Scan type (quick/deep)?  ", |q| {
//!     q.case = CasePolicy::Lower;
//!     q.in_set(string_set(["quick", "deep"]));
//! })
//! .unwrap();
//! ```
//!
//! ### Menus
//!
//! ```rust,no_run
//! use promptline::utils::{choose, IndexMode};
//!
//! let picked = choose(|m| {
//!     m.header = String::from("Pick a color");
//!     m.index_mode = IndexMode::Letter;
//!     m.choice("red");
//!     m.choice("green");
//! })
//! .unwrap();
//! println!("{}", picked.label);
//! ```
//!
//! ### Scripted Input
//!
//! Every operation also runs on a [`utils::Terminal`] built from any
//! buffered reader and writer, which is how prompts are tested:
//!
//! ```rust
//! use promptline::utils::{AnswerSet, Terminal};
//! use std::io::Cursor;
//!
//! let mut term = Terminal::new(Cursor::new("7\n30\n"), Vec::new());
//! let mut n: u64 = 0;
//! term.ask(&mut n, "n?  ", |q| q.in_set(AnswerSet::above(10u64))).unwrap();
//! assert_eq!(n, 30);
//! ```
//!
//! ## Architecture
//!
//! - **`utils::value`** - Wide answer values and their families
//! - **`utils::set`** - Constraint sets and membership
//! - **`utils::normalize`** - Whitespace and case policies
//! - **`utils::question`** - Question configuration and the parse pipeline
//! - **`utils::cast`** - Checked narrowing into caller destinations
//! - **`utils::terminal`** - The prompt loop
//! - **`utils::menu`** - Menus built on the prompt loop
//! - **`utils::say`** - Output and list layout
//!
//! ## Error Handling
//!
//! Every error is a [`utils::PromptError`]. Recoverable errors (bad input) are
//! shown to the user and the question is asked again; only fatal errors reach
//! the caller:
//!
//! ```rust,no_run
//! use promptline::utils::{ask, PromptError};
//!
//! let mut port: u16 = 0;
//! match ask(&mut port, "Port?  ", |_| {}) {
//!     Ok(()) => println!("Port: {}", port),
//!     Err(PromptError::EndOfInput) => eprintln!("No more input"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! The library emits [`tracing`](https://docs.rs/tracing) events (answers
//! rejected, prompts aborted). Install a subscriber in your binary to see them.
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod utils;
