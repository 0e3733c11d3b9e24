//! # Terminal Prompt Driver
//!
//! This module talks to the user. [`Terminal::ask`] shows a prompt, reads a
//! line, hands it to a [`Question`] and keeps asking until the answer parses,
//! passes the question's set and fits the destination.
//!
//! ## Flow
//! - If a first-answer is configured and valid, it is written to the
//!   destination and the user is never prompted.
//! - Otherwise the prompt is shown (with the default, if any) and one line is
//!   read.
//! - Recoverable errors print `Error: ...` and ask again, using the
//!   question's `AskOnError` response as the new prompt.
//! - Fatal errors (end of input, I/O failures, misconfigured questions) stop
//!   the loop and are returned to the caller.
//!
//! There is no retry limit; the loop only ends on success or on a fatal
//! error such as [`PromptError::EndOfInput`].
//!
//! ## Example 1: Bounded integer with a default
//! ```rust,no_run
//! use promptline::utils::{AnswerSet, Terminal};
//!
//! let mut threads: u8 = 4;
//! Terminal::stdio()
//!     .ask(&mut threads, "Scan threads (1-16)?  ", |q| {
//!         q.set_default(4u8);
//!         q.in_set(AnswerSet::range(1u64, 16).unwrap());
//!     })
//!     .unwrap();
//! println!("Threads: {}", threads);
//! ```
//!
//! ## Example 2: In-memory collaborators
//! ```rust
//! use promptline::utils::Terminal;
//! use std::io::Cursor;
//!
//! let mut term = Terminal::new(Cursor::new("abc\n42\n"), Vec::new());
//! let mut answer: i32 = 0;
//! term.ask(&mut answer, "Number? ", |_| {}).unwrap();
//! assert_eq!(answer, 42);
//! ```
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use tracing::{debug, trace, warn};

use crate::utils::{
    cast::Answerable,
    errors::PromptError,
    normalize::CasePolicy,
    question::Question,
    responses::Response,
    say::{ListMode, list, say},
    set::string_set,
};

/// A line-oriented text source.
pub trait LineSource {
    /// Reads one line without its `\n` terminator.
    ///
    /// # Errors
    /// - [`PromptError::EndOfInput`] once the source is exhausted.
    /// - [`PromptError::Io`] if reading fails.
    /// - [`PromptError::InvalidEncoding`] (recoverable) if the line is not
    ///   UTF-8. The line is consumed either way.
    fn next_line(&mut self) -> Result<String, PromptError>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> Result<String, PromptError> {
        let mut raw = Vec::new();
        if self.read_until(b'\n', &mut raw)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
        }
        String::from_utf8(raw).map_err(|e| PromptError::InvalidEncoding {
            input: String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}

/// Prompts on a writer and reads answers from a [`LineSource`].
///
/// Only one prompt may use a given input at a time; a `Terminal` built with
/// [`Terminal::stdio`] holds the stdin lock for as long as it lives.
pub struct Terminal<R, W> {
    pub(crate) input: R,
    pub(crate) output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A terminal on the process' standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: LineSource, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Asks `prompt` until a valid answer is written to `dest`.
    ///
    /// `configure` gets the fresh [`Question`] before anything is shown. The
    /// question's family is picked from the destination type.
    ///
    /// # Errors
    /// Only fatal errors are returned; recoverable ones are reported to the
    /// user and the question is asked again. A configured
    /// [`Question::on_fatal`] handler is called first.
    pub fn ask<T: Answerable>(
        &mut self,
        dest: &mut T,
        prompt: &str,
        configure: impl FnOnce(&mut Question),
    ) -> Result<(), PromptError> {
        let mut question = Question::new(T::VALUE_TYPE);
        question.question = prompt.to_string();
        configure(&mut question);

        let res = self.drive(&mut question, dest);
        if let Err(e) = &res {
            warn!(error = %e, prompt = %question.question, "prompt aborted");
            if let Some(handler) = question.on_fatal.as_mut() {
                handler(e);
            }
        }
        res
    }

    /// Asks a yes/no question. Returns `false` on any fatal error.
    ///
    /// `yes` picks the default answer. Answers are lowercased, so `Y` and
    /// `YES` are accepted.
    pub fn confirm(
        &mut self,
        prompt: &str,
        yes: bool,
        configure: impl FnOnce(&mut Question),
    ) -> bool {
        let mut answer = String::new();
        let res = self.ask(&mut answer, prompt, |q| {
            q.set_default(if yes { "yes" } else { "no" });
            q.case = CasePolicy::Lower;
            q.in_set(string_set(["yes", "y", "no", "n"]));
            configure(q);
        });
        match res {
            Ok(()) => answer.starts_with('y'),
            Err(_) => false,
        }
    }

    /// Writes a message, see [`say`].
    pub fn say(&mut self, msg: &str) -> Result<(), PromptError> {
        say(&mut self.output, msg)?;
        Ok(())
    }

    /// Writes `items` laid out by `mode`, see [`list`].
    pub fn list<S: AsRef<str>>(&mut self, items: &[S], mode: &ListMode) -> Result<(), PromptError> {
        list(&mut self.output, items, mode)?;
        Ok(())
    }

    fn drive<T: Answerable>(
        &mut self,
        question: &mut Question,
        dest: &mut T,
    ) -> Result<(), PromptError> {
        trace!(value_type = %question.value_type(), "trying first answer");
        let first = match question.try_first_answer() {
            Ok(true) => question.cast(dest).map(|()| true),
            other => other,
        };
        match first {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "first answer rejected, prompting instead");
            }
            Err(e) => return Err(e),
        }

        let mut prompt = question.question.clone();
        loop {
            trace!(%prompt, "showing prompt");
            say(&mut self.output, &question.render_prompt(&prompt))?;

            let answered = self.input.next_line().and_then(|line| {
                question.parse(&line)?;
                question.cast(dest)?;
                Ok(line)
            });
            match answered {
                Ok(line) => {
                    debug!(answer = %line, "answer stored");
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    debug!(error = %e, "asking again");
                    say(&mut self.output, &format!("Error: {}\n", e))?;
                    prompt = question.responses[Response::AskOnError].clone();
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// [`Terminal::ask`] on standard input and output.
pub fn ask<T: Answerable>(
    dest: &mut T,
    prompt: &str,
    configure: impl FnOnce(&mut Question),
) -> Result<(), PromptError> {
    Terminal::stdio().ask(dest, prompt, configure)
}

/// [`Terminal::confirm`] on standard input and output.
pub fn confirm(prompt: &str, yes: bool, configure: impl FnOnce(&mut Question)) -> bool {
    Terminal::stdio().confirm(prompt, yes, configure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::set::AnswerSet;
    use std::{
        cell::{Cell, RefCell},
        io::{BufReader, Cursor, Read},
        rc::Rc,
    };

    /// A reader whose every read fails, counting the attempts.
    struct BrokenReader(Rc<Cell<usize>>);

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            self.0.set(self.0.get() + 1);
            Err(io::Error::other("device unplugged"))
        }
    }

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written<R>(term: &Terminal<R, Vec<u8>>) -> String {
        String::from_utf8(term.output.clone()).unwrap()
    }

    #[test]
    fn test_line_source_strips_terminator() {
        let mut source = Cursor::new("one\r\ntwo\nthree");
        assert_eq!(source.next_line().unwrap(), "one\r");
        assert_eq!(source.next_line().unwrap(), "two");
        assert_eq!(source.next_line().unwrap(), "three");
        assert!(matches!(source.next_line(), Err(PromptError::EndOfInput)));
    }

    #[test]
    fn test_line_source_rejects_bad_utf8_but_consumes_it() {
        let mut source = Cursor::new(b"caf\xe9\nok\n".to_vec());
        match source.next_line() {
            Err(e @ PromptError::InvalidEncoding { .. }) => assert!(e.is_recoverable()),
            other => panic!("expected encoding error, got {:?}", other),
        }
        assert_eq!(source.next_line().unwrap(), "ok");
    }

    #[test]
    fn test_ask_reprompts_after_bad_utf8() {
        let mut term = Terminal::new(Cursor::new(b"caf\xe9\nok\n".to_vec()), Vec::new());
        let mut dest = String::new();
        term.ask(&mut dest, "Name? ", |_| {}).unwrap();
        assert_eq!(dest, "ok");
        assert_eq!(
            written(&term),
            "Name? Error: Input is not valid UTF-8 (\"caf\u{FFFD}\")\n?  "
        );
    }

    #[test]
    fn test_read_failure_is_fatal_and_not_retried() {
        let reads = Rc::new(Cell::new(0));
        let input = BufReader::new(BrokenReader(Rc::clone(&reads)));
        let mut term = Terminal::new(input, Vec::new());
        let mut dest: i32 = 0;
        let res = term.ask(&mut dest, "Number? ", |_| {});
        match res {
            Err(e @ PromptError::Io(_)) => assert!(!e.is_recoverable()),
            other => panic!("expected io error, got {:?}", other),
        }
        assert_eq!(reads.get(), 1);
        assert_eq!(written(&term), "Number? ");
    }

    #[test]
    fn test_ask_reads_one_answer() {
        let mut term = terminal("42\n");
        let mut dest: i32 = 0;
        term.ask(&mut dest, "Number? ", |_| {}).unwrap();
        assert_eq!(dest, 42);
        assert_eq!(written(&term), "Number? ");
    }

    #[test]
    fn test_ask_retries_on_parse_error() {
        let mut term = terminal("abc\n7\n");
        let mut dest: u16 = 0;
        term.ask(&mut dest, "Count? ", |_| {}).unwrap();
        assert_eq!(dest, 7);
        assert_eq!(
            written(&term),
            "Count? Error: Could not read \"abc\" as Uint\n?  "
        );
    }

    #[test]
    fn test_out_of_range_default_is_not_accepted() {
        let mut term = terminal("\n40\n");
        let mut dest: i32 = 0;
        term.ask(&mut dest, "Enter an int:  ", |q| {
            q.set_default(13);
            q.in_set(AnswerSet::range(26i64, 62).unwrap());
        })
        .unwrap();
        assert_eq!(dest, 40);
        assert_eq!(
            written(&term),
            "Enter an int:  |13|  Error: Answer must be in range [26, 62] (13)\n?  |13|  "
        );
    }

    #[test]
    fn test_ask_on_error_template() {
        let mut term = terminal("\n5\n");
        let mut dest: f64 = 0.0;
        term.ask(&mut dest, "Ratio?\n", |q| {
            q.responses[Response::AskOnError] = String::from("Ratio again? ");
        })
        .unwrap();
        assert_eq!(dest, 5.0);
        assert_eq!(
            written(&term),
            "Ratio?\nError: Can not use empty string as value\nRatio again? "
        );
    }

    #[test]
    fn test_precision_error_reprompts() {
        let mut term = terminal("300\n100\n");
        let mut dest: i8 = 0;
        term.ask(&mut dest, "Small? ", |_| {}).unwrap();
        assert_eq!(dest, 100);
        assert!(written(&term).contains("Error: Input out of destination range (300 -> 44)\n"));
    }

    #[test]
    fn test_first_answer_skips_prompting() {
        let mut term = terminal("");
        let mut dest: u8 = 0;
        term.ask(&mut dest, "This should not appear:  ", |q| {
            q.set_first_answer(0xFFu8);
            q.in_set(AnswerSet::range(200u64, 255).unwrap());
        })
        .unwrap();
        assert_eq!(dest, 0xFF);
        assert_eq!(written(&term), "");
    }

    #[test]
    fn test_invalid_first_answer_falls_back_to_prompt() {
        let mut term = terminal("201\n");
        let mut dest: u8 = 0;
        term.ask(&mut dest, "Byte? ", |q| {
            q.set_first_answer(12u8);
            q.in_set(AnswerSet::range(200u64, 255).unwrap());
        })
        .unwrap();
        assert_eq!(dest, 201);
        assert_eq!(written(&term), "Byte? ");
    }

    #[test]
    fn test_first_answer_of_wrong_family_falls_back_to_prompt() {
        let mut term = terminal("7\n");
        let mut dest: u8 = 0;
        term.ask(&mut dest, "Byte? ", |q| q.set_first_answer(-1i32))
            .unwrap();
        assert_eq!(dest, 7);
        assert_eq!(written(&term), "Byte? ");
    }

    #[test]
    fn test_list_goes_through_the_writer() {
        let mut term = terminal("");
        term.list(&["echo hi", "echo there"], &ListMode::inline()).unwrap();
        assert_eq!(written(&term), "echo hi or echo there\n");
    }

    #[test]
    fn test_end_of_input_is_fatal() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut term = terminal("oops\n");
        let mut dest: i64 = 0;
        let res = term.ask(&mut dest, "Number? ", move |q| {
            q.on_fatal = Some(Box::new(move |e: &PromptError| {
                sink.borrow_mut().push(e.to_string())
            }));
        });
        assert!(matches!(res, Err(PromptError::EndOfInput)));
        assert_eq!(dest, 0);
        assert_eq!(seen.borrow().as_slice(), ["End of input"]);
    }

    #[test]
    fn test_misconfigured_set_is_fatal() {
        let mut term = terminal("5\n6\n");
        let mut dest = String::new();
        let res = term.ask(&mut dest, "Name? ", |q| {
            q.in_set(AnswerSet::above(1.0f64));
        });
        assert!(matches!(res, Err(PromptError::MemberType { .. })));
        assert_eq!(written(&term), "Name? ");
    }

    #[test]
    fn test_confirm() {
        assert!(terminal("y\n").confirm("Exit?  ", false, |_| {}));
        assert!(terminal("YES\n").confirm("Exit?  ", false, |_| {}));
        assert!(!terminal("n\n").confirm("Exit?  ", true, |_| {}));
        assert!(terminal("\n").confirm("Exit?  ", true, |_| {}));
        assert!(!terminal("\n").confirm("Exit?  ", false, |_| {}));
        assert!(!terminal("").confirm("Exit?  ", true, |_| {}));
    }

    #[test]
    fn test_confirm_reprompts_outside_the_set() {
        let mut term = terminal("maybe\nno\n");
        assert!(!term.confirm("Exit?  ", true, |_| {}));
        assert_eq!(
            written(&term),
            "Exit?  |yes|  Error: Answer must be in set {\"yes\", \"y\", \"no\", \"n\"} (\"maybe\")\n?  |yes|  "
        );
    }
}
