pub mod value;
pub use value::{Value, ValueType};

pub mod errors;
pub use errors::PromptError;

pub mod responses;
pub use responses::{Response, ResponseTemplates};

pub mod set;
pub use set::{AnswerSet, Constraint, Direction, Member, string_set};

pub mod normalize;
pub use normalize::{CasePolicy, WhitespacePolicy, normalize};

pub mod cast;
pub use cast::{Answerable, cast};

pub mod question;
pub use question::{FatalHandler, Question};

pub mod say;
pub use say::{ListMode, list, say, say_trimmed, trailing_whitespace};

pub mod terminal;
pub use terminal::{LineSource, Terminal, ask, confirm};

pub mod menu;
pub use menu::{Action, Choice, IndexMode, Menu, choose, split_shell_command};
