//! Command interpretation: classify a typed line, pull its arguments out,
//! validate them, and route the result to a task list.

pub mod dispatch;
pub mod extract;
pub mod validate;


pub use dispatch::{DispatchOutcome, Dispatcher, ErrorReporter, Reply, TaskList};
pub use extract::{extract, ParsedArguments};
pub use validate::{validate, ValidatedRequest};

pub const BYE: &str = "bye";
pub const LIST: &str = "list";
pub const FIND: &str = "find ";
pub const DELETE: &str = "delete";
pub const DONE: &str = "done ";
pub const TODO: &str = "todo ";
pub const DEADLINE: &str = "deadline ";
pub const EVENT: &str = "event ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Find,
    Delete,
    Done,
    AddTodo,
    AddDeadline,
    AddEvent,
    Unrecognized(String),
}

impl Command {
    pub fn takes_arguments(&self) -> bool {
        !matches!(self, Command::Bye | Command::List | Command::Unrecognized(_))
    }
}

/// Maps a raw line to exactly one command.
///
/// Keywords are tried in a fixed order and the first match wins. `delete` is
/// matched without a trailing space while `done ` needs one, so `delete3`
/// is a delete but `done3` is unrecognized.
pub fn classify(raw: &str) -> Command {
    if raw == BYE {
        Command::Bye
    } else if raw == LIST {
        Command::List
    } else if raw.starts_with(FIND) {
        Command::Find
    } else if raw.starts_with(DELETE) {
        Command::Delete
    } else if raw.starts_with(DONE) {
        Command::Done
    } else if raw.starts_with(TODO) {
        Command::AddTodo
    } else if raw.starts_with(DEADLINE) {
        Command::AddDeadline
    } else if raw.starts_with(EVENT) {
        Command::AddEvent
    } else {
        Command::Unrecognized(raw.to_string())
    }
}
