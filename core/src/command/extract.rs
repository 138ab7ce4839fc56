use super::{Command, DEADLINE, EVENT, FIND, TODO};
use crate::model::task::TaskNumber;

pub const BY_DELIMITER: &str = "/by ";
pub const AT_DELIMITER: &str = "/at ";

// Where the free text of each command starts.
const FIND_QUERY_OFFSET: usize = FIND.len();
// Older parsers sliced todo text from offset 4, keeping the keyword's space;
// this starts after "todo " and trims instead.
const TODO_DESCRIPTION_OFFSET: usize = TODO.len();
const DEADLINE_DESCRIPTION_OFFSET: usize = DEADLINE.len();
const EVENT_DESCRIPTION_OFFSET: usize = EVENT.len();

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedArguments {
    pub description: String,
    /// Text after the delimiter; `None` when the delimiter was not typed.
    pub date_token: Option<String>,
    /// Task number for `delete` and `done`; `None` when no number could be read.
    pub number: Option<TaskNumber>,
}

pub fn extract(raw: &str, command: &Command) -> ParsedArguments {
    match command {
        Command::Find => ParsedArguments {
            description: tail(raw, FIND_QUERY_OFFSET).to_string(),
            ..Default::default()
        },
        Command::Delete | Command::Done => ParsedArguments {
            number: extract_number(raw),
            ..Default::default()
        },
        Command::AddTodo => ParsedArguments {
            description: tail(raw, TODO_DESCRIPTION_OFFSET).trim().to_string(),
            ..Default::default()
        },
        Command::AddDeadline => split_on_delimiter(raw, DEADLINE_DESCRIPTION_OFFSET, BY_DELIMITER),
        Command::AddEvent => split_on_delimiter(raw, EVENT_DESCRIPTION_OFFSET, AT_DELIMITER),
        Command::Bye | Command::List | Command::Unrecognized(_) => ParsedArguments::default(),
    }
}

/// Joins every ASCII digit in `raw` into a task number. `None` if there are
/// no digits or the number overflows. A typed `0` is still a number; whether
/// it names a task is for the task list to say.
pub fn extract_number(raw: &str) -> Option<TaskNumber> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<usize>().ok().map(TaskNumber::new)
}

fn tail(raw: &str, offset: usize) -> &str {
    raw.get(offset..).unwrap_or("")
}

// Splits at the first occurrence of `delimiter`. A description that itself
// contains the delimiter is cut short there.
fn split_on_delimiter(raw: &str, offset: usize, delimiter: &str) -> ParsedArguments {
    match raw.find(delimiter) {
        Some(pos) => ParsedArguments {
            description: raw.get(offset..pos).unwrap_or("").trim().to_string(),
            date_token: Some(tail(raw, pos + delimiter.len()).to_string()),
            number: None,
        },
        None => ParsedArguments {
            description: tail(raw, offset).trim().to_string(),
            ..Default::default()
        },
    }
}
