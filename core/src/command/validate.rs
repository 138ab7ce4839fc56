use chrono::NaiveDateTime;

use super::extract::{ParsedArguments, AT_DELIMITER, BY_DELIMITER};
use super::{Command, DEADLINE, EVENT, FIND, TODO};
use crate::error::ErrorCondition;
use crate::model::task::TaskNumber;
use crate::time::parse_datetime;

/// A command whose arguments passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedRequest {
    Stop,
    List,
    Find { query: String },
    Delete { number: TaskNumber },
    MarkDone { number: TaskNumber },
    AddTodo { description: String },
    AddDeadline { description: String, by: NaiveDateTime },
    AddEvent { description: String, at: NaiveDateTime },
}

pub fn validate(
    command: &Command,
    raw: &str,
    parsed: ParsedArguments,
) -> Result<ValidatedRequest, ErrorCondition> {
    match command {
        Command::Bye => Ok(ValidatedRequest::Stop),
        Command::List => Ok(ValidatedRequest::List),
        Command::Find => {
            if raw.len() <= FIND.len() {
                return Err(ErrorCondition::empty_description("find query"));
            }
            Ok(ValidatedRequest::Find { query: parsed.description })
        }
        Command::Delete => {
            let number = require_number(raw, parsed.number)?;
            Ok(ValidatedRequest::Delete { number })
        }
        Command::Done => {
            let number = require_number(raw, parsed.number)?;
            Ok(ValidatedRequest::MarkDone { number })
        }
        Command::AddTodo => {
            if raw.len() <= TODO.len() || parsed.description.is_empty() {
                return Err(ErrorCondition::empty_description("todo"));
            }
            Ok(ValidatedRequest::AddTodo { description: parsed.description })
        }
        Command::AddDeadline => {
            let (description, by) = require_dated(raw, parsed, DEADLINE, "deadline", BY_DELIMITER)?;
            Ok(ValidatedRequest::AddDeadline { description, by })
        }
        Command::AddEvent => {
            let (description, at) = require_dated(raw, parsed, EVENT, "event", AT_DELIMITER)?;
            Ok(ValidatedRequest::AddEvent { description, at })
        }
        Command::Unrecognized(text) => Err(ErrorCondition::UnknownInput(text.clone())),
    }
}

fn require_number(raw: &str, number: Option<TaskNumber>) -> Result<TaskNumber, ErrorCondition> {
    number.ok_or_else(|| ErrorCondition::InvalidIndex(raw.to_string()))
}

// Checks shared by `deadline` and `event`, in order: keyword only, delimiter
// missing, blank description, then the date token.
fn require_dated(
    raw: &str,
    parsed: ParsedArguments,
    keyword: &str,
    label: &str,
    delimiter: &str,
) -> Result<(String, NaiveDateTime), ErrorCondition> {
    if raw.len() <= keyword.len() {
        return Err(ErrorCondition::empty_description(label));
    }
    let token = parsed
        .date_token
        .ok_or_else(|| ErrorCondition::missing_keyword(delimiter))?;
    if parsed.description.is_empty() {
        return Err(ErrorCondition::empty_description(label));
    }
    let when = parse_datetime(&token).map_err(|_| ErrorCondition::InvalidDateFormat(token))?;
    Ok((parsed.description, when))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{classify, extract};

    fn run(raw: &str) -> Result<ValidatedRequest, ErrorCondition> {
        let command = classify(raw);
        validate(&command, raw, extract(raw, &command))
    }

    #[test]
    fn test_validate_find() {
        assert_eq!(
            run("find "),
            Err(ErrorCondition::empty_description("find query"))
        );
        assert_eq!(
            run("find book"),
            Ok(ValidatedRequest::Find { query: "book".to_string() })
        );
    }

    #[test]
    fn test_validate_todo() {
        assert_eq!(run("todo "), Err(ErrorCondition::empty_description("todo")));
        assert_eq!(run("todo    "), Err(ErrorCondition::empty_description("todo")));
        assert_eq!(
            run("todo borrow book"),
            Ok(ValidatedRequest::AddTodo { description: "borrow book".to_string() })
        );
    }

    #[test]
    fn test_validate_deadline_order_of_checks() {
        assert_eq!(run("deadline "), Err(ErrorCondition::empty_description("deadline")));
        assert_eq!(
            run("deadline return book"),
            Err(ErrorCondition::missing_keyword("/by "))
        );
        assert_eq!(
            run("deadline /by 2024-01-01 10:00"),
            Err(ErrorCondition::empty_description("deadline"))
        );
        assert_eq!(
            run("deadline Submit report /by 2024-13-40 25:00"),
            Err(ErrorCondition::InvalidDateFormat("2024-13-40 25:00".to_string()))
        );
        // Delimiter without its trailing space is not the delimiter.
        assert_eq!(
            run("deadline return book /by"),
            Err(ErrorCondition::missing_keyword("/by "))
        );
    }

    #[test]
    fn test_validate_deadline_ok() {
        let by = parse_datetime("2024-06-01 12:00").unwrap();
        assert_eq!(
            run("deadline return book /by 2024-06-01 12:00"),
            Ok(ValidatedRequest::AddDeadline { description: "return book".to_string(), by })
        );
    }

    #[test]
    fn test_validate_event() {
        let at = parse_datetime("2024-06-01 14:00").unwrap();
        assert_eq!(run("event "), Err(ErrorCondition::empty_description("event")));
        assert_eq!(run("event party"), Err(ErrorCondition::missing_keyword("/at ")));
        assert_eq!(
            run("event party /by 2024-06-01 14:00"),
            Err(ErrorCondition::missing_keyword("/at "))
        );
        assert_eq!(
            run("event party /at 2024-06-01 14:00"),
            Ok(ValidatedRequest::AddEvent { description: "party".to_string(), at })
        );
        assert_eq!(
            run("event party /at tomorrow"),
            Err(ErrorCondition::InvalidDateFormat("tomorrow".to_string()))
        );
    }

    #[test]
    fn test_validate_index_commands() {
        assert_eq!(
            run("delete 3"),
            Ok(ValidatedRequest::Delete { number: TaskNumber::new(3) })
        );
        assert_eq!(
            run("done 1"),
            Ok(ValidatedRequest::MarkDone { number: TaskNumber::new(1) })
        );
        assert_eq!(
            run("delete abc"),
            Err(ErrorCondition::InvalidIndex("delete abc".to_string()))
        );
        // Range is not checked here.
        assert_eq!(
            run("done 0"),
            Ok(ValidatedRequest::MarkDone { number: TaskNumber::new(0) })
        );
    }

    #[test]
    fn test_validate_unrecognized() {
        assert_eq!(
            run("blah"),
            Err(ErrorCondition::UnknownInput("blah".to_string()))
        );
        assert_eq!(run("bye"), Ok(ValidatedRequest::Stop));
        assert_eq!(run("list"), Ok(ValidatedRequest::List));
    }
}
