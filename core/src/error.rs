//! Error types for taskline.
//!
//! `ErrorCondition` covers mistakes detected while reading a command line,
//! `TaskListError` covers failures raised by the task list itself. Both reach
//! the user through a single [`Failure`] value.

use thiserror::Error;

use crate::model::task::{TaskCount, TaskNumber};

/// A recoverable mistake in a user-typed command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorCondition {
    /// The command needs a description (or query) and none was given.
    #[error("The description of a {0} cannot be empty.")]
    EmptyDescription(String),

    /// A required delimiter such as `/by ` is absent.
    #[error("The keyword '{0}' is missing.")]
    MissingKeyword(String),

    /// The line does not start with any known command.
    #[error("I'm sorry, but I don't know what that means :-(")]
    UnknownInput(String),

    /// The date token does not follow `YYYY-MM-DD HH:MM`.
    #[error("Ensure that the datetime input is in the format YYYY-MM-DD HH:MM")]
    InvalidDateFormat(String),

    /// `delete`/`done` without a usable task number.
    #[error("'{0}' does not contain a valid task number.")]
    InvalidIndex(String),
}

impl ErrorCondition {
    pub fn empty_description(label: impl Into<String>) -> Self {
        Self::EmptyDescription(label.into())
    }

    pub fn missing_keyword(delimiter: impl Into<String>) -> Self {
        Self::MissingKeyword(delimiter.into())
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyDescription(_) => "empty description",
            Self::MissingKeyword(_) => "missing keyword",
            Self::UnknownInput(_) => "unknown input",
            Self::InvalidDateFormat(_) => "invalid date format",
            Self::InvalidIndex(_) => "invalid index",
        }
    }
}

/// Failures raised by a task list implementation.
#[derive(Error, Debug)]
pub enum TaskListError {
    #[error("Task {number} does not exist. You have {len}.")]
    TaskNotFound { number: TaskNumber, len: TaskCount },

    #[error("Could not save your tasks: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Anything the dispatcher hands to an error reporter.
#[derive(Error, Debug)]
pub enum Failure {
    #[error(transparent)]
    Input(#[from] ErrorCondition),

    #[error(transparent)]
    TaskList(#[from] TaskListError),
}

impl Failure {
    pub fn category(&self) -> &'static str {
        match self {
            Self::Input(condition) => condition.category(),
            Self::TaskList(TaskListError::TaskNotFound { .. }) => "task not found",
            Self::TaskList(TaskListError::Storage(_)) => "storage",
        }
    }
}

/// Problems reading the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine home directory")]
    NoHomeDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_description() {
        let err = ErrorCondition::empty_description("todo");
        assert_eq!(err.to_string(), "The description of a todo cannot be empty.");
        assert_eq!(err.category(), "empty description");
    }

    #[test]
    fn test_error_display_missing_keyword() {
        let err = ErrorCondition::missing_keyword("/by ");
        assert_eq!(err.to_string(), "The keyword '/by ' is missing.");
    }

    #[test]
    fn test_error_display_task_not_found() {
        let err = TaskListError::TaskNotFound { number: TaskNumber::new(5), len: TaskCount(2) };
        assert_eq!(err.to_string(), "Task 5 does not exist. You have 2 tasks.");

        let err = TaskListError::TaskNotFound { number: TaskNumber::new(0), len: TaskCount(1) };
        assert_eq!(err.to_string(), "Task 0 does not exist. You have 1 task.");
    }

    #[test]
    fn test_failure_is_transparent() {
        let failure = Failure::from(ErrorCondition::UnknownInput("blah".to_string()));
        assert_eq!(
            failure.to_string(),
            "I'm sorry, but I don't know what that means :-("
        );
        assert_eq!(failure.category(), "unknown input");

        let failure = Failure::from(TaskListError::from(anyhow::anyhow!("disk full")));
        assert_eq!(failure.to_string(), "Could not save your tasks: disk full");
        assert_eq!(failure.category(), "storage");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Failure>();
    }
}
