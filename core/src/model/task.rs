use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::time::format_datetime;

/// A task number as the user typed it, counting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskNumber(usize);

impl TaskNumber {
    pub fn new(number: usize) -> Self {
        Self(number)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Zero-based position in the list; `None` for a typed `0`.
    pub fn index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl std::fmt::Display for TaskNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Displays as `1 task` / `3 tasks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCount(pub usize);

impl std::fmt::Display for TaskCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.0 == 1 { "task" } else { "tasks" };
        write!(f, "{} {}", self.0, noun)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDateTime },
    Event { at: NaiveDateTime },
}

impl TaskKind {
    /// One-letter tag shown in front of a task, e.g. `[D]`.
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    pub fn when(&self) -> Option<NaiveDateTime> {
        match self {
            TaskKind::Todo => None,
            TaskKind::Deadline { by } => Some(*by),
            TaskKind::Event { at } => Some(*at),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub description: String,
    pub kind: TaskKind,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(description: String, kind: TaskKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            kind,
            done: false,
            created_at: Utc::now(),
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description.into(), TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self::new(description.into(), TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, at: NaiveDateTime) -> Self {
        Self::new(description.into(), TaskKind::Event { at })
    }

    /// First block of the id, enough to tell tasks apart on screen.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    /// Day the task was added, as `YYYY-MM-DD` (UTC).
    pub fn added_on(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn status_icon(&self) -> char {
        if self.done { '✓' } else { ' ' }
    }

    pub fn matches(&self, query: &str) -> bool {
        self.description.contains(query)
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}][{}] {}", self.kind.tag(), self.status_icon(), self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", format_datetime(by)),
            TaskKind::Event { at } => write!(f, " (at: {})", format_datetime(at)),
        }
    }
}
