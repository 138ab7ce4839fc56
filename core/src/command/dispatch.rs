use chrono::NaiveDateTime;
use tracing::{debug, warn};

use super::extract::extract;
use super::validate::{validate, ValidatedRequest};
use super::classify;
use crate::error::{Failure, TaskListError};
use crate::model::task::{Task, TaskNumber};

/// Operations the dispatcher routes validated commands to.
///
/// Tasks are addressed by [`TaskNumber`]; [`TaskNumber::index`] gives the
/// zero-based position. Range checking is up to the implementation.
pub trait TaskList {
    /// Called once before the session ends.
    fn stop(&mut self) -> Result<(), TaskListError>;
    fn list(&self) -> Result<Vec<Task>, TaskListError>;
    /// Matching tasks paired with their zero-based position in the list.
    fn find(&self, query: &str) -> Result<Vec<(usize, Task)>, TaskListError>;
    fn delete(&mut self, number: TaskNumber) -> Result<Task, TaskListError>;
    fn mark_done(&mut self, number: TaskNumber) -> Result<Task, TaskListError>;
    fn add_todo(&mut self, description: &str) -> Result<Task, TaskListError>;
    fn add_deadline(&mut self, description: &str, by: NaiveDateTime) -> Result<Task, TaskListError>;
    fn add_event(&mut self, description: &str, at: NaiveDateTime) -> Result<Task, TaskListError>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait ErrorReporter {
    fn report(&mut self, failure: &Failure);
}

/// What a successful task-list operation hands back for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Listed(Vec<Task>),
    Found(Vec<(usize, Task)>),
    Deleted { task: Task, remaining: usize },
    MarkedDone(Task),
    Added { task: Task, total: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Replied(Reply),
    /// The line was rejected and the reporter has been told why.
    Reported,
    /// `bye` was processed; the read loop should end.
    Stop,
}

impl DispatchOutcome {
    pub fn should_stop(&self) -> bool {
        matches!(self, DispatchOutcome::Stop)
    }
}

pub struct Dispatcher<L: TaskList, R: ErrorReporter> {
    tasks: L,
    reporter: R,
}

impl<L: TaskList, R: ErrorReporter> Dispatcher<L, R> {
    pub fn new(tasks: L, reporter: R) -> Self {
        Self { tasks, reporter }
    }

    pub fn task_list(&self) -> &L {
        &self.tasks
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_parts(self) -> (L, R) {
        (self.tasks, self.reporter)
    }

    /// Handles one typed line. Never fails: every problem goes to the reporter.
    pub fn process(&mut self, raw: &str) -> DispatchOutcome {
        let command = classify(raw);
        debug!(?command, "classified input");

        let parsed = if command.takes_arguments() {
            extract(raw, &command)
        } else {
            Default::default()
        };

        let request = match validate(&command, raw, parsed) {
            Ok(request) => request,
            Err(condition) => {
                warn!(category = condition.category(), input = raw, "rejected input");
                return self.fail(condition.into());
            }
        };

        match self.execute(request) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "task list operation failed");
                self.fail(e.into())
            }
        }
    }

    fn execute(&mut self, request: ValidatedRequest) -> Result<DispatchOutcome, TaskListError> {
        debug!(?request, "dispatching");
        let reply = match request {
            ValidatedRequest::Stop => {
                // The session ends even if the final save fails.
                if let Err(e) = self.tasks.stop() {
                    warn!(error = %e, "could not stop task list cleanly");
                    self.fail(e.into());
                }
                return Ok(DispatchOutcome::Stop);
            }
            ValidatedRequest::List => Reply::Listed(self.tasks.list()?),
            ValidatedRequest::Find { query } => Reply::Found(self.tasks.find(&query)?),
            ValidatedRequest::Delete { number } => {
                let task = self.tasks.delete(number)?;
                Reply::Deleted { task, remaining: self.tasks.len() }
            }
            ValidatedRequest::MarkDone { number } => {
                Reply::MarkedDone(self.tasks.mark_done(number)?)
            }
            ValidatedRequest::AddTodo { description } => {
                let task = self.tasks.add_todo(&description)?;
                self.added(task)
            }
            ValidatedRequest::AddDeadline { description, by } => {
                let task = self.tasks.add_deadline(&description, by)?;
                self.added(task)
            }
            ValidatedRequest::AddEvent { description, at } => {
                let task = self.tasks.add_event(&description, at)?;
                self.added(task)
            }
        };
        Ok(DispatchOutcome::Replied(reply))
    }

    fn added(&self, task: Task) -> Reply {
        Reply::Added { task, total: self.tasks.len() }
    }

    fn fail(&mut self, failure: Failure) -> DispatchOutcome {
        self.reporter.report(&failure);
        DispatchOutcome::Reported
    }
}
