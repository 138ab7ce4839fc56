use crate::command::TaskList;
use crate::error::TaskListError;
use crate::model::task::{Task, TaskCount, TaskNumber};
use crate::repository::TaskRepository;
use anyhow::Result;
use chrono::NaiveDateTime;
use tracing::info;

/// In-memory task list that writes through to a repository after every change.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Result<Self> {
        let tasks = repo.load()?;
        info!(count = tasks.len(), "task list opened");
        Ok(Self { repo, tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn persist(&self) -> Result<(), TaskListError> {
        self.repo.save(&self.tasks)?;
        Ok(())
    }

    fn position(&self, number: TaskNumber) -> Result<usize, TaskListError> {
        number
            .index()
            .filter(|&index| index < self.tasks.len())
            .ok_or(TaskListError::TaskNotFound { number, len: TaskCount(self.tasks.len()) })
    }

    fn push(&mut self, task: Task) -> Result<Task, TaskListError> {
        self.tasks.push(task.clone());
        if let Err(e) = self.persist() {
            // Keep memory and disk in step.
            self.tasks.pop();
            return Err(e);
        }
        Ok(task)
    }
}

impl<R: TaskRepository> TaskList for TaskService<R> {
    fn stop(&mut self) -> Result<(), TaskListError> {
        info!(count = self.tasks.len(), "closing task list");
        self.persist()
    }

    fn list(&self) -> Result<Vec<Task>, TaskListError> {
        Ok(self.tasks.clone())
    }

    fn find(&self, query: &str) -> Result<Vec<(usize, Task)>, TaskListError> {
        Ok(self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.matches(query))
            .map(|(i, t)| (i, t.clone()))
            .collect())
    }

    fn delete(&mut self, number: TaskNumber) -> Result<Task, TaskListError> {
        let index = self.position(number)?;
        let removed = self.tasks.remove(index);
        if let Err(e) = self.persist() {
            self.tasks.insert(index, removed);
            return Err(e);
        }
        Ok(removed)
    }

    fn mark_done(&mut self, number: TaskNumber) -> Result<Task, TaskListError> {
        let index = self.position(number)?;
        let was_done = self.tasks[index].done;
        self.tasks[index].mark_done();
        if let Err(e) = self.persist() {
            self.tasks[index].done = was_done;
            return Err(e);
        }
        Ok(self.tasks[index].clone())
    }

    fn add_todo(&mut self, description: &str) -> Result<Task, TaskListError> {
        self.push(Task::todo(description))
    }

    fn add_deadline(&mut self, description: &str, by: NaiveDateTime) -> Result<Task, TaskListError> {
        self.push(Task::deadline(description, by))
    }

    fn add_event(&mut self, description: &str, at: NaiveDateTime) -> Result<Task, TaskListError> {
        self.push(Task::event(description, at))
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
