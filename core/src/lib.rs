pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use command::{classify, Command, DispatchOutcome, Dispatcher, ErrorReporter, Reply, TaskList};
pub use config::Settings;
pub use error::{ConfigError, ErrorCondition, Failure, TaskListError};
pub use model::task::{Task, TaskCount, TaskKind, TaskNumber};
pub use repository::{FileTaskRepository, TaskRepository};
pub use service::task_service::TaskService;
pub use time::{format_datetime, parse_datetime};
