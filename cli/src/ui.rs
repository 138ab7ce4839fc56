use std::io::Write;

use crossterm::style::Stylize;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Style};
use tabled::{Table, Tabled};
use taskline_core::{format_datetime, ErrorReporter, Failure, Reply, Task, TaskCount};
use tracing::warn;

const GREETING: &str = "Hello! I'm taskline.\nWhat can I do for you?";
const FAREWELL: &str = "Bye. Hope to see you again soon!";

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Type")]
    kind: char,
    #[tabled(rename = "Done")]
    done: char,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Added")]
    added: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl TaskRow {
    fn new(position: usize, task: &Task) -> Self {
        Self {
            number: position + 1,
            kind: task.kind.tag(),
            done: task.status_icon(),
            description: task.description.clone(),
            when: task
                .kind
                .when()
                .map(|dt| format_datetime(&dt))
                .unwrap_or_else(|| "-".to_string()),
            added: task.added_on(),
            id: task.short_id(),
        }
    }
}

pub fn greeting() -> &'static str {
    GREETING
}

pub fn farewell() -> &'static str {
    FAREWELL
}

pub fn render_reply(reply: &Reply) -> String {
    match reply {
        Reply::Listed(tasks) if tasks.is_empty() => "You have no tasks in your list.".to_string(),
        Reply::Listed(tasks) => {
            let rows = tasks.iter().enumerate().map(|(i, t)| TaskRow::new(i, t));
            let mut table = Table::new(rows);
            table
                .with(Style::modern())
                .modify(Rows::first(), Color::FG_CYAN);
            format!("Here are the tasks in your list:\n{}", table)
        }
        Reply::Found(found) if found.is_empty() => "No matching tasks found.".to_string(),
        Reply::Found(found) => {
            let lines: Vec<String> = found
                .iter()
                .map(|(i, task)| format!("{}.{}", i + 1, task))
                .collect();
            format!("Here are the matching tasks in your list:\n{}", lines.join("\n"))
        }
        Reply::Deleted { task, remaining } => format!(
            "Noted. I've removed this task:\n  {}\n{}",
            task,
            count_line(*remaining)
        ),
        Reply::MarkedDone(task) => format!("Nice! I've marked this task as done:\n  {}", task),
        Reply::Added { task, total } => format!(
            "Got it. I've added this task:\n  {}\n{}",
            task,
            count_line(*total)
        ),
    }
}

fn count_line(count: usize) -> String {
    format!("Now you have {} in the list.", TaskCount(count))
}

pub fn render_failure(failure: &Failure) -> String {
    format!("☹ OOPS!!! {}", failure)
}

/// Writes failures to a terminal, in red when `color` is set.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorReporter for ConsoleReporter<W> {
    fn report(&mut self, failure: &Failure) {
        let message = render_failure(failure);
        let written = if self.color {
            writeln!(self.out, "{}", message.red())
        } else {
            writeln!(self.out, "{}", message)
        };
        if let Err(e) = written {
            warn!(error = %e, "could not write error message");
        }
    }
}
