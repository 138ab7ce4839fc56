mod logging;
mod ui;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use taskline_core::config::default_config_path;
use taskline_core::{
    DispatchOutcome, Dispatcher, ErrorReporter, FileTaskRepository, Settings, TaskList, TaskService,
};
use tracing::info;

use crate::ui::ConsoleReporter;

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "A conversational command-line task tracker", long_about = None)]
struct Cli {
    /// Directory holding the task file (overrides the config file)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Config file path [default: ~/.taskline/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let settings = Settings::load_from_file(&config_path)?.with_data_dir(cli.data_dir);

    let log_path = settings.resolve_log_path()?;
    // The session runs without logs rather than not at all.
    if let Err(e) = logging::init_file_logging(&log_path, &settings.log_level) {
        eprintln!("Warning: {e:#}");
    }
    info!(config = %config_path.display(), "starting taskline");

    let data_dir = settings.resolve_data_dir()?;
    let repo = FileTaskRepository::new(&data_dir, &settings.file_name)?;
    info!(path = %repo.path().display(), "using task file");
    let service = TaskService::new(repo)?;

    let color = io::stdout().is_tty();
    let mut dispatcher = Dispatcher::new(service, ConsoleReporter::new(io::stdout(), color));

    run(&mut dispatcher, io::stdin().lock(), io::stdout())
}

/// Feeds lines to the dispatcher until `bye` or end of input.
fn run<L, R>(dispatcher: &mut Dispatcher<L, R>, input: impl BufRead, mut out: impl Write) -> Result<()>
where
    L: TaskList,
    R: ErrorReporter,
{
    writeln!(out, "{}", ui::greeting())?;

    for line in input.lines() {
        let line = line?;
        match dispatcher.process(&line) {
            DispatchOutcome::Replied(reply) => writeln!(out, "{}", ui::render_reply(&reply))?,
            DispatchOutcome::Reported => {}
            DispatchOutcome::Stop => {
                writeln!(out, "{}", ui::farewell())?;
                return Ok(());
            }
        }
    }

    // Input closed without `bye`; end the session the same way.
    info!("end of input");
    if dispatcher.process("bye").should_stop() {
        writeln!(out, "{}", ui::farewell())?;
    }
    Ok(())
}
