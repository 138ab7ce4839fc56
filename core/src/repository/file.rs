use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

pub const DEFAULT_FILE_NAME: &str = "tasks.json";

#[derive(Clone)]
pub struct FileTaskRepository {
    file_path: PathBuf,
}

impl FileTaskRepository {
    /// Opens `<data_dir>/<file_name>`, creating the directory and an empty
    /// task file if needed.
    pub fn new(data_dir: &Path, file_name: &str) -> Result<Self> {
        fs::create_dir_all(data_dir)
            .with_context(|| format!("Could not create data directory {}", data_dir.display()))?;
        let path = data_dir.join(file_name);

        if !path.exists() {
            info!(path = %path.display(), "creating empty task file");
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Task>::new())?;
            writer.flush()?;
        }

        Ok(FileTaskRepository { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl TaskRepository for FileTaskRepository {
    fn load(&self) -> Result<Vec<Task>> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Could not open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let tasks: Vec<Task> = serde_json::from_reader(reader)
            .with_context(|| format!("Corrupt task file {}", self.file_path.display()))?;
        debug!(count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("Could not write {}", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.flush()?;
        debug!(count = tasks.len(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_datetime;

    #[test]
    fn test_new_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data");
        let repo = FileTaskRepository::new(&nested, DEFAULT_FILE_NAME).unwrap();
        assert!(repo.path().exists());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileTaskRepository::new(dir.path(), "mine.json").unwrap();

        let mut done = Task::todo("read book");
        done.mark_done();
        let tasks = vec![
            done,
            Task::deadline("return book", parse_datetime("2024-06-01 12:00").unwrap()),
        ];
        repo.save(&tasks).unwrap();

        let reopened = FileTaskRepository::new(dir.path(), "mine.json").unwrap();
        assert_eq!(reopened.load().unwrap(), tasks);
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_FILE_NAME), "not json").unwrap();
        let repo = FileTaskRepository::new(dir.path(), DEFAULT_FILE_NAME).unwrap();
        assert!(repo.load().is_err());
    }
}
