//! Viewing surface that writes each page to its own HTML file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::AppError;
use crate::ports::{SurfacePage, ViewingSurface};

/// Opens a fresh `.html` file under `dir` for every page.
#[derive(Debug, Clone)]
pub struct FileViewingSurface {
    dir: PathBuf,
}

impl FileViewingSurface {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn create_new(&self, stem: &str) -> Result<(PathBuf, File), AppError> {
        for attempt in 0..100 {
            let name = if attempt == 0 {
                format!("{}.html", stem)
            } else {
                format!("{}-{}.html", stem, attempt)
            };
            let path = self.dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(AppError::Configuration(format!(
            "Could not find a free file name for '{}' in {}",
            stem,
            self.dir.display()
        )))
    }
}

impl ViewingSurface for FileViewingSurface {
    type Page = FilePage;

    fn open_blank(&self, title: &str) -> Result<FilePage, AppError> {
        std::fs::create_dir_all(&self.dir)?;
        let stem = format!("{}-{}", slug(title), Local::now().format("%Y%m%d-%H%M%S"));
        let (path, file) = self.create_new(&stem)?;
        tracing::debug!(path = %path.display(), "opened viewing surface");
        Ok(FilePage { path, writer: BufWriter::new(file) })
    }
}

/// A page backed by a newly created file.
#[derive(Debug)]
pub struct FilePage {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl SurfacePage for FilePage {
    fn write(&mut self, markup: &str) -> Result<(), AppError> {
        self.writer.write_all(markup.as_bytes())?;
        Ok(())
    }

    fn finalize(mut self) -> Result<String, AppError> {
        self.writer.flush()?;
        Ok(self.path.display().to_string())
    }
}

fn slug(title: &str) -> String {
    let mut slug = String::new();
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() { "timetable".to_string() } else { slug.to_string() }
}
