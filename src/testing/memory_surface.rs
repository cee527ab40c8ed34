use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{SurfacePage, ViewingSurface};

/// What was written to one page of a `MemorySurface`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRecord {
    pub title: String,
    pub content: String,
    pub writes: usize,
    pub finalized: bool,
}

/// Viewing surface double keeping every opened page in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pages: Arc<Mutex<Vec<PageRecord>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> Vec<PageRecord> {
        self.pages.lock().unwrap().clone()
    }
}

impl ViewingSurface for MemorySurface {
    type Page = MemoryPage;

    fn open_blank(&self, title: &str) -> Result<MemoryPage, AppError> {
        let mut pages = self.pages.lock().unwrap();
        pages.push(PageRecord { title: title.to_string(), ..Default::default() });
        Ok(MemoryPage { pages: Arc::clone(&self.pages), index: pages.len() - 1 })
    }
}

pub struct MemoryPage {
    pages: Arc<Mutex<Vec<PageRecord>>>,
    index: usize,
}

impl SurfacePage for MemoryPage {
    fn write(&mut self, markup: &str) -> Result<(), AppError> {
        let mut pages = self.pages.lock().unwrap();
        let page = &mut pages[self.index];
        page.content.push_str(markup);
        page.writes += 1;
        Ok(())
    }

    fn finalize(self) -> Result<String, AppError> {
        self.pages.lock().unwrap()[self.index].finalized = true;
        Ok(format!("memory://{}", self.index))
    }
}
