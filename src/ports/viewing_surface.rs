//! Viewing surface port definition.

use crate::domain::AppError;

/// Port for opening independent display contexts for rendered documents.
pub trait ViewingSurface {
    type Page: SurfacePage;

    /// Open a new, blank page.
    fn open_blank(&self, title: &str) -> Result<Self::Page, AppError>;
}

/// A blank page receiving one document.
pub trait SurfacePage {
    /// Append markup to the page.
    fn write(&mut self, markup: &str) -> Result<(), AppError>;

    /// Close the page for writing and return where it can be viewed.
    fn finalize(self) -> Result<String, AppError>;
}
