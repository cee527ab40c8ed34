//! Render a saved scheduling service reply without contacting the service.

use std::path::Path;

use crate::app::commands::submit::{FailureReport, SubmissionOutcome};
use crate::domain::{AppError, ScheduleResponse, present, render_schedule};
use crate::ports::ViewingSurface;

/// Parse a reply body and render it to a new page on `surface`.
///
/// A `success: false` reply renders nothing and is reported as a rejection.
pub fn execute<V: ViewingSurface>(
    reply: &str,
    title: &str,
    surface: &V,
) -> Result<SubmissionOutcome, AppError> {
    let response = ScheduleResponse::from_json(reply).map_err(|e| AppError::ParseError {
        what: "schedule reply".to_string(),
        details: e.to_string(),
    })?;

    match response {
        ScheduleResponse::Success(entries) => {
            let view = render_schedule(title, &entries)?;
            let location = present(&view, surface)?;
            Ok(SubmissionOutcome::Rendered { view, location })
        }
        ScheduleResponse::Failure(errors) => {
            Ok(SubmissionOutcome::Failed(FailureReport::Rejected(errors)))
        }
    }
}

/// Read a reply from `path` and render it.
pub fn execute_file<V: ViewingSurface>(
    path: &Path,
    title: &str,
    surface: &V,
) -> Result<SubmissionOutcome, AppError> {
    let reply = std::fs::read_to_string(path).map_err(|e| {
        AppError::Configuration(format!("Failed to read reply file {}: {}", path.display(), e))
    })?;
    execute(&reply, title, surface)
}
