//! timetabler: submit timetable forms to a scheduling service and render the returned schedule.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    FailureReport, SubmissionOutcome, SubmitOptions, default_form_path, preview, render_reply,
    submit,
};
pub use domain::{
    AppError, FormSnapshot, RenderedView, ScheduleEntry, ScheduleRequest, ScheduleResponse,
    build_request, render_schedule,
};
