//! Form submission: capture, build, send, then render or report.

use crate::app::AppContext;
use crate::domain::{
    AppError, ErrorDescriptor, FormBinding, Operator, RenderedView, ScheduleResponse, Submission,
    SubmissionState, build_request, present, render_schedule,
};
use crate::ports::{FormDocument, ScheduleService, ViewingSurface};

/// Why a submission produced no timetable.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureReport {
    /// The service answered with `success: false`.
    Rejected(Vec<ErrorDescriptor>),
    /// No usable reply was received.
    Transport(String),
}

impl FailureReport {
    /// Human-readable lines describing the failure.
    pub fn lines(&self) -> Vec<String> {
        match self {
            FailureReport::Rejected(errors) if errors.is_empty() => {
                vec!["Scheduling service rejected the request without details".to_string()]
            }
            FailureReport::Rejected(errors) => errors.iter().map(ToString::to_string).collect(),
            FailureReport::Transport(message) => vec![message.clone()],
        }
    }
}

/// Terminal result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Rendered { view: RenderedView, location: String },
    Failed(FailureReport),
}

impl SubmissionOutcome {
    pub fn state(&self) -> SubmissionState {
        match self {
            SubmissionOutcome::Rendered { .. } => SubmissionState::Rendered,
            SubmissionOutcome::Failed(_) => SubmissionState::Failed,
        }
    }
}

/// Execute one submission of the bound form.
///
/// Exactly one outcome is produced: the timetable is rendered to a new page on
/// the viewing surface, or the failure is logged and returned. A submission
/// started while another is in flight fails with `SubmissionInFlight`.
pub fn execute<F, S, V>(
    ctx: &AppContext<F, S, V>,
    operator: &Operator,
) -> Result<SubmissionOutcome, AppError>
where
    F: FormDocument,
    S: ScheduleService,
    V: ViewingSurface,
{
    let _slot = ctx.in_flight().acquire()?;
    let mut submission = Submission::new();

    submission.advance(SubmissionState::Building)?;
    let snapshot = FormBinding::bind(ctx.form())?.capture();
    tracing::debug!(
        operator = operator.username(),
        timetable = %snapshot.timetable_name,
        class_days = %snapshot.class_days,
        morning_periods = %snapshot.morning_periods,
        afternoon_periods = %snapshot.afternoon_periods,
        "captured form"
    );
    let request = build_request(&snapshot);

    submission.advance(SubmissionState::Sent)?;
    let response = match ctx.service().create_schedule(&request) {
        Ok(response) => response,
        Err(AppError::Transport(message)) => {
            submission.advance(SubmissionState::Failed)?;
            tracing::error!(error = %message, "schedule request failed");
            return Ok(SubmissionOutcome::Failed(FailureReport::Transport(message)));
        }
        Err(other) => return Err(other),
    };

    match response {
        ScheduleResponse::Success(entries) => {
            submission.advance(SubmissionState::Rendering)?;
            let rendered = render_schedule(&snapshot.timetable_name, &entries)
                .and_then(|view| present(&view, ctx.surface()).map(|location| (view, location)));
            match rendered {
                Ok((view, location)) => {
                    submission.advance(SubmissionState::Rendered)?;
                    tracing::info!(
                        rows = view.body_rows,
                        location = %location,
                        "timetable rendered"
                    );
                    Ok(SubmissionOutcome::Rendered { view, location })
                }
                Err(e) => {
                    submission.advance(SubmissionState::Failed)?;
                    Err(e)
                }
            }
        }
        ScheduleResponse::Failure(errors) => {
            submission.advance(SubmissionState::Failed)?;
            for error in &errors {
                tracing::warn!(error = %error, "scheduling service reported an error");
            }
            Ok(SubmissionOutcome::Failed(FailureReport::Rejected(errors)))
        }
    }
}
