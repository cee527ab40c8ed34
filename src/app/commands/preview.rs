//! Build the request a submission would send, without sending it.

use crate::app::AppContext;
use crate::domain::{AppError, FormBinding, ScheduleRequest, build_request};
use crate::ports::{FormDocument, ScheduleService, ViewingSurface};

/// Capture the form and build its schedule request.
pub fn execute<F, S, V>(ctx: &AppContext<F, S, V>) -> Result<ScheduleRequest, AppError>
where
    F: FormDocument,
    S: ScheduleService,
    V: ViewingSurface,
{
    let snapshot = FormBinding::bind(ctx.form())?.capture();
    Ok(build_request(&snapshot))
}
