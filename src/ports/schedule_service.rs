//! Scheduling service port definition.

use crate::domain::{AppError, ScheduleRequest, ScheduleResponse};

/// Port for submitting schedule requests to the remote scheduling service.
pub trait ScheduleService {
    /// Send one request and wait for the reply.
    ///
    /// `Ok` carries the service's own verdict, success or failure. `Err` means
    /// no usable reply was received (`AppError::Transport`).
    fn create_schedule(&self, request: &ScheduleRequest) -> Result<ScheduleResponse, AppError>;
}
