use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ErrorDescriptor, ScheduleEntry, ScheduleRequest, ScheduleResponse};
use crate::ports::ScheduleService;

#[derive(Debug, Clone)]
enum Reply {
    Response(ScheduleResponse),
    Unreachable(String),
}

/// Scheduling service double that records requests and returns a canned reply.
#[derive(Debug, Clone)]
pub struct FakeScheduleService {
    received: Arc<Mutex<Vec<ScheduleRequest>>>,
    reply: Reply,
}

impl FakeScheduleService {
    fn with_reply(reply: Reply) -> Self {
        Self { received: Arc::new(Mutex::new(vec![])), reply }
    }

    pub fn succeeding(entries: Vec<ScheduleEntry>) -> Self {
        Self::with_reply(Reply::Response(ScheduleResponse::Success(entries)))
    }

    pub fn rejecting(errors: Vec<ErrorDescriptor>) -> Self {
        Self::with_reply(Reply::Response(ScheduleResponse::Failure(errors)))
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Unreachable(message.into()))
    }

    pub fn received_requests(&self) -> Vec<ScheduleRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl ScheduleService for FakeScheduleService {
    fn create_schedule(&self, request: &ScheduleRequest) -> Result<ScheduleResponse, AppError> {
        self.received.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Unreachable(message) => Err(AppError::Transport(message.clone())),
        }
    }
}
