//! Scheduling service reply model.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One assignment in a generated timetable.
///
/// Every field is kept as display text. The service sends `period` as a JSON
/// number; any scalar is accepted and rendered as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(deserialize_with = "display_text")]
    pub class: String,
    #[serde(deserialize_with = "display_text")]
    pub subject: String,
    #[serde(deserialize_with = "display_text")]
    pub teacher: String,
    #[serde(deserialize_with = "display_text")]
    pub classroom: String,
    #[serde(deserialize_with = "display_text")]
    pub weekday: String,
    #[serde(deserialize_with = "display_text")]
    pub period: String,
    #[serde(deserialize_with = "display_text")]
    pub time: String,
}

impl ScheduleEntry {
    /// Cell values in column order.
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.class,
            &self.subject,
            &self.teacher,
            &self.classroom,
            &self.weekday,
            &self.period,
            &self.time,
        ]
    }
}

/// Error reported by the scheduling service. Its shape is not constrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorDescriptor(pub Value);

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for ErrorDescriptor {
    fn from(message: &str) -> Self {
        Self(Value::String(message.to_string()))
    }
}

/// Outcome reported by the scheduling service.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleResponse {
    Success(Vec<ScheduleEntry>),
    Failure(Vec<ErrorDescriptor>),
}

/// JSON body of a service reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleReply {
    pub success: bool,
    #[serde(default)]
    pub schedule: Option<Vec<ScheduleEntry>>,
    #[serde(default)]
    pub errors: Option<Vec<ErrorDescriptor>>,
}

impl From<ScheduleReply> for ScheduleResponse {
    fn from(reply: ScheduleReply) -> Self {
        if reply.success {
            ScheduleResponse::Success(reply.schedule.unwrap_or_default())
        } else {
            ScheduleResponse::Failure(reply.errors.unwrap_or_default())
        }
    }
}

impl ScheduleResponse {
    /// Decode a reply body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<ScheduleReply>(body).map(Self::from)
    }
}

fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Null => Ok(String::new()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(serde::de::Error::custom(format!("expected a scalar, found {}", other))),
    }
}
