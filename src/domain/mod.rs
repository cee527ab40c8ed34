pub mod configuration;
pub mod error;
pub mod form;
pub mod login;
pub mod render;
pub mod request;
pub mod response;
pub mod submission;

pub use configuration::{ClientConfig, OutputConfig, ServiceConfig};
pub use error::AppError;
pub use form::{FormBinding, FormControl, FormSnapshot};
pub use login::{Operator, sign_in};
pub use render::{COLUMNS, RenderedView, present, render_schedule};
pub use request::{
    ClassSpec, ClassroomSpec, ScheduleRequest, SubjectRequirement, TeacherSpec, build_request,
};
pub use response::{ErrorDescriptor, ScheduleEntry, ScheduleReply, ScheduleResponse};
pub use submission::{InFlightGuard, InFlightSlot, Submission, SubmissionState};
