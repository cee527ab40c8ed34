mod form_file;
mod schedule_service_http;
mod viewing_surface_files;

pub use form_file::FormFile;
pub use schedule_service_http::HttpScheduleService;
pub use viewing_surface_files::{FilePage, FileViewingSurface};
