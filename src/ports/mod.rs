mod form_document;
mod schedule_service;
mod viewing_surface;

pub use form_document::FormDocument;
pub use schedule_service::ScheduleService;
pub use viewing_surface::{SurfacePage, ViewingSurface};
