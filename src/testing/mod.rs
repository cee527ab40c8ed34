mod fake_schedule_service;
mod fixtures;
mod memory_surface;

pub use fake_schedule_service::FakeScheduleService;
pub use fixtures::{blank_form, entry, sample_form, sample_request, sample_snapshot};
#[allow(unused_imports)]
pub use memory_surface::{MemoryPage, MemorySurface, PageRecord};
