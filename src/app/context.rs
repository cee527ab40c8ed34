use crate::domain::{AppError, FormBinding, InFlightGuard};
use crate::ports::{FormDocument, ScheduleService, ViewingSurface};

/// Application context holding dependencies for command execution.
///
/// Construction binds the form document: a context only exists for a form
/// whose controls are all present.
pub struct AppContext<F: FormDocument, S: ScheduleService, V: ViewingSurface> {
    form: F,
    service: S,
    surface: V,
    in_flight: InFlightGuard,
}

impl<F: FormDocument, S: ScheduleService, V: ViewingSurface> AppContext<F, S, V> {
    /// Create a new application context.
    pub fn new(form: F, service: S, surface: V) -> Result<Self, AppError> {
        FormBinding::bind(&form)?;
        Ok(Self { form, service, surface, in_flight: InFlightGuard::new() })
    }

    /// Get a reference to the form document.
    pub fn form(&self) -> &F {
        &self.form
    }

    /// Get a reference to the scheduling service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Get a reference to the viewing surface.
    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Single-slot marker for the submission in flight.
    pub fn in_flight(&self) -> &InFlightGuard {
        &self.in_flight
    }
}
