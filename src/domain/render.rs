//! Timetable document synthesis.

use minijinja::{AutoEscape, Environment, context};

use crate::domain::{AppError, ScheduleEntry};
use crate::ports::{SurfacePage, ViewingSurface};

const TEMPLATE_NAME: &str = "schedule_table.html";
static TEMPLATE_SOURCE: &str = include_str!("../assets/schedule_table.html.j2");

/// Header cells of the rendered table, in column order.
pub const COLUMNS: [&str; 7] =
    ["Class", "Subject", "Teacher", "Classroom", "Weekday", "Period", "Time"];

/// Title used when the timetable name is blank.
pub const DEFAULT_TITLE: &str = "Timetable";

/// A standalone document ready to be handed to a viewing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub title: String,
    pub markup: String,
    /// Number of body rows (header excluded).
    pub body_rows: usize,
}

fn environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE)
        .map_err(|e| AppError::Render(format!("Failed to parse template: {}", e)))?;
    Ok(env)
}

/// Build the timetable document for `entries`.
///
/// The table holds one header row plus one row per entry, in entry order.
/// Cell values are HTML-escaped by the template engine.
pub fn render_schedule(title: &str, entries: &[ScheduleEntry]) -> Result<RenderedView, AppError> {
    let title = if title.trim().is_empty() { DEFAULT_TITLE } else { title };
    let rows: Vec<[&str; 7]> = entries.iter().map(ScheduleEntry::cells).collect();

    let env = environment()?;
    let template = env
        .get_template(TEMPLATE_NAME)
        .map_err(|e| AppError::Render(format!("Template not registered: {}", e)))?;
    let markup = template
        .render(context! { title => title, columns => COLUMNS, rows => rows })
        .map_err(|e| AppError::Render(e.to_string()))?;

    Ok(RenderedView { title: title.to_string(), markup, body_rows: entries.len() })
}

/// Open a blank page on `surface`, write the whole document, and finalize it.
///
/// Returns the location reported by the surface.
pub fn present<V: ViewingSurface + ?Sized>(
    view: &RenderedView,
    surface: &V,
) -> Result<String, AppError> {
    let mut page = surface.open_blank(&view.title)?;
    page.write(&view.markup)?;
    page.finalize()
}
