//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use url::Url;

use crate::app::{
    AppContext,
    commands::{preview, render, submit},
};
use crate::domain::configuration::{CONFIG_DIR, load_config};
use crate::domain::{ClientConfig, sign_in};
use crate::services::{FileViewingSurface, FormFile, HttpScheduleService};

pub use crate::app::commands::submit::{FailureReport, SubmissionOutcome};
pub use crate::domain::{AppError, ScheduleRequest};

/// Inputs for a form submission.
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// TOML form file. Defaults to `.timetabler/form.toml` when present.
    pub form_path: Option<PathBuf>,
    /// `name=value` control overrides applied on top of the form file.
    pub overrides: Vec<String>,
    pub username: String,
    pub password: String,
    /// Explicit config file instead of `.timetabler/config.toml`.
    pub config_path: Option<PathBuf>,
    /// Endpoint overriding the configured one.
    pub endpoint: Option<Url>,
    /// Output directory overriding the configured one.
    pub out_dir: Option<PathBuf>,
}

/// Default location of the form file, relative to `root`.
pub fn default_form_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join("form.toml")
}

fn resolve_config(
    root: &Path,
    config_path: Option<&Path>,
    endpoint: Option<&Url>,
    out_dir: Option<&Path>,
) -> Result<ClientConfig, AppError> {
    let mut config = load_config(root, config_path)?;
    if let Some(endpoint) = endpoint {
        config.service.endpoint = endpoint.clone();
    }
    if let Some(dir) = out_dir {
        config.output.dir = dir.to_path_buf();
    }
    config.validate()?;
    Ok(config)
}

fn load_form(root: &Path, options: &SubmitOptions) -> Result<FormFile, AppError> {
    let mut form = match &options.form_path {
        Some(path) => FormFile::load(path)?,
        None => {
            let candidate = default_form_path(root);
            if candidate.exists() { FormFile::load(&candidate)? } else { FormFile::new() }
        }
    };
    for assignment in &options.overrides {
        form.apply_override(assignment)?;
    }
    Ok(form)
}

fn create_context(
    root: &Path,
    options: &SubmitOptions,
) -> Result<AppContext<FormFile, HttpScheduleService, FileViewingSurface>, AppError> {
    let config = resolve_config(
        root,
        options.config_path.as_deref(),
        options.endpoint.as_ref(),
        options.out_dir.as_deref(),
    )?;
    let form = load_form(root, options)?;
    let service = HttpScheduleService::new(&config.service)?;
    let surface = FileViewingSurface::new(root.join(&config.output.dir));
    AppContext::new(form, service, surface)
}

/// Sign in, submit the form once, and render or report the outcome.
pub fn submit(root: &Path, options: &SubmitOptions) -> Result<SubmissionOutcome, AppError> {
    let operator = sign_in(&options.username, &options.password)?;
    let ctx = create_context(root, options)?;
    submit::execute(&ctx, &operator)
}

/// Sign in and build the request the form would send, without sending it.
pub fn preview(root: &Path, options: &SubmitOptions) -> Result<ScheduleRequest, AppError> {
    sign_in(&options.username, &options.password)?;
    let ctx = create_context(root, options)?;
    preview::execute(&ctx)
}

/// Render a saved service reply to the configured output directory.
pub fn render_reply(
    root: &Path,
    reply_path: &Path,
    title: &str,
    config_path: Option<&Path>,
    out_dir: Option<&Path>,
) -> Result<SubmissionOutcome, AppError> {
    let config = resolve_config(root, config_path, None, out_dir)?;
    let surface = FileViewingSurface::new(root.join(&config.output.dir));
    render::execute_file(reply_path, title, &surface)
}
