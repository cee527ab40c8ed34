//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::app::api::{self, FailureReport, SubmissionOutcome, SubmitOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "timetabler")]
#[command(version)]
#[command(
    about = "Submit timetable forms to a scheduling service and render the result",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the timetable form and render the returned schedule
    #[clap(visible_alias = "s")]
    Submit(SubmitArgs),
    /// Render a saved scheduling service reply
    #[clap(visible_alias = "r")]
    Render {
        /// JSON reply file
        reply: PathBuf,
        /// Title of the rendered timetable
        #[arg(short, long, default_value = "")]
        title: String,
        /// Config file (defaults to .timetabler/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Directory receiving rendered timetables
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SubmitArgs {
    /// TOML form file (defaults to .timetabler/form.toml)
    #[arg(short, long)]
    form: Option<PathBuf>,
    /// Set a form control, e.g. --set teacher=Alice
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,
    /// Login username
    #[arg(short, long)]
    username: String,
    /// Login password
    #[arg(short, long)]
    password: String,
    /// Config file (defaults to .timetabler/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Scheduling service endpoint
    #[arg(short, long)]
    endpoint: Option<Url>,
    /// Directory receiving rendered timetables
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// Print the request instead of sending it
    #[arg(long)]
    dry_run: bool,
}

impl From<SubmitArgs> for SubmitOptions {
    fn from(args: SubmitArgs) -> Self {
        SubmitOptions {
            form_path: args.form,
            overrides: args.set,
            username: args.username,
            password: args.password,
            config_path: args.config,
            endpoint: args.endpoint,
            out_dir: args.out_dir,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = std::env::current_dir()
        .map_err(AppError::from)
        .and_then(|root| match cli.command {
            Commands::Submit(args) => run_submit(&root, args),
            Commands::Render { reply, title, config, out_dir } => {
                run_render(&root, &reply, &title, config.as_deref(), out_dir.as_deref())
            }
        });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_submit(root: &Path, args: SubmitArgs) -> Result<i32, AppError> {
    let dry_run = args.dry_run;
    let options = SubmitOptions::from(args);

    if dry_run {
        let request = api::preview(root, &options)?;
        let json = serde_json::to_string_pretty(&request).map_err(|e| AppError::ParseError {
            what: "schedule request".to_string(),
            details: e.to_string(),
        })?;
        println!("{}", json);
        return Ok(0);
    }

    report(api::submit(root, &options)?)
}

fn run_render(
    root: &Path,
    reply: &Path,
    title: &str,
    config: Option<&Path>,
    out_dir: Option<&Path>,
) -> Result<i32, AppError> {
    report(api::render_reply(root, reply, title, config, out_dir)?)
}

fn report(outcome: SubmissionOutcome) -> Result<i32, AppError> {
    match outcome {
        SubmissionOutcome::Rendered { view, location } => {
            println!("✅ Rendered {} row(s) to {}", view.body_rows, location);
            Ok(0)
        }
        SubmissionOutcome::Failed(failure) => {
            let heading = match &failure {
                FailureReport::Rejected(_) => "Scheduling failed",
                FailureReport::Transport(_) => "Could not reach the scheduling service",
            };
            eprintln!("❌ {}:", heading);
            for line in failure.lines() {
                eprintln!("  • {}", line);
            }
            Ok(1)
        }
    }
}
