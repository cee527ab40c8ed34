use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG selects the diagnostic level; warnings and errors are shown by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    timetabler::app::cli::run();
}
