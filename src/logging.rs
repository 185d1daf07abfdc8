use tracing_subscriber::EnvFilter;
use crate::cli::commands::OutputArgs;

/// Install the global subscriber. `RUST_LOG` wins over `-v`; output goes to
/// stderr so stdout stays machine-readable.
pub fn init(output: &OutputArgs) {
    let log_level = match output.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!output.no_color)
        .with_writer(std::io::stderr)
        .init();
}
