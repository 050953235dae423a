use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::format::{Format, Writer},
};

/// Timestamps log lines as "DD Month - HH:MM:SS.microseconds".
struct CustomTimer;

impl tracing_subscriber::fmt::time::FormatTime for CustomTimer {
    fn format_time(&self, writer: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Local::now();
        write!(writer, "{} - {}", now.format("%d %B"), now.format("%H:%M:%S%.6f"))
    }
}

/// Sets up the global logger with the specified log level.
///
/// `RUST_LOG` directives are honoured on top of `log_level`. Levels are shown,
/// targets are not. If a global logger is already set, this does nothing.
pub fn setup_logger(log_level: LevelFilter) {
    let filter = EnvFilter::from_default_env().add_directive(log_level.into());

    let format = Format::default().with_timer(CustomTimer).with_level(true).with_target(false);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .event_format(format)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
