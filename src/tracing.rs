//! Logging setup
//!
//! Console output follows `RUST_LOG`; without it only warnings and panel
//! lifecycle events (collapse, load failures) are shown:
//! - `RUST_LOG=panel=debug` - width and section changes from the update loop
//! - `RUST_LOG=message=debug` - every processed message
//! - `RUST_LOG=sidepanel::panel::size=trace` - every height sample
//!
//! The log file `~/.config/sidepanel/logs/sidepanel.log` rotates daily and
//! records everything at debug level except per-resize height samples.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Console directives used when `RUST_LOG` is unset
pub const DEFAULT_CONSOLE_DIRECTIVES: &str = "warn,sidepanel::update=info";

/// File directives; height samples fire on every resize and stay out
pub const FILE_DIRECTIVES: &str = "debug,sidepanel::panel::size=info";

const LOG_FILE_NAME: &str = "sidepanel.log";

/// Console filter from an optional `RUST_LOG` value
fn console_filter(env: Option<&str>) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_CONSOLE_DIRECTIVES))
}

/// Initialize tracing with console and rolling file output
pub fn init() {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter(env.as_deref()));

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME))
                .with_ansi(false)
                .with_target(true)
                .with_filter(EnvFilter::new(FILE_DIRECTIVES)),
        ),
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_env_falls_back_to_defaults() {
        let filter = console_filter(Some("panel=loud"));
        assert_eq!(
            filter.to_string(),
            EnvFilter::new(DEFAULT_CONSOLE_DIRECTIVES).to_string()
        );
    }

    #[test]
    fn test_env_directives_are_used() {
        let filter = console_filter(Some("panel=debug"));
        assert!(filter.to_string().contains("panel=debug"));
    }
}
