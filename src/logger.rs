//! Tracing subscriber setup.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILE_FILTER: &str = "pdf_quiz=info";
const STDERR_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// With a log file everything goes there, filtered by `RUST_LOG` when set.
/// Without one stderr only ever sees warnings and errors, since the terminal
/// UI shares it.
pub fn init(log_file: Option<&Path>) -> std::io::Result<()> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = select_filter(log_file.is_some(), env_directives.as_deref());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

fn select_filter(to_file: bool, env_directives: Option<&str>) -> EnvFilter {
    if !to_file {
        return EnvFilter::new(STDERR_FILTER);
    }

    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILE_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_ignores_rust_log() {
        let filter = select_filter(false, Some("debug"));
        assert_eq!(filter.to_string(), STDERR_FILTER);
    }

    #[test]
    fn test_file_uses_rust_log() {
        let filter = select_filter(true, Some("debug"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_file_default_filter() {
        let filter = select_filter(true, None);
        assert_eq!(filter.to_string(), DEFAULT_FILE_FILTER);
    }
}
