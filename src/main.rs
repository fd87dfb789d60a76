mod api;
mod app;
mod cli;
mod config;
mod error;
mod prompt;

use api::DeepSeekClient;
use app::App;
use colored::Colorize;
use config::ConfigStore;
use error::JokeError;
use std::io;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives when set and valid, otherwise warnings only
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let store = ConfigStore::for_current_user();
    let mut app = App::new(store, io::stdin().lock(), io::stdout());

    match app.run(std::env::args_os(), DeepSeekClient::new) {
        Ok(()) => {}
        Err(JokeError::Flags(e)) => e.exit(),
        Err(e) => {
            eprintln!("{} {}", "Error:".bright_red().bold(), e);
            std::process::exit(e.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_honours_bare_level() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_log_filter_honours_target_level() {
        assert_eq!(
            log_filter(Some("jokeapp=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
