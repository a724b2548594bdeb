//! Structured logging setup for the CLI.
//!
//! - `GRAPHILP_TRACE`: `EnvFilter` directives (default `warn`, `off` disables)
//! - `GRAPHILP_LOG_FORMAT`: `pretty` (default) or `json`
//! - `GRAPHILP_LOG_FILE`: file that also receives every event, appended to

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

const TRACE_VAR: &str = "GRAPHILP_TRACE";
const FORMAT_VAR: &str = "GRAPHILP_LOG_FORMAT";
const FILE_VAR: &str = "GRAPHILP_LOG_FILE";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging settings read from the environment.
#[derive(Debug)]
pub struct LogSettings {
    pub filter: EnvFilter,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl LogSettings {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_values(
            env::var(TRACE_VAR).ok().as_deref(),
            env::var(FORMAT_VAR).ok().as_deref(),
            env::var_os(FILE_VAR).map(PathBuf::from),
        )
    }

    pub fn from_values(
        trace: Option<&str>,
        format: Option<&str>,
        file: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        Ok(LogSettings {
            filter: build_filter(trace.unwrap_or("warn"))?,
            format: parse_format(format.unwrap_or("pretty"))?,
            file,
        })
    }
}

fn parse_format(value: &str) -> Result<LogFormat, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        _ => Err(CliError::Logging {
            reason: format!("{FORMAT_VAR} must be 'pretty' or 'json', got '{value}'"),
        }),
    }
}

fn build_filter(directives: &str) -> Result<EnvFilter, CliError> {
    if directives.eq_ignore_ascii_case("off") {
        return Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into()));
    }
    EnvFilter::try_new(directives).map_err(|err| CliError::Logging {
        reason: format!("{TRACE_VAR} '{directives}' is not a valid filter: {err}"),
    })
}

fn event_layer<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi);
    match format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Install the global subscriber from the environment.
///
/// Returns `false` if a subscriber was already installed.
pub fn init() -> Result<bool, CliError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }
    let settings = LogSettings::from_env()?;

    let mut layers = vec![event_layer(settings.format, io::stderr, true)];
    if let Some(path) = &settings.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| CliError::Logging {
                reason: format!("cannot open {}: {err}", path.display()),
            })?;
        layers.push(event_layer(settings.format, Mutex::new(file), false));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(settings.filter)
        .try_init()
        .map_err(|err| CliError::Logging {
            reason: format!("cannot install subscriber: {err}"),
        })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variables_give_defaults() {
        let settings = LogSettings::from_values(None, None, None).unwrap();
        assert_eq!(settings.format, LogFormat::Pretty);
        assert!(settings.file.is_none());
        assert_eq!(settings.filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn format_names_are_case_insensitive() {
        let settings = LogSettings::from_values(Some("debug"), Some("JSON"), None).unwrap();
        assert_eq!(settings.format, LogFormat::Json);

        let err = LogSettings::from_values(None, Some("xml"), None).unwrap_err();
        assert_eq!(err.code(), "CLI_LOGGING");
        assert!(err.to_string().contains("GRAPHILP_LOG_FORMAT"));
    }

    #[test]
    fn filter_accepts_levels_and_directives() {
        assert!(build_filter("off").is_ok());
        assert!(build_filter("graphilp_highs=trace,warn").is_ok());
        let err = build_filter("graphilp=notalevel").unwrap_err();
        assert!(err.to_string().contains("GRAPHILP_TRACE"));
    }

    #[test]
    fn file_path_is_kept() {
        let settings =
            LogSettings::from_values(None, None, Some(PathBuf::from("run.log"))).unwrap();
        assert_eq!(settings.file, Some(PathBuf::from("run.log")));
    }
}
