// SPDX-License-Identifier: GPL-3.0-or-later

//! Builds the structured logger used for a run.
//!
//! The logger is returned as a [`Dispatch`] instead of being installed globally, so the caller
//! decides its scope, usually with [`tracing::dispatcher::with_default`].

use std::{
    io::{self, IsTerminal},
    str::FromStr,
};

use thiserror::Error;
use tracing::Dispatch;
use tracing_subscriber::{fmt::MakeWriter, FmtSubscriber};

/// Errors that may occur when configuring the logger.
#[derive(Error, Debug)]
pub enum LogError {
    /// Occurs when the requested log level or log format is not recognized.
    #[error("invalid log {field}: '{value}' (expected one of: {expected})")]
    InvalidConfiguration {
        /// Which option was invalid, "level" or "format".
        field: &'static str,

        /// The rejected value, as provided.
        value: String,

        /// The accepted values, for the error message.
        expected: &'static str,
    },
}

/// Log levels accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Corresponds to `tracing::Level::DEBUG`.
    Debug,

    /// Corresponds to `tracing::Level::INFO`.
    Info,

    /// Corresponds to `tracing::Level::WARN`.
    Warn,

    /// Corresponds to `tracing::Level::ERROR`.
    Error,
}

impl LogLevel {
    /// Converts the [`LogLevel`] to the corresponding [`tracing::Level`].
    pub fn as_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LogError::InvalidConfiguration {
                field: "level",
                value: s.into(),
                expected: "debug, info, warn, error",
            }),
        }
    }
}

/// Output formats for log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines.
    Text,

    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(LogError::InvalidConfiguration {
                field: "format",
                value: s.into(),
                expected: "text, json",
            }),
        }
    }
}

/// Builds a logger that writes to stderr.
///
/// # Arguments
///
/// * `level` - Maximum level to emit, one of `debug`, `info`, `warn`, `error`.
/// * `format` - Either `text` or `json`.
///
/// # Errors
///
/// Returns [`LogError::InvalidConfiguration`] if either string is not recognized.
pub fn logger(level: &str, format: &str) -> Result<Dispatch, LogError> {
    build(level, format, io::stderr, io::stderr().is_terminal())
}

/// Builds a logger that writes uncolored lines to the provided writer. See [`logger`].
///
/// # Errors
///
/// Returns [`LogError::InvalidConfiguration`] if either string is not recognized.
pub fn logger_with_writer<W>(level: &str, format: &str, writer: W) -> Result<Dispatch, LogError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    build(level, format, writer, false)
}

/// Validates the options and builds the subscriber. `ansi` only affects the text format.
fn build<W>(level: &str, format: &str, writer: W, ansi: bool) -> Result<Dispatch, LogError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let level = level.parse::<LogLevel>()?;
    let format = format.parse::<LogFormat>()?;

    let builder = FmtSubscriber::builder()
        .with_writer(writer)
        .with_max_level(level.as_tracing_level());

    let dispatch = match format {
        LogFormat::Text => Dispatch::new(builder.with_ansi(ansi).with_target(false).finish()),
        LogFormat::Json => Dispatch::new(builder.json().finish()),
    };
    Ok(dispatch)
}

/// The logger used when the requested configuration is invalid: text at info level, to stderr.
pub fn fallback() -> Dispatch {
    Dispatch::new(
        FmtSubscriber::builder()
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_target(false)
            .finish(),
    )
}

/// A logger that discards everything.
///
/// The options are still validated, so a bad level or format fails the same way with or
/// without logging.
///
/// # Errors
///
/// Returns [`LogError::InvalidConfiguration`] if either string is not recognized.
pub fn silent(level: &str, format: &str) -> Result<Dispatch, LogError> {
    level.parse::<LogLevel>()?;
    format.parse::<LogFormat>()?;
    Ok(Dispatch::none())
}
