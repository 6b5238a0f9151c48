// SPDX-License-Identifier: GPL-3.0-or-later

//! Defines command line arguments by providing the `[Args]` struct.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Defines command line arguments.
///
/// The log level and format are kept as strings; [`relgen::logging::logger`] validates them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("logging")
        .args(["log_level", "silent"])
))]
pub(crate) struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub log_format: String,

    /// Disable all logging
    #[arg(short, long)]
    pub silent: bool,

    /// Override the default template, templates/.goreleaser.yaml
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Override the default output file, .goreleaser.yaml
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["relgen"]).unwrap();
        assert_eq!(args.log_level, "info");
        assert_eq!(args.log_format, "text");
        assert!(!args.silent);
        assert!(args.template.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn unknown_values_are_kept() {
        let args =
            Args::try_parse_from(["relgen", "--log-level", "verbose", "--log-format", "xml"])
                .unwrap();
        assert_eq!(args.log_level, "verbose");
        assert_eq!(args.log_format, "xml");
    }

    #[test]
    fn silent_conflicts_with_level() {
        assert!(Args::try_parse_from(["relgen", "-s", "--log-level", "debug"]).is_err());
    }

    #[test]
    fn path_overrides() {
        let args =
            Args::try_parse_from(["relgen", "--template", "t.yaml", "-o", "out.yaml"]).unwrap();
        assert_eq!(args.template, Some(PathBuf::from("t.yaml")));
        assert_eq!(args.output, Some(PathBuf::from("out.yaml")));
    }
}
