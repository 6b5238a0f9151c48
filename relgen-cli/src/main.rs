// SPDX-License-Identifier: GPL-3.0-or-later

//! Command line interface for relgen.
//! Create a `.goreleaser.yaml` from `templates/.goreleaser.yaml` unless one already exists.
//!
//! Templates use tera syntax: write `{{ cwd }}` where a Go template would use `{{ .Cwd }}`.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

mod args;

use args::Args;
use relgen::{
    generator::{GenerateError, Generator, Outcome},
    logging,
};

use clap::Parser;
use tracing::{dispatcher, error};

use std::process;

fn main() {
    let args = Args::parse();

    let dispatch = if args.silent {
        logging::silent(&args.log_level, &args.log_format)
    } else {
        logging::logger(&args.log_level, &args.log_format)
    };
    let dispatch = match dispatch {
        Ok(dispatch) => dispatch,
        Err(e) => {
            dispatcher::with_default(&logging::fallback(), || {
                error!(error = %e, "failed to configure logger");
            });
            process::exit(1);
        }
    };

    let result = dispatcher::with_default(&dispatch, || generate(&args));
    if let Err(e) = result {
        dispatcher::with_default(&dispatch, || {
            error!(error = %e, "generation failed");
        });
        process::exit(1);
    }
}

/// Generates in the working directory, applying any path overrides.
fn generate(args: &Args) -> Result<Outcome, GenerateError> {
    let mut gen = Generator::in_current_dir()?;
    if let Some(template) = &args.template {
        gen.resources.template = template.clone();
    }
    if let Some(output) = &args.output {
        gen.output = output.clone();
    }
    gen.generate()
}
