// SPDX-License-Identifier: GPL-3.0-or-later

//! Manages the full generation process.

use std::{env, io, path::PathBuf, time::Instant};

use tera::Tera;
use thiserror::Error;
use tracing::{debug, error, info, span, Level};

use crate::{
    context::TemplateContext,
    resources::{ResourceError, Resources},
    util::{self, describe},
};

/// Name of the generated file, and of the template it is rendered from.
pub const OUTPUT_FILE: &str = ".goreleaser.yaml";

/// Name the template is registered under in tera.
const TEMPLATE_NAME: &str = "release-config";

/// Errors that may occur when generating the release config.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Occurs when the process working directory cannot be determined.
    #[error("failed to determine working directory ({0})")]
    WorkingDirectory(#[source] io::Error),

    /// Occurs when the template file is missing or unreadable.
    #[error("failed to load template ({0})")]
    TemplateRead(#[from] ResourceError),

    /// Occurs when the template has invalid syntax.
    #[error("failed to parse template ({})", describe(.0))]
    TemplateParse(#[source] tera::Error),

    /// Occurs when rendering the parsed template fails, e.g. on an undefined variable.
    #[error("failed to render template ({})", describe(.0))]
    TemplateRender(#[source] tera::Error),

    /// Occurs when the output file cannot be created or written.
    #[error("failed to write output: {} ({source})", .path.display())]
    OutputWrite {
        /// The output file.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The output already existed and was left alone.
    Skipped,

    /// The output was rendered and written.
    Written,
}

/// Renders a template into the output file unless the output already exists.
#[derive(Debug, Clone)]
pub struct Generator {
    /// External files read while generating.
    pub resources: Resources,

    /// Where to write the rendered template.
    pub output: PathBuf,

    /// Directory whose name is exposed to the template as `cwd`.
    pub workdir: PathBuf,
}

impl Generator {
    /// A generator using the default template and output paths below `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        let workdir = workdir.into();
        Self {
            resources: Resources::in_dir(&workdir, OUTPUT_FILE),
            output: workdir.join(OUTPUT_FILE),
            workdir,
        }
    }

    /// A generator using the default paths below the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn in_current_dir() -> Result<Self, GenerateError> {
        let workdir = env::current_dir().map_err(|e| {
            error!(error = %e, "failed to determine working directory");
            GenerateError::WorkingDirectory(e)
        })?;
        Ok(Self::new(workdir))
    }

    /// Generates the output file.
    ///
    /// Returns [`Outcome::Skipped`] without touching anything if the output already exists.
    /// Otherwise the output is only created once the template has rendered successfully, and
    /// it is written in one piece.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, parsing, or rendering the template fails, or if the output
    /// cannot be written. Each error is logged before it is returned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use relgen::generator::{Generator, Outcome};
    ///
    /// let outcome = Generator::new("/home/me/src/myproj").generate()?;
    /// assert_eq!(outcome, Outcome::Written);
    /// # Ok::<(), relgen::generator::GenerateError>(())
    /// ```
    pub fn generate(&self) -> Result<Outcome, GenerateError> {
        let _span = span!(Level::INFO, "generate").entered();
        let sw = Instant::now();

        if self.output.exists() {
            info!(
                file = %self.output.display(),
                "file exists, quitting early to prevent overwriting"
            );
            return Ok(Outcome::Skipped);
        }

        let src = self.resources.template().map_err(|e| {
            error!(error = %describe(&e), "failed to read template");
            GenerateError::TemplateRead(e)
        })?;

        let rendered = self.render(&src)?;

        util::write_atomic(&self.output, rendered.as_bytes()).map_err(|source| {
            error!(
                file = %self.output.display(),
                error = %source,
                "failed to write output"
            );
            GenerateError::OutputWrite {
                path: self.output.clone(),
                source,
            }
        })?;

        info!(file = %self.output.display(), "wrote release config");
        debug!(
            elapsed_ms = sw.elapsed().as_millis(),
            "finished generating"
        );
        Ok(Outcome::Written)
    }

    /// Parses and renders the template source.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TemplateParse`] if the source is not a valid template, and
    /// [`GenerateError::TemplateRender`] if rendering fails.
    fn render(&self, src: &str) -> Result<String, GenerateError> {
        let _span = span!(Level::INFO, "render").entered();

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, src).map_err(|e| {
            error!(error = %describe(&e), "failed to parse template");
            GenerateError::TemplateParse(e)
        })?;

        let ctx = TemplateContext::from_dir(&self.workdir);
        debug!(cwd = ctx.cwd.as_str(), "built template context");

        ctx.to_tera()
            .and_then(|context| tera.render(TEMPLATE_NAME, &context))
            .map_err(|e| {
                error!(error = %describe(&e), "failed to render template");
                GenerateError::TemplateRender(e)
            })
    }
}
