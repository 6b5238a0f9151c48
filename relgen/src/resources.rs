// SPDX-License-Identifier: GPL-3.0-or-later

//! Loads the files a generation run reads from disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
    str,
};

use thiserror::Error;
use tracing::{event, Level};

/// Directory, relative to the working directory, that holds templates.
pub const TEMPLATE_DIR: &str = "templates";

/// Errors that may occur when loading a resource.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Occurs when the file is missing or cannot be read.
    #[error("failed to read resource: {} ({source})", .path.display())]
    Read {
        /// The file that failed to load.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Occurs when the file is not valid UTF-8.
    #[error("UTF-8 conversion failed for resource: {}", .path.display())]
    Utf8 {
        /// The file that failed to decode.
        path: PathBuf,

        /// The underlying decoding error.
        #[source]
        source: str::Utf8Error,
    },
}

/// External files used to generate the output.
#[derive(Debug, Clone)]
pub struct Resources {
    /// The template to render.
    pub template: PathBuf,
}

impl Resources {
    /// Resources at their default locations below `workdir`, where the template shares the name
    /// of the file it produces.
    pub fn in_dir(workdir: &Path, output_name: &str) -> Self {
        Self {
            template: workdir.join(TEMPLATE_DIR).join(output_name),
        }
    }

    /// Reads the whole template.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not UTF-8.
    pub fn template(&self) -> Result<String, ResourceError> {
        let src = fs::read(&self.template).map_err(|source| ResourceError::Read {
            path: self.template.clone(),
            source,
        })?;
        let src = utf8(src, &self.template)?;
        event!(Level::DEBUG, bytes = src.len(), "read template");
        Ok(src)
    }
}

fn utf8(v: Vec<u8>, path: &Path) -> Result<String, ResourceError> {
    String::from_utf8(v).map_err(|e| ResourceError::Utf8 {
        path: path.to_path_buf(),
        source: e.utf8_error(),
    })
}
