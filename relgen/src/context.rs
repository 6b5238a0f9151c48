// SPDX-License-Identifier: GPL-3.0-or-later

//! Provides the values templates can reference.

use std::path::Path;

use serde::Serialize;
use tera::Context;

/// Values available to a template.
///
/// Available as `{{ cwd }}` inside a template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateContext {
    /// Base name of the working directory, usually the project name.
    pub cwd: String,
}

impl TemplateContext {
    /// Builds the context for a working directory.
    ///
    /// A path without a final component (such as `/`) yields an empty `cwd`.
    pub fn from_dir(workdir: &Path) -> Self {
        let cwd = workdir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { cwd }
    }

    /// Converts into a [`tera::Context`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_tera(&self) -> tera::Result<Context> {
        Context::from_serialize(self)
    }
}
