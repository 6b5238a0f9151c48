// SPDX-License-Identifier: GPL-3.0-or-later

//! Library for relgen-cli.
//! Create a release config file from a template, without overwriting an existing one.
//!
//! Templates are rendered with tera. The project name is `{{ cwd }}` (not Go's `{{ .Cwd }}`), and
//! text meant for GoReleaser's own templating, such as `{{ .Version }}`, goes inside
//! `{% raw %}...{% endraw %}`.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod context;
pub mod generator;
pub mod logging;
pub mod resources;
pub mod util;
