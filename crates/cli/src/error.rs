// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The snapshot file could not be read.
    #[error("Failed to read snapshot '{}': {source}", path.display())]
    ReadSnapshot {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The roster rejected a command or a snapshot.
    #[error(transparent)]
    Core(#[from] CoreError),
    /// No teacher has the requested id.
    #[error("No teacher with id '{0}'")]
    TeacherNotFound(String),
    /// Writing the rendered view failed.
    #[error("Failed to render output")]
    Render(#[from] std::fmt::Error),
}
