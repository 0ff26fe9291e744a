//! Error taxonomy for the generation pipeline.

use std::path::PathBuf;

/// Errors produced while resolving, rendering, or writing a template.
///
/// Nothing in the lookup → render → write chain is retried or handled
/// locally; every variant aborts the invocation and surfaces to the caller.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The named template does not exist in the template directory.
    #[error("template '{name}' not found in {dir}")]
    TemplateNotFound { name: String, dir: PathBuf },

    /// The template directory could not be read.
    #[error("failed to read template directory {dir}: {source}")]
    TemplateDir {
        dir: PathBuf,
        source: std::io::Error,
    },

    /// Tera failed to parse or render the template. Undefined variable
    /// references land here; rendering is strict.
    #[error("failed to render '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },

    /// The output directory does not exist or is not a directory.
    #[error("output directory {dir} does not exist")]
    OutputDir { dir: PathBuf },

    /// The rendered output could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
