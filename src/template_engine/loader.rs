//! Template resolution against the template directory.

use std::path::{Path, PathBuf};

use crate::error::GenerateError;

/// Resolve a template name to a file path inside `template_dir`.
///
/// A template name is a bare file name: empty names and names containing a
/// path separator cannot identify a file directly inside the directory and
/// resolve to [`GenerateError::TemplateNotFound`].
pub(crate) fn resolve_template(template_dir: &Path, name: &str) -> Result<PathBuf, GenerateError> {
    let not_found = || GenerateError::TemplateNotFound {
        name: name.to_string(),
        dir: template_dir.to_path_buf(),
    };

    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return Err(not_found());
    }

    let path = template_dir.join(name);
    if !path.is_file() {
        return Err(not_found());
    }
    Ok(path)
}

/// List the template file names available in `template_dir`, sorted.
///
/// Only top-level regular files count; template names cannot address nested
/// entries.
pub(crate) fn list_templates(template_dir: &Path) -> Result<Vec<String>, GenerateError> {
    let read_err = |source| GenerateError::TemplateDir {
        dir: template_dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(template_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}
