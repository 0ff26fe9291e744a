//! The generation operation: resolve a template, render it, write the result
//! into the output directory.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::GenerateError;
use crate::template_engine::TemplateEngine;

/// Inputs for a single generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Template file name, resolved inside `template_dir`. Doubles as the
    /// output file name.
    pub template: String,

    /// Directory holding the template files.
    pub template_dir: PathBuf,

    /// Existing directory the rendered file is written into.
    pub output_dir: PathBuf,

    /// Substitution variables. Unused keys are ignored; referencing a
    /// missing key fails the render.
    pub vars: HashMap<String, String>,
}

/// Render `config.template` and write the result to
/// `config.output_dir/config.template`, truncating any existing file.
///
/// Returns the path written. The render must fully succeed before the
/// destination is touched, so lookup and render failures leave a
/// pre-existing destination intact. The write itself is not atomic; a
/// failure mid-write leaves whatever the underlying call produced.
pub fn generate(config: &GenerateConfig) -> Result<PathBuf, GenerateError> {
    let mut engine = TemplateEngine::new(&config.template_dir);
    let rendered = engine.render(&config.template, &config.vars)?;

    if !config.output_dir.is_dir() {
        return Err(GenerateError::OutputDir {
            dir: config.output_dir.clone(),
        });
    }

    let dest = config.output_dir.join(&config.template);
    std::fs::write(&dest, &rendered).map_err(|e| GenerateError::Write {
        path: dest.clone(),
        source: e,
    })?;

    tracing::debug!(path = %dest.display(), bytes = rendered.len(), "wrote generated file");

    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn workspace() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let temp = tempfile::tempdir().unwrap();
        let templates = temp.path().join("templates");
        let out = temp.path().join("out");
        fs::create_dir(&templates).unwrap();
        fs::create_dir(&out).unwrap();
        (temp, templates, out)
    }

    fn config(template: &str, templates: &Path, out: &Path) -> GenerateConfig {
        GenerateConfig {
            template: template.to_string(),
            template_dir: templates.to_path_buf(),
            output_dir: out.to_path_buf(),
            vars: HashMap::new(),
        }
    }

    #[test]
    fn test_generate_writes_rendered_file() {
        let (_temp, templates, out) = workspace();
        fs::write(templates.join("greet.txt"), "hello").unwrap();

        let written = generate(&config("greet.txt", &templates, &out)).unwrap();
        assert_eq!(written, out.join("greet.txt"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "hello");
    }

    #[test]
    fn test_generate_applies_vars() {
        let (_temp, templates, out) = workspace();
        fs::write(templates.join("mod.d.tl"), "return {{ name }}\n").unwrap();

        let mut cfg = config("mod.d.tl", &templates, &out);
        cfg.vars.insert("name".to_string(), "async".to_string());

        let written = generate(&cfg).unwrap();
        assert_eq!(fs::read_to_string(written).unwrap(), "return async\n");
    }

    #[test]
    fn test_generate_is_idempotent() {
        let (_temp, templates, out) = workspace();
        fs::write(templates.join("greet.txt"), "hello").unwrap();
        let cfg = config("greet.txt", &templates, &out);

        let first = generate(&cfg).unwrap();
        let first_content = fs::read_to_string(&first).unwrap();
        let second = generate(&cfg).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), first_content);
    }

    #[test]
    fn test_generate_truncates_existing_destination() {
        let (_temp, templates, out) = workspace();
        fs::write(templates.join("greet.txt"), "hi").unwrap();
        fs::write(out.join("greet.txt"), "much longer stale content").unwrap();

        generate(&config("greet.txt", &templates, &out)).unwrap();
        assert_eq!(fs::read_to_string(out.join("greet.txt")).unwrap(), "hi");
    }

    #[test]
    fn test_generate_missing_output_dir() {
        let (temp, templates, _out) = workspace();
        fs::write(templates.join("greet.txt"), "hello").unwrap();
        let missing = temp.path().join("nope");

        let err = generate(&config("greet.txt", &templates, &missing)).unwrap_err();
        assert!(matches!(err, GenerateError::OutputDir { .. }));
        assert!(!missing.join("greet.txt").exists());
    }

    #[test]
    fn test_generate_missing_template_leaves_destination_untouched() {
        let (_temp, templates, out) = workspace();
        fs::write(out.join("ghost.txt"), "stale").unwrap();

        let err = generate(&config("ghost.txt", &templates, &out)).unwrap_err();
        assert!(matches!(err, GenerateError::TemplateNotFound { .. }));
        assert_eq!(fs::read_to_string(out.join("ghost.txt")).unwrap(), "stale");
    }

    #[test]
    fn test_generate_render_failure_writes_nothing() {
        let (_temp, templates, out) = workspace();
        fs::write(templates.join("t.txt"), "Hello {{ who }}").unwrap();

        let err = generate(&config("t.txt", &templates, &out)).unwrap_err();
        assert!(matches!(err, GenerateError::Render { .. }));
        assert!(!out.join("t.txt").exists());
    }
}
