//! Tera-based rendering bound to a template directory.

use std::collections::HashMap;
use std::path::PathBuf;

use tera::{Context, Tera};

use super::{filters, loader};
use crate::error::GenerateError;

/// Template engine for a single template directory.
///
/// Templates are loaded on demand: [`render`](Self::render) registers only
/// the requested file with Tera, so a syntax error in one template cannot
/// fail generation from another.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
    template_dir: PathBuf,
}

impl TemplateEngine {
    /// Create an engine for the given template directory, with the case
    /// filters registered.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        let mut tera = Tera::default();
        filters::register(&mut tera);
        Self {
            tera,
            template_dir: template_dir.into(),
        }
    }

    /// Render the named template with the given variables.
    ///
    /// Unused variables are ignored. Referencing a variable that is not in
    /// the map fails the render: Tera's strict undefined-variable behavior
    /// is adopted unmodified.
    pub fn render(
        &mut self,
        name: &str,
        vars: &HashMap<String, String>,
    ) -> Result<String, GenerateError> {
        let path = loader::resolve_template(&self.template_dir, name)?;

        // Parse errors in the template file surface here, before rendering.
        self.tera
            .add_template_file(&path, Some(name))
            .map_err(|e| GenerateError::Render {
                template: name.to_string(),
                source: e,
            })?;

        let mut context = Context::new();
        for (key, value) in vars {
            context.insert(key, value);
        }

        tracing::debug!(template = name, path = %path.display(), "rendering template");

        self.tera
            .render(name, &context)
            .map_err(|e| GenerateError::Render {
                template: name.to_string(),
                source: e,
            })
    }

    /// Template file names available in the template directory, sorted.
    pub fn available(&self) -> Result<Vec<String>, GenerateError> {
        loader::list_templates(&self.template_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn engine_with(files: &[(&str, &str)]) -> (tempfile::TempDir, TemplateEngine) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let engine = TemplateEngine::new(dir.path());
        (dir, engine)
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_literal_template() {
        let (_dir, mut engine) = engine_with(&[("greet.txt", "hello")]);

        let out = engine.render("greet.txt", &HashMap::new()).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_render_substitutes_vars() {
        let (_dir, mut engine) = engine_with(&[(
            "decl.d.tl",
            "local record {{ module | pascal_case }}\nend\n\nreturn {{ module }}\n",
        )]);

        let out = engine
            .render("decl.d.tl", &vars(&[("module", "plenary_async")]))
            .unwrap();
        assert_eq!(
            out,
            "local record PlenaryAsync\nend\n\nreturn plenary_async\n"
        );
    }

    #[test]
    fn test_unused_vars_are_ignored() {
        let (_dir, mut engine) = engine_with(&[("t.txt", "static")]);

        let out = engine
            .render("t.txt", &vars(&[("unused", "value")]))
            .unwrap();
        assert_eq!(out, "static");
    }

    #[test]
    fn test_missing_template() {
        let (_dir, mut engine) = engine_with(&[]);

        let err = engine.render("ghost.d.tl", &HashMap::new()).unwrap_err();
        assert!(matches!(err, GenerateError::TemplateNotFound { .. }));
    }

    #[test]
    fn test_undefined_variable_fails_render() {
        // Pins the undefined-variable policy: strict, no silent empty output.
        let (_dir, mut engine) = engine_with(&[("t.txt", "Hello {{ who }}")]);

        let err = engine.render("t.txt", &HashMap::new()).unwrap_err();
        assert!(matches!(err, GenerateError::Render { .. }));
    }

    #[test]
    fn test_template_syntax_error() {
        let (_dir, mut engine) = engine_with(&[("bad.txt", "{% if %}")]);

        let err = engine.render("bad.txt", &HashMap::new()).unwrap_err();
        assert!(matches!(err, GenerateError::Render { .. }));
    }

    #[test]
    fn test_broken_sibling_template_does_not_interfere() {
        let (_dir, mut engine) = engine_with(&[("bad.txt", "{% if %}"), ("good.txt", "ok")]);

        let out = engine.render("good.txt", &HashMap::new()).unwrap();
        assert_eq!(out, "ok");
    }

    #[test]
    fn test_available_lists_templates() {
        let (_dir, engine) = engine_with(&[("b.d.tl", ""), ("a.d.tl", "")]);

        assert_eq!(engine.available().unwrap(), vec!["a.d.tl", "b.d.tl"]);
    }
}
