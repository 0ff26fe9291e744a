//! The `list` subcommand: enumerate templates in the template directory.

use declgen::TemplateEngine;

use crate::cli_config::{expand_path, CliConfig};
use crate::output;

pub(crate) fn handle_list_command(config: &CliConfig, template_dir: Option<&str>) {
    let dir = template_dir
        .or(config.template_dir.as_deref())
        .unwrap_or("templates");

    let engine = TemplateEngine::new(expand_path(dir));
    let templates = match engine.available() {
        Ok(t) => t,
        Err(e) => {
            output::error(format!("Failed to list templates: {e}"));
            std::process::exit(1);
        }
    };

    if templates.is_empty() {
        output::warning("No templates found.");
        output::hint(format!("Add template files to {dir} or pass --template-dir."));
        return;
    }

    output::header("Available templates:");
    for name in &templates {
        output::item(name);
    }
    output::blank();
}
