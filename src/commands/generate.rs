//! The `generate` subcommand: render a template and write the result.

use std::collections::HashMap;

use declgen::{generate, GenerateConfig};

use crate::cli_config::{expand_path, CliConfig};
use crate::output;

pub(crate) fn handle_generate_command(
    config: &CliConfig,
    template: Option<&str>,
    template_dir: Option<&str>,
    output_dir: Option<&str>,
    var_args: &[String],
) {
    let template = match template.or(config.template.as_deref()) {
        Some(t) => t.to_string(),
        None => {
            output::error("No template specified.");
            output::hint("Pass a template name or set `template` in .declgen.toml.");
            std::process::exit(1);
        }
    };

    let template_dir = template_dir
        .or(config.template_dir.as_deref())
        .unwrap_or("templates");
    let output_dir = output_dir.or(config.output_dir.as_deref()).unwrap_or(".");

    // Config vars first, then --var overrides key-by-key.
    let mut vars = config.vars.clone();
    match parse_vars(var_args) {
        Ok(cli_vars) => vars.extend(cli_vars),
        Err(msg) => {
            output::error(msg);
            std::process::exit(1);
        }
    }

    let request = GenerateConfig {
        template,
        template_dir: expand_path(template_dir),
        output_dir: expand_path(output_dir),
        vars,
    };

    match generate(&request) {
        Ok(path) => output::success(format!("Created: {}", path.display())),
        Err(e) => {
            output::error(format!("Generation failed: {e}"));
            std::process::exit(1);
        }
    }
}

/// Parse `KEY=VALUE` pairs from repeated `--var` flags.
fn parse_vars(args: &[String]) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("invalid variable format: '{arg}'. Expected KEY=VALUE"))?;
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}
