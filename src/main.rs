//! `declgen`: render a template into a generated type-declaration file.

mod cli_config;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "declgen",
    version,
    about = "Template-driven generator for type declaration files",
    styles = output::clap_styles()
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template and write it into the output directory
    Generate {
        /// Template file name (defaults to `template` from .declgen.toml)
        template: Option<String>,

        /// Directory containing template files
        #[arg(long, value_name = "DIR")]
        template_dir: Option<String>,

        /// Existing directory the generated file is written into
        #[arg(long, value_name = "DIR")]
        output_dir: Option<String>,

        /// Substitution variable (repeatable)
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,
    },

    /// List templates available in the template directory
    List {
        /// Directory containing template files
        #[arg(long, value_name = "DIR")]
        template_dir: Option<String>,
    },
}

fn main() {
    // Diagnostics go to stderr so they never mix with generated output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli_config::load_cli_config();

    match cli.command {
        Commands::Generate {
            template,
            template_dir,
            output_dir,
            vars,
        } => commands::handle_generate_command(
            &config,
            template.as_deref(),
            template_dir.as_deref(),
            output_dir.as_deref(),
            &vars,
        ),
        Commands::List { template_dir } => {
            commands::handle_list_command(&config, template_dir.as_deref())
        }
    }
}
