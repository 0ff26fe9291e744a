//! Template-driven generation of Teal type-declaration files.
//!
//! `declgen` resolves a named template inside a template directory, renders it
//! with Tera against a set of substitution variables, and writes the result to
//! `<output_dir>/<template_name>`. This crate is the library core; the
//! `declgen` binary layers a CLI and config-file discovery on top.
//!
//! # Modules
//!
//! - [`error`] — the [`GenerateError`] taxonomy
//! - [`generator`] — the [`generate`] operation and its [`GenerateConfig`]
//! - [`template_engine`] — Tera wrapper with case-conversion filters

pub mod error;
pub mod generator;
pub mod template_engine;

pub use error::GenerateError;
pub use generator::{generate, GenerateConfig};
pub use template_engine::TemplateEngine;
