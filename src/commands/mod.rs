pub mod init;
pub mod render;
pub mod validate;

use std::path::Path;

use crate::Result;
use crate::config::{Config, ConfigLoader, FileConfigLoader};

pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{run_render, run_render_impl};
pub use validate::{ValidationReport, run_validate, run_validate_impl, validate_document};

/// Loads configuration unless `--no-config` was given.
///
/// # Errors
/// Returns an error if the explicit or discovered config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
