use std::fs;

use crate::{ChartError, EXIT_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ChartError::Configuration(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        ChartError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# chartjs configuration file
# Command-line flags override everything here.

[html]
# Page title; a document's own "title" takes precedence (default: "Chart")
title = "Chart"

# Where the generated page loads Chart.js from. Charts are encoded for the
# 2.x option layout (scales.xAxes / scales.yAxes).
library_url = "https://cdnjs.cloudflare.com/ajax/libs/Chart.js/2.9.4/Chart.min.js"

# Canvas size in pixels
width = 800
height = 400

# Custom page template. Placeholders: {{title}}, {{library_url}},
# {{width}}, {{height}}, {{charts}} (every chart) and {{chart}} (JSON of a
# single chart). The template must contain {{charts}} or {{chart}}, and a
# template with only {{chart}} rejects documents holding several charts.
# template = "chart-template.html"

[json]
# Indent JSON output (default: false)
pretty = false
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
