use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "chartjs")]
#[command(author, version, about = "Render chart descriptions to Chart.js pages and configs")]
#[command(long_about = "Turns JSON or TOML chart descriptions into Chart.js configuration \
    objects or standalone HTML pages.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Charts failed validation\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a chart description to HTML or JSON
    Render(RenderArgs),

    /// Check a chart description without rendering it
    Validate(ValidateArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Chart description (.json or .toml)
    pub input: PathBuf,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format [possible values: html, json] (default: from output extension, else html)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Custom HTML template (overrides config)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Page title (overrides document and config)
    #[arg(long)]
    pub title: Option<String>,

    /// Chart.js script URL (overrides config)
    #[arg(long)]
    pub library_url: Option<String>,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl RenderArgs {
    /// The requested format, falling back to the output file's extension.
    #[must_use]
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_else(|| {
            self.output
                .as_deref()
                .and_then(|path| path.extension())
                .and_then(|ext| ext.to_str())
                .and_then(|ext| ext.parse().ok())
                .unwrap_or_default()
        })
    }
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Chart description (.json or .toml)
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
