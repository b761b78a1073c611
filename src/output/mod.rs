mod html;
mod html_template;
mod json;
pub mod wire;

pub use html::HtmlFormatter;
pub use html_template::{DEFAULT_HEIGHT, DEFAULT_LIBRARY_URL, DEFAULT_TITLE, DEFAULT_WIDTH};
pub use json::{JsonFormatter, to_config};
pub use wire::{ChartConfig, DataConfig, DatasetConfig, Point, PointData};

use crate::chart::Chart;
use crate::error::Result;

/// Trait for turning a chart into a document in some output format.
pub trait ChartFormatter {
    /// Format the chart into a string.
    ///
    /// # Errors
    /// Returns an error if a value cannot be encoded.
    fn format(&self, chart: &Chart<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
