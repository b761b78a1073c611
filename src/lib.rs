//! Chart.js configuration builder.
//!
//! Build a [`Chart`] from datasets that borrow caller-owned series, register
//! axes, and encode the result as Chart.js JSON or a standalone HTML page.

pub mod chart;
pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod series;

pub use chart::{Axis, AxisType, Chart, ChartType, Dataset, DatasetStyle, Options, Position};
pub use color::Rgba;
pub use error::{ChartError, Result};
pub use output::{ChartFormatter, HtmlFormatter, JsonFormatter, OutputFormat};
pub use series::{Series, Values};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
