//! Chart descriptions read from JSON or TOML files.
//!
//! A document owns its numbers; [`ChartSpec::build`] produces a [`Chart`]
//! that borrows them, registering axes through the chart's own registry.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::{Axis, Chart, ChartType, Dataset, DatasetStyle, Options};
use crate::error::{ChartError, Result};
use crate::series::Values;

/// Input format of a document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Picks the format from the file extension; anything but `.toml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// One dataset: its numbers, axis indices, and styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSpec {
    #[serde(default)]
    pub x: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<Vec<f64>>,
    /// Index into the chart's `xAxes`; excludes an explicit `xAxisID`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<usize>,
    /// Index into the chart's `yAxes`; excludes an explicit `yAxisID`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<usize>,
    #[serde(flatten)]
    pub style: DatasetStyle,
}

impl Values for DatasetSpec {
    fn xs(&self) -> &[f64] {
        &self.x
    }

    fn ys(&self) -> Option<&[f64]> {
        self.y.as_deref()
    }

    fn rs(&self) -> Option<&[f64]> {
        self.r.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub x_axes: Vec<Axis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub y_axes: Vec<Axis>,
    #[serde(default)]
    pub datasets: Vec<DatasetSpec>,
    #[serde(default)]
    pub options: Options,
}

impl ChartSpec {
    /// Builds a chart borrowing this spec's series.
    ///
    /// Axes listed in `options.scales` are registered first, then `xAxes` and
    /// `yAxes`; dataset axis indices refer to the combined lists.
    ///
    /// # Errors
    /// Returns `ChartError::Configuration` when a dataset names an axis index
    /// that does not exist, or gives both an index and an explicit id for the
    /// same axis (`xAxis` with `xAxisID`, `yAxis` with `yAxisID`).
    pub fn build(&self) -> Result<Chart<'_>> {
        let mut options = self.options.clone();
        let preset = std::mem::take(&mut options.scales);

        let mut chart = Chart::new(self.chart_type).with_labels(self.labels.iter().cloned());
        chart.label.clone_from(&self.label);
        chart.options = options;

        let x_ids: Vec<String> = preset
            .x_axes
            .into_iter()
            .chain(self.x_axes.iter().cloned())
            .map(|axis| chart.add_x_axis(axis))
            .collect();
        let y_ids: Vec<String> = preset
            .y_axes
            .into_iter()
            .chain(self.y_axes.iter().cloned())
            .map(|axis| chart.add_y_axis(axis))
            .collect();

        for (index, spec) in self.datasets.iter().enumerate() {
            let mut dataset = Dataset::with_style(spec, spec.style.clone());
            if let Some(axis) = spec.x_axis {
                exclusive(spec.style.x_axis_id.is_some(), index, "xAxis")?;
                dataset.style.x_axis_id = Some(resolve_axis(&x_ids, axis, index, "xAxis")?);
            }
            if let Some(axis) = spec.y_axis {
                exclusive(spec.style.y_axis_id.is_some(), index, "yAxis")?;
                dataset.style.y_axis_id = Some(resolve_axis(&y_ids, axis, index, "yAxis")?);
            }
            chart.add_dataset(dataset);
        }

        Ok(chart)
    }
}

fn exclusive(has_id: bool, dataset: usize, field: &str) -> Result<()> {
    if has_id {
        return Err(ChartError::Configuration(format!(
            "Dataset {dataset}: set either {field} or {field}ID, not both"
        )));
    }
    Ok(())
}

fn resolve_axis(ids: &[String], axis: usize, dataset: usize, field: &str) -> Result<String> {
    ids.get(axis).cloned().ok_or_else(|| {
        ChartError::Configuration(format!(
            "Dataset {dataset}: {field} {axis} is out of range ({} defined)",
            ids.len()
        ))
    })
}

/// A file describing one or more charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Page title for HTML output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub charts: Vec<ChartSpec>,
}

impl Document {
    /// Parses document text in the given format.
    ///
    /// # Errors
    /// Returns a JSON or TOML parse error.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        let document = match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
        };
        Ok(document)
    }

    /// Reads and parses a document, choosing the format by extension.
    ///
    /// # Errors
    /// Returns `ChartError::FileRead` if the file cannot be read, or a parse error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ChartError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, DocumentFormat::from_path(path))
    }

    /// Builds every chart, in document order.
    ///
    /// # Errors
    /// Returns the first build error.
    pub fn build(&self) -> Result<Vec<Chart<'_>>> {
        self.charts.iter().map(ChartSpec::build).collect()
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
