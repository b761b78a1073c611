//! The JSON document Chart.js consumes.
//!
//! These types serialize to exactly the object passed to `new Chart(ctx, ...)`
//! and parse it back, so encoded charts can be inspected or re-loaded.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartType, DatasetStyle, Options};

/// One entry of a dataset's `data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointData {
    /// `{x, y, r}` coordinates for point charts.
    Point(Point),
    /// A label-aligned value; `None` encodes as `null` and renders as a gap.
    Value(Option<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub data: Vec<PointData>,
    #[serde(flatten)]
    pub style: DatasetStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<DatasetConfig>,
}

/// Top-level `{type, data, options}` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub options: Options,
}

impl ChartConfig {
    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.options.scales.len()
    }

    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.data.datasets.len()
    }
}
