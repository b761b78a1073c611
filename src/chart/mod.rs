//! Chart object model.
//!
//! A [`Chart`] accumulates datasets and axes through an append-only API and is
//! then handed to a formatter in [`crate::output`].

mod axis;
mod dataset;
mod options;

use std::fmt;
use std::io::Write;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

pub use axis::{Axes, Axis, AxisKind, AxisType, GridLines, Position, ScaleLabel, Ticks};
pub use dataset::{Dataset, DatasetStyle, InterpolationMode, PointStyle};
pub use options::{Legend, Options, Title, Tooltips};

use crate::error::{ChartError, Result};
use crate::output::{ChartFormatter, HtmlFormatter, JsonFormatter};

/// Chart kinds, named as the renderer names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    HorizontalBar,
    Radar,
    Pie,
    Doughnut,
    PolarArea,
    Bubble,
    Scatter,
}

impl ChartType {
    /// Types whose data are `{x, y, r}` points rather than label-aligned values.
    #[must_use]
    pub const fn uses_points(self) -> bool {
        matches!(self, Self::Bubble | Self::Scatter)
    }

    /// Types that also take `{x, y}` points when there are no category
    /// labels. Bars, radar and the circular types only draw label-aligned values.
    #[must_use]
    pub const fn accepts_xy_points(self) -> bool {
        matches!(self, Self::Line) || self.uses_points()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::HorizontalBar => "horizontalBar",
            Self::Radar => "radar",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::PolarArea => "polarArea",
            Self::Bubble => "bubble",
            Self::Scatter => "scatter",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            "horizontalbar" | "horizontal-bar" => Ok(Self::HorizontalBar),
            "radar" => Ok(Self::Radar),
            "pie" => Ok(Self::Pie),
            "doughnut" => Ok(Self::Doughnut),
            "polararea" | "polar-area" => Ok(Self::PolarArea),
            "bubble" => Ok(Self::Bubble),
            "scatter" => Ok(Self::Scatter),
            _ => Err(ChartError::Configuration(format!("Unknown chart type: {s}"))),
        }
    }
}

/// Category labels and datasets, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Data<'a> {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset<'a>>,
}

/// A renderable chart.
#[derive(Debug, Clone, Default)]
pub struct Chart<'a> {
    pub chart_type: ChartType,
    /// Shown next to the canvas in HTML output; not part of the encoded chart.
    pub label: Option<String>,
    pub data: Data<'a>,
    pub options: Options,
}

impl<'a> Chart<'a> {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a dataset. Axis references are not checked here; see [`Chart::validate`].
    pub fn add_dataset(&mut self, dataset: Dataset<'a>) {
        debug!(
            "Adding dataset {} ({} points)",
            self.data.datasets.len(),
            dataset.data.len()
        );
        self.data.datasets.push(dataset);
    }

    /// Registers an X axis and returns its id (`x-axis-<n>`).
    pub fn add_x_axis(&mut self, axis: Axis) -> String {
        self.add_axis(AxisKind::X, axis)
    }

    /// Registers a Y axis and returns its id (`y-axis-<n>`).
    pub fn add_y_axis(&mut self, axis: Axis) -> String {
        self.add_axis(AxisKind::Y, axis)
    }

    fn add_axis(&mut self, kind: AxisKind, axis: Axis) -> String {
        let id = self.options.scales.push(kind, axis);
        debug!("Registered axis {id}");
        id
    }

    #[must_use]
    pub fn axes(&self) -> &Axes {
        &self.options.scales
    }

    /// Eagerly checks what serialization tolerates: dangling axis ids and
    /// series whose sequences differ in length.
    ///
    /// # Errors
    /// Returns the first `UnknownAxis` or `SeriesLength` problem found.
    pub fn validate(&self) -> Result<()> {
        for (index, dataset) in self.data.datasets.iter().enumerate() {
            let ids = [&dataset.style.x_axis_id, &dataset.style.y_axis_id];
            for id in ids.into_iter().flatten() {
                if !self.options.scales.contains(id) {
                    return Err(ChartError::UnknownAxis {
                        dataset: index,
                        axis_id: id.clone(),
                    });
                }
            }
            check_series_lengths(index, dataset)?;
        }
        Ok(())
    }

    /// Encodes the chart as compact JSON.
    ///
    /// # Errors
    /// Returns an encoding error for non-finite style or axis values.
    pub fn to_json(&self) -> Result<String> {
        JsonFormatter::new().format(self)
    }

    /// Encodes the chart as indented JSON.
    ///
    /// # Errors
    /// Returns an encoding error for non-finite style or axis values.
    pub fn to_json_pretty(&self) -> Result<String> {
        JsonFormatter::new().pretty(true).format(self)
    }

    /// Writes a standalone HTML page with the default template.
    ///
    /// # Errors
    /// Returns an encoding error, or an IO error if the writer fails.
    pub fn write_html<W: Write>(&self, writer: W) -> Result<()> {
        HtmlFormatter::new().write_to(&[self], writer)
    }

    /// Saves a standalone HTML page to `path`.
    ///
    /// # Errors
    /// Returns an encoding error, or a write error if the file cannot be created.
    pub fn save_html(&self, path: &Path) -> Result<()> {
        HtmlFormatter::new().save(&[self], path)
    }
}

fn check_series_lengths(index: usize, dataset: &Dataset<'_>) -> Result<()> {
    let expected = dataset.data.xs().len();
    let others = [("y", dataset.data.ys()), ("r", dataset.data.rs())];
    for (series, values) in others {
        let actual = values.map_or(expected, <[f64]>::len);
        if actual != expected {
            return Err(ChartError::SeriesLength {
                dataset: index,
                series,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
