//! One data series plus its styling.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ChartType;
use crate::color::Rgba;
use crate::series::Values;

/// Marker shape for line/scatter points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointStyle {
    Circle,
    Triangle,
    Rect,
    RectRounded,
    RectRot,
    Cross,
    CrossRot,
    Star,
    Line,
    Dash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    Default,
    Monotone,
}

/// Styling attributes of a dataset.
///
/// Every field is optional. Unset fields are left out of the encoded chart so
/// the renderer applies its own defaults; `fill: Some(false)` and an absent
/// `fill` render differently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStyle {
    /// Overrides the chart type for this dataset (mixed charts).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub dataset_type: Option<ChartType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_hit_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_style: Option<PointStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_gaps: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stepped_line: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cubic_interpolation_mode: Option<InterpolationMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(rename = "xAxisID", default, skip_serializing_if = "Option::is_none")]
    pub x_axis_id: Option<String>,
    #[serde(rename = "yAxisID", default, skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

impl DatasetStyle {
    /// Numeric fields with their wire names, for finiteness checks.
    pub(crate) fn numeric_fields(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("borderWidth", self.border_width),
            ("lineTension", self.line_tension),
            ("pointBorderWidth", self.point_border_width),
            ("pointRadius", self.point_radius),
            ("pointHitRadius", self.point_hit_radius),
            ("pointHoverRadius", self.point_hover_radius),
        ]
    }
}

/// A series borrowed from the caller, plus styling.
///
/// The numbers stay with the caller; the chart only holds the reference.
#[derive(Clone)]
pub struct Dataset<'a> {
    pub data: &'a dyn Values,
    pub style: DatasetStyle,
}

impl<'a> Dataset<'a> {
    #[must_use]
    pub fn new(data: &'a dyn Values) -> Self {
        Self {
            data,
            style: DatasetStyle::default(),
        }
    }

    #[must_use]
    pub const fn with_style(data: &'a dyn Values, style: DatasetStyle) -> Self {
        Self { data, style }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.style.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn with_type(mut self, chart_type: ChartType) -> Self {
        self.style.dataset_type = Some(chart_type);
        self
    }

    #[must_use]
    pub const fn with_background_color(mut self, color: Rgba) -> Self {
        self.style.background_color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_border_color(mut self, color: Rgba) -> Self {
        self.style.border_color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_border_width(mut self, width: f64) -> Self {
        self.style.border_width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: bool) -> Self {
        self.style.fill = Some(fill);
        self
    }

    #[must_use]
    pub const fn with_point_radius(mut self, radius: f64) -> Self {
        self.style.point_radius = Some(radius);
        self
    }

    #[must_use]
    pub const fn with_point_border_width(mut self, width: f64) -> Self {
        self.style.point_border_width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_point_style(mut self, style: PointStyle) -> Self {
        self.style.point_style = Some(style);
        self
    }

    #[must_use]
    pub const fn with_line_tension(mut self, tension: f64) -> Self {
        self.style.line_tension = Some(tension);
        self
    }

    /// Attaches the dataset to an axis id returned by `Chart::add_x_axis`.
    #[must_use]
    pub fn with_x_axis(mut self, id: impl Into<String>) -> Self {
        self.style.x_axis_id = Some(id.into());
        self
    }

    /// Attaches the dataset to an axis id returned by `Chart::add_y_axis`.
    #[must_use]
    pub fn with_y_axis(mut self, id: impl Into<String>) -> Self {
        self.style.y_axis_id = Some(id.into());
        self
    }
}

impl fmt::Debug for Dataset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("points", &self.data.len())
            .field("has_y", &self.data.ys().is_some())
            .field("has_r", &self.data.rs().is_some())
            .field("style", &self.style)
            .finish()
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
