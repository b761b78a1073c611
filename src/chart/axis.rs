//! Scale descriptors and the per-chart axis registry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Scale type understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    #[default]
    Linear,
    Category,
    Logarithmic,
    Time,
}

/// Edge of the chart area an axis (or legend/title) is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

/// Axis orientation. X and Y axes are numbered independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl AxisKind {
    /// Identifier for the `index`-th axis of this kind, e.g. `y-axis-0`.
    #[must_use]
    pub fn axis_id(self, index: usize) -> String {
        format!("{self}-axis-{index}")
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Axis title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

impl ScaleLabel {
    /// A visible label with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            display: Some(true),
            label_string: Some(text.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLines {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
}

/// Configuration for one scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type", default)]
    pub axis_type: AxisType,
    #[serde(default)]
    pub position: Position,
    /// Assigned when the axis is registered on a chart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_lines: Option<GridLines>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_label: Option<ScaleLabel>,
}

impl Axis {
    #[must_use]
    pub fn new(axis_type: AxisType, position: Position) -> Self {
        Self {
            axis_type,
            position,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: ScaleLabel) -> Self {
        self.scale_label = Some(label);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = Some(ticks);
        self
    }

    #[must_use]
    pub const fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = Some(stacked);
        self
    }

    #[must_use]
    pub const fn with_grid_lines(mut self, display: bool) -> Self {
        self.grid_lines = Some(GridLines {
            display: Some(display),
        });
        self
    }
}

/// Append-only registry of X and Y axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub x_axes: Vec<Axis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub y_axes: Vec<Axis>,
}

impl Axes {
    /// Registers `axis`, overwriting any caller-set id, and returns the new id.
    pub fn push(&mut self, kind: AxisKind, mut axis: Axis) -> String {
        let list = match kind {
            AxisKind::X => &mut self.x_axes,
            AxisKind::Y => &mut self.y_axes,
        };
        let id = kind.axis_id(list.len());
        axis.id = Some(id.clone());
        list.push(axis);
        id
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Axis> {
        self.iter().find(|axis| axis.id.as_deref() == Some(id))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.x_axes.iter().chain(&self.y_axes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x_axes.len() + self.y_axes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_axes.is_empty() && self.y_axes.is_empty()
    }
}

#[cfg(test)]
#[path = "axis_tests.rs"]
mod tests;
