//! Rendering and behavior toggles.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::axis::{Axes, Position};
use crate::error::{ChartError, Result};

/// Wire names of the typed fields; `extra` must not repeat them.
const TYPED_KEYS: [&str; 6] = [
    "responsive",
    "maintainAspectRatio",
    "title",
    "legend",
    "tooltips",
    "scales",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

impl Title {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            display: Some(true),
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltips {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Interaction mode, e.g. `nearest`, `index`, `point`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intersect: Option<bool>,
}

/// Chart options.
///
/// Fields are independent and mostly passed through untouched. Anything the
/// typed fields do not cover goes into `extra`, which is merged into the
/// encoded `options` object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltips: Option<Tooltips>,
    #[serde(default, skip_serializing_if = "Axes::is_empty")]
    pub scales: Axes,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Options {
    /// Sets an option by its wire name, replacing any previous value for `key`.
    ///
    /// Names of typed fields update that field; anything else is stored in
    /// `extra`. Axes are registered through the chart, never set here.
    ///
    /// # Errors
    /// Returns `ChartError::Configuration` if `key` is `scales` or if the value
    /// does not fit the typed field.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Result<()> {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "responsive" => self.responsive = typed(&key, value)?,
            "maintainAspectRatio" => self.maintain_aspect_ratio = typed(&key, value)?,
            "title" => self.title = typed(&key, value)?,
            "legend" => self.legend = typed(&key, value)?,
            "tooltips" => self.tooltips = typed(&key, value)?,
            "scales" => {
                return Err(ChartError::Configuration(
                    "scales cannot be set directly; register axes on the chart".to_string(),
                ));
            }
            _ => {
                self.extra.insert(key, value);
            }
        }
        Ok(())
    }

    /// Whether `key` names a typed field rather than a pass-through option.
    #[must_use]
    pub fn is_typed_key(key: &str) -> bool {
        TYPED_KEYS.contains(&key)
    }
}

fn typed<T: DeserializeOwned>(key: &str, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| ChartError::Configuration(format!("Invalid value for option '{key}': {e}")))
}
