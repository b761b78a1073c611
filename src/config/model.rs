use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::{DEFAULT_HEIGHT, DEFAULT_LIBRARY_URL, DEFAULT_TITLE, DEFAULT_WIDTH};

/// HTML page settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HtmlConfig {
    /// Page title (default: "Chart").
    #[serde(default = "default_title")]
    pub title: String,

    /// Where the page loads Chart.js from.
    #[serde(default = "default_library_url")]
    pub library_url: String,

    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Custom page template; relative paths resolve against the working directory.
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            library_url: default_library_url(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            template: None,
        }
    }
}

/// JSON output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonConfig {
    /// Indent JSON output.
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub html: HtmlConfig,

    #[serde(default)]
    pub json: JsonConfig,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_library_url() -> String {
    DEFAULT_LIBRARY_URL.to_string()
}

const fn default_width() -> u32 {
    DEFAULT_WIDTH
}

const fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
