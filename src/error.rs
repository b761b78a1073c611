use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Cannot encode {field}: {reason}")]
    Encoding { field: String, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Dataset {dataset} references unknown axis '{axis_id}'")]
    UnknownAxis { dataset: usize, axis_id: String },

    #[error("Dataset {dataset}: {series} has {actual} values, expected {expected}")]
    SeriesLength {
        dataset: usize,
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ChartError {
    /// Short, stable name of the error variant.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Encoding { .. } => "Encoding",
            Self::Json(_) => "Json",
            Self::Io(_) => "Io",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::Configuration(_) => "Configuration",
            Self::UnknownAxis { .. } => "UnknownAxis",
            Self::SeriesLength { .. } => "SeriesLength",
            Self::InvalidColor(_) => "InvalidColor",
            Self::Template(_) => "Template",
            Self::TomlParse(_) => "TomlParse",
        }
    }

    /// Whether the error stems from an unrepresentable value.
    #[must_use]
    pub const fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding { .. } | Self::Json(_))
    }

    /// Whether the error stems from an inconsistent chart or config.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_)
                | Self::UnknownAxis { .. }
                | Self::SeriesLength { .. }
                | Self::InvalidColor(_)
                | Self::Template(_)
                | Self::TomlParse(_)
        )
    }

    pub(crate) fn non_finite(field: impl Into<String>, value: f64) -> Self {
        Self::Encoding {
            field: field.into(),
            reason: format!("{value} is not a finite number"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
