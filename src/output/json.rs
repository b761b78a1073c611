use log::warn;

use crate::chart::{Axis, Chart, ChartType, Dataset, Options};
use crate::error::{ChartError, Result};
use crate::series::Values;

use super::ChartFormatter;
use super::wire::{ChartConfig, DataConfig, DatasetConfig, Point, PointData};

/// Encodes a chart as the JSON object Chart.js expects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Encodes any serializable value with this formatter's layout.
    pub(crate) fn encode<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

impl ChartFormatter for JsonFormatter {
    fn format(&self, chart: &Chart<'_>) -> Result<String> {
        self.encode(&to_config(chart)?)
    }
}

/// Converts a chart into its wire form.
///
/// # Errors
/// Returns `ChartError::Encoding` if a style or axis number is not finite.
pub fn to_config(chart: &Chart<'_>) -> Result<ChartConfig> {
    for (kind, axes) in [
        ("xAxes", &chart.options.scales.x_axes),
        ("yAxes", &chart.options.scales.y_axes),
    ] {
        for (index, axis) in axes.iter().enumerate() {
            check_axis(kind, index, axis)?;
        }
    }

    let has_labels = !chart.data.labels.is_empty();
    let datasets = chart
        .data
        .datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| convert_dataset(chart.chart_type, has_labels, index, dataset))
        .collect::<Result<Vec<_>>>()?;

    Ok(ChartConfig {
        chart_type: chart.chart_type,
        data: DataConfig {
            labels: chart.data.labels.clone(),
            datasets,
        },
        options: wire_options(&chart.options),
    })
}

/// Drops `extra` entries that would repeat a typed field's key.
fn wire_options(options: &Options) -> Options {
    let mut options = options.clone();
    options.extra.retain(|key, _| {
        let typed = Options::is_typed_key(key);
        if typed {
            warn!("Ignoring pass-through option '{key}'; it names a typed option field");
        }
        !typed
    });
    options
}

fn check_axis(kind: &str, index: usize, axis: &Axis) -> Result<()> {
    let Some(ticks) = &axis.ticks else {
        return Ok(());
    };
    for (name, value) in [
        ("min", ticks.min),
        ("max", ticks.max),
        ("stepSize", ticks.step_size),
    ] {
        if let Some(value) = value.filter(|v| !v.is_finite()) {
            return Err(ChartError::non_finite(
                format!("options.scales.{kind}[{index}].ticks.{name}"),
                value,
            ));
        }
    }
    Ok(())
}

fn convert_dataset(
    chart_type: ChartType,
    has_labels: bool,
    index: usize,
    dataset: &Dataset<'_>,
) -> Result<DatasetConfig> {
    for (name, value) in dataset.style.numeric_fields() {
        if let Some(value) = value.filter(|v| !v.is_finite()) {
            return Err(ChartError::non_finite(
                format!("data.datasets[{index}].{name}"),
                value,
            ));
        }
    }

    let values = dataset.data;
    if !values.is_consistent() {
        warn!(
            "Dataset {index} has sequences of different lengths; encoding the first {} points",
            values.len()
        );
    }

    let effective = dataset.style.dataset_type.unwrap_or(chart_type);
    let as_points = effective.uses_points()
        || (effective.accepts_xy_points() && !has_labels && values.ys().is_some());
    let data = if as_points {
        encode_points(values)
    } else {
        encode_values(values)
    };

    Ok(DatasetConfig {
        data,
        style: dataset.style.clone(),
    })
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// `{x, y, r}` per index; a point with any non-finite coordinate becomes `null`.
fn encode_points(values: &dyn Values) -> Vec<PointData> {
    (0..values.len())
        .map(|i| point_at(values, i).map_or(PointData::Value(None), PointData::Point))
        .collect()
}

fn point_at(values: &dyn Values, i: usize) -> Option<Point> {
    let x = finite(values.xs()[i])?;
    let y = match values.ys() {
        Some(ys) => Some(finite(ys[i])?),
        None => None,
    };
    let r = match values.rs() {
        Some(rs) => Some(finite(rs[i])?),
        None => None,
    };
    Some(Point { x, y, r })
}

/// Flat Y values (or X values when there is no Y sequence).
fn encode_values(values: &dyn Values) -> Vec<PointData> {
    let len = values.len();
    let source = values.ys().unwrap_or_else(|| values.xs());
    source[..len]
        .iter()
        .map(|&v| PointData::Value(finite(v)))
        .collect()
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
