use std::path::Path;

use serde_json::json;

use super::*;
use crate::chart::Position;
use crate::color::Rgba;

const BUBBLE_JSON: &str = r#"{
    "title": "Report",
    "charts": [
        {
            "type": "bubble",
            "label": "test-chart",
            "xAxes": [{"type": "linear", "position": "bottom"}],
            "yAxes": [{"type": "linear", "position": "right"}],
            "datasets": [
                {
                    "x": [0, 1, 2],
                    "y": [0, 1, 2],
                    "r": [0, 1, 2],
                    "xAxis": 0,
                    "yAxis": 0,
                    "label": "HHIHIHI",
                    "backgroundColor": "rgba(0, 255, 0, 0.784)"
                }
            ]
        }
    ]
}"#;

const BAR_TOML: &str = r##"
[[charts]]
type = "bar"
labels = ["a", "b", "c"]

[[charts.datasets]]
x = [1, 2, 3]
label = "counts"
backgroundColor = "#00ff00"
borderWidth = 2
"##;

#[test]
fn format_is_chosen_by_extension() {
    assert_eq!(
        DocumentFormat::from_path(Path::new("charts.toml")),
        DocumentFormat::Toml
    );
    assert_eq!(
        DocumentFormat::from_path(Path::new("charts.TOML")),
        DocumentFormat::Toml
    );
    assert_eq!(
        DocumentFormat::from_path(Path::new("charts.json")),
        DocumentFormat::Json
    );
    assert_eq!(
        DocumentFormat::from_path(Path::new("charts")),
        DocumentFormat::Json
    );
}

#[test]
fn parses_json_document() {
    let document = Document::parse(BUBBLE_JSON, DocumentFormat::Json).unwrap();
    assert_eq!(document.title.as_deref(), Some("Report"));
    assert_eq!(document.charts.len(), 1);

    let spec = &document.charts[0];
    assert_eq!(spec.chart_type, ChartType::Bubble);
    assert_eq!(spec.y_axes[0].position, Position::Right);
    let dataset = &spec.datasets[0];
    assert_eq!(dataset.x, vec![0.0, 1.0, 2.0]);
    assert_eq!(dataset.r.as_deref(), Some(&[0.0, 1.0, 2.0][..]));
    assert_eq!(dataset.style.label.as_deref(), Some("HHIHIHI"));
    assert_eq!(dataset.style.background_color, Some(Rgba::new(0, 255, 0, 200)));
}

#[test]
fn parses_toml_document() {
    let document = Document::parse(BAR_TOML, DocumentFormat::Toml).unwrap();
    assert!(document.title.is_none());
    let spec = &document.charts[0];
    assert_eq!(spec.chart_type, ChartType::Bar);
    assert_eq!(spec.labels, vec!["a", "b", "c"]);
    assert_eq!(spec.datasets[0].style.border_width, Some(2.0));
    assert_eq!(spec.datasets[0].y, None);
}

#[test]
fn build_resolves_axis_indices_to_ids() {
    let document = Document::parse(BUBBLE_JSON, DocumentFormat::Json).unwrap();
    let chart = document.charts[0].build().unwrap();

    assert_eq!(chart.label.as_deref(), Some("test-chart"));
    assert_eq!(chart.axes().len(), 2);
    let style = &chart.data.datasets[0].style;
    assert_eq!(style.x_axis_id.as_deref(), Some("x-axis-0"));
    assert_eq!(style.y_axis_id.as_deref(), Some("y-axis-0"));
    chart.validate().unwrap();

    let value: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
    assert_eq!(
        value["data"]["datasets"][0]["data"][2],
        json!({"x": 2.0, "y": 2.0, "r": 2.0})
    );
}

#[test]
fn scales_in_options_come_before_axis_lists() {
    let document = Document::parse(
        r#"{"charts": [{
            "type": "line",
            "options": {"scales": {"yAxes": [{"position": "left"}]}},
            "yAxes": [{"position": "right"}],
            "datasets": [{"x": [1], "y": [2], "yAxis": 1}]
        }]}"#,
        DocumentFormat::Json,
    )
    .unwrap();
    let chart = document.charts[0].build().unwrap();

    assert_eq!(chart.axes().y_axes.len(), 2);
    assert_eq!(chart.axes().y_axes[1].position, Position::Right);
    assert_eq!(
        chart.data.datasets[0].style.y_axis_id.as_deref(),
        Some("y-axis-1")
    );
}

#[test]
fn out_of_range_axis_index_is_a_configuration_error() {
    let document = Document::parse(
        r#"{"charts": [{"type": "line", "datasets": [{"x": [1], "yAxis": 3}]}]}"#,
        DocumentFormat::Json,
    )
    .unwrap();
    let err = document.build().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("yAxis 3"));
}

#[test]
fn axis_index_and_explicit_id_together_are_rejected() {
    let document = Document::parse(
        r#"{"charts": [{
            "type": "line",
            "yAxes": [{}],
            "datasets": [
                {"x": [1], "yAxisID": "y-axis-0"},
                {"x": [1], "yAxis": 0, "yAxisID": "custom"}
            ]
        }]}"#,
        DocumentFormat::Json,
    )
    .unwrap();
    let err = document.build().unwrap_err();
    assert!(err.is_configuration());
    assert!(
        err.to_string()
            .contains("Dataset 1: set either yAxis or yAxisID, not both")
    );
}

#[test]
fn explicit_axis_id_is_kept_without_index() {
    let document = Document::parse(
        r#"{"charts": [{"type": "line", "xAxes": [{}], "datasets": [{"x": [1], "xAxisID": "x-axis-0"}]}]}"#,
        DocumentFormat::Json,
    )
    .unwrap();
    let chart = document.charts[0].build().unwrap();
    assert_eq!(
        chart.data.datasets[0].style.x_axis_id.as_deref(),
        Some("x-axis-0")
    );
    chart.validate().unwrap();
}

#[test]
fn dataset_spec_exposes_its_sequences() {
    let spec = DatasetSpec {
        x: vec![1.0, 2.0, 3.0],
        y: Some(vec![4.0, 5.0]),
        ..DatasetSpec::default()
    };
    assert_eq!(spec.xs(), &[1.0, 2.0, 3.0]);
    assert_eq!(spec.len(), 2);
    assert!(!spec.is_consistent());
    assert!(spec.rs().is_none());
}

#[test]
fn unknown_chart_type_fails_to_parse() {
    let err = Document::parse(r#"{"charts": [{"type": "pyramid"}]}"#, DocumentFormat::Json)
        .unwrap_err();
    assert_eq!(err.error_type(), "Json");
}

#[test]
fn load_reports_missing_file() {
    let err = Document::load(Path::new("/nonexistent/charts.json")).unwrap_err();
    assert!(matches!(err, ChartError::FileRead { .. }));
}

#[test]
fn load_reads_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("charts.toml");
    std::fs::write(&path, BAR_TOML).unwrap();
    let document = Document::load(&path).unwrap();
    let charts = document.build().unwrap();
    assert_eq!(charts.len(), 1);
    assert_eq!(charts[0].data.labels.len(), 3);
}
