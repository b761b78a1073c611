use super::*;
use crate::color::Rgba;
use crate::series::Series;

fn ramp(n: usize) -> Series {
    let values: Vec<f64> = (0..n).map(|i| i as f64).collect();
    Series::xyr(values.clone(), values.clone(), values)
}

#[test]
fn chart_type_names_match_renderer() {
    assert_eq!(ChartType::Bubble.to_string(), "bubble");
    assert_eq!(ChartType::PolarArea.to_string(), "polarArea");
    assert_eq!(
        serde_json::to_string(&ChartType::HorizontalBar).unwrap(),
        r#""horizontalBar""#
    );
}

#[test]
fn chart_type_parses_case_insensitively() {
    assert_eq!("Bar".parse::<ChartType>().unwrap(), ChartType::Bar);
    assert_eq!(
        "polar-area".parse::<ChartType>().unwrap(),
        ChartType::PolarArea
    );
    assert!("gantt".parse::<ChartType>().is_err());
}

#[test]
fn only_bubble_and_scatter_use_points() {
    assert!(ChartType::Bubble.uses_points());
    assert!(ChartType::Scatter.uses_points());
    assert!(!ChartType::Line.uses_points());
    assert!(!ChartType::Bar.uses_points());
}

#[test]
fn only_line_and_point_types_accept_xy_points() {
    assert!(ChartType::Line.accepts_xy_points());
    assert!(ChartType::Scatter.accepts_xy_points());
    assert!(ChartType::Bubble.accepts_xy_points());
    for scalar in [
        ChartType::Bar,
        ChartType::HorizontalBar,
        ChartType::Radar,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::PolarArea,
    ] {
        assert!(!scalar.accepts_xy_points(), "{scalar}");
    }
}

#[test]
fn axis_registration_returns_indexed_ids() {
    let mut chart = Chart::new(ChartType::Line);
    let x0 = chart.add_x_axis(Axis::new(AxisType::Linear, Position::Bottom));
    let y0 = chart.add_y_axis(Axis::new(AxisType::Linear, Position::Left));
    let y1 = chart.add_y_axis(Axis::new(AxisType::Linear, Position::Right));
    assert_eq!((x0.as_str(), y0.as_str(), y1.as_str()), ("x-axis-0", "y-axis-0", "y-axis-1"));
    assert_eq!(chart.axes().len(), 3);
}

#[test]
fn datasets_keep_insertion_order() {
    let first = ramp(3);
    let second = ramp(4);
    let mut chart = Chart::new(ChartType::Line);
    chart.add_dataset(Dataset::new(&second).with_label("d2"));
    chart.add_dataset(Dataset::new(&first).with_label("d1"));
    let labels: Vec<_> = chart
        .data
        .datasets
        .iter()
        .map(|d| d.style.label.as_deref().unwrap())
        .collect();
    assert_eq!(labels, vec!["d2", "d1"]);
}

#[test]
fn add_dataset_accepts_dangling_axis_reference() {
    let series = ramp(2);
    let mut chart = Chart::new(ChartType::Line);
    chart.add_dataset(Dataset::new(&series).with_y_axis("y-axis-9"));
    assert_eq!(chart.data.datasets.len(), 1);
}

#[test]
fn validate_reports_dangling_axis() {
    let series = ramp(2);
    let mut chart = Chart::new(ChartType::Line);
    chart.add_y_axis(Axis::default());
    chart.add_dataset(Dataset::new(&series).with_y_axis("y-axis-0"));
    chart.add_dataset(Dataset::new(&series).with_y_axis("y-axis-1"));

    let err = chart.validate().unwrap_err();
    assert!(matches!(
        err,
        ChartError::UnknownAxis { dataset: 1, ref axis_id } if axis_id == "y-axis-1"
    ));
}

#[test]
fn validate_accepts_axis_registered_after_dataset() {
    let series = ramp(2);
    let mut chart = Chart::new(ChartType::Line);
    chart.add_dataset(Dataset::new(&series).with_y_axis("y-axis-0"));
    chart.add_y_axis(Axis::default());
    assert!(chart.validate().is_ok());
}

#[test]
fn validate_reports_series_length_mismatch() {
    let series = Series::xyr(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0], vec![1.0]);
    let mut chart = Chart::new(ChartType::Bubble);
    chart.add_dataset(Dataset::new(&series));
    let err = chart.validate().unwrap_err();
    assert!(matches!(
        err,
        ChartError::SeriesLength {
            dataset: 0,
            series: "r",
            expected: 3,
            actual: 1
        }
    ));
}

#[test]
fn with_labels_collects_strings() {
    let chart = Chart::new(ChartType::Bar).with_labels((0..3).map(|i| i.to_string()));
    assert_eq!(chart.data.labels, vec!["0", "1", "2"]);
}

#[test]
fn to_json_uses_json_formatter() {
    let series = ramp(1);
    let mut chart = Chart::new(ChartType::Bubble);
    chart.add_dataset(Dataset::new(&series).with_background_color(Rgba::rgb(0, 0, 0)));
    let compact = chart.to_json().unwrap();
    let pretty = chart.to_json_pretty().unwrap();
    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
        serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
    );
}

#[test]
fn write_html_embeds_chart() {
    let series = ramp(2);
    let mut chart = Chart::new(ChartType::Bubble).with_label("test-chart");
    chart.add_dataset(Dataset::new(&series));
    let mut buffer = Vec::new();
    chart.write_html(&mut buffer).unwrap();
    let html = String::from_utf8(buffer).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#""type":"bubble""#));
}
