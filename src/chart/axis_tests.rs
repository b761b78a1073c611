use serde_json::json;

use super::*;

#[test]
fn axis_ids_are_numbered_per_kind() {
    let mut axes = Axes::default();
    assert_eq!(axes.push(AxisKind::X, Axis::default()), "x-axis-0");
    assert_eq!(axes.push(AxisKind::Y, Axis::default()), "y-axis-0");
    assert_eq!(axes.push(AxisKind::Y, Axis::default()), "y-axis-1");
    assert_eq!(axes.push(AxisKind::X, Axis::default()), "x-axis-1");
    assert_eq!(axes.len(), 4);
}

#[test]
fn earlier_ids_are_stable() {
    let mut axes = Axes::default();
    let first = axes.push(AxisKind::Y, Axis::default());
    for _ in 0..5 {
        axes.push(AxisKind::Y, Axis::default());
    }
    assert_eq!(axes.y_axes[0].id.as_deref(), Some(first.as_str()));
    assert_eq!(axes.y_axes[5].id.as_deref(), Some("y-axis-5"));
}

#[test]
fn push_overwrites_caller_id() {
    let mut axes = Axes::default();
    let axis = Axis {
        id: Some("custom".to_string()),
        ..Axis::default()
    };
    let id = axes.push(AxisKind::X, axis);
    assert_eq!(id, "x-axis-0");
    assert!(!axes.contains("custom"));
    assert!(axes.contains("x-axis-0"));
}

#[test]
fn unset_fields_are_omitted() {
    let value = serde_json::to_value(Axis::new(AxisType::Linear, Position::Bottom)).unwrap();
    assert_eq!(value, json!({"type": "linear", "position": "bottom"}));
}

#[test]
fn scale_label_uses_chartjs_keys() {
    let axis = Axis::new(AxisType::Logarithmic, Position::Left)
        .with_label(ScaleLabel::new("X").with_font_size(22));
    let value = serde_json::to_value(axis).unwrap();
    assert_eq!(
        value["scaleLabel"],
        json!({"display": true, "labelString": "X", "fontSize": 22})
    );
    assert_eq!(value["type"], "logarithmic");
}

#[test]
fn ticks_and_grid_lines_serialize() {
    let axis = Axis::new(AxisType::Linear, Position::Right)
        .with_ticks(Ticks {
            begin_at_zero: Some(true),
            ..Ticks::default()
        })
        .with_grid_lines(false)
        .with_stacked(true);
    let value = serde_json::to_value(axis).unwrap();
    assert_eq!(value["ticks"], json!({"beginAtZero": true}));
    assert_eq!(value["gridLines"], json!({"display": false}));
    assert_eq!(value["stacked"], true);
}

#[test]
fn empty_axes_serialize_to_empty_object() {
    assert_eq!(serde_json::to_value(Axes::default()).unwrap(), json!({}));
}

#[test]
fn axes_deserialize_from_chartjs_keys() {
    let axes: Axes = serde_json::from_value(json!({
        "xAxes": [{"type": "time", "position": "top", "id": "x-axis-0"}],
        "yAxes": [{"type": "category"}]
    }))
    .unwrap();
    assert_eq!(axes.x_axes[0].axis_type, AxisType::Time);
    assert_eq!(axes.x_axes[0].position, Position::Top);
    assert_eq!(axes.y_axes[0].position, Position::Bottom);
    assert!(axes.contains("x-axis-0"));
}
