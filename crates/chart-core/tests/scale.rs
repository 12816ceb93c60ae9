// File: crates/chart-core/tests/scale.rs
// Purpose: Validate axis transforms, tick helpers and y autoscale.

use chart_core::grid::{format_tick, nice_ticks};
use chart_core::scale::AxisScale;
use chart_core::{Axis, Chart, Series, SeriesStyle, Tick};

#[test]
fn log_scale_maps_decades_evenly() {
    let s = AxisScale::new_log10(0.0, 300.0, 1.0, 1000.0);
    assert!((s.to_px(1.0) - 0.0).abs() < 1e-3);
    assert!((s.to_px(10.0) - 100.0).abs() < 1e-3);
    assert!((s.to_px(100.0) - 200.0).abs() < 1e-3);
    assert!((s.from_px(200.0) - 100.0).abs() < 1e-6);
}

#[test]
fn vertical_scale_is_flipped() {
    let s = AxisScale::new_linear(500.0, 100.0, 0.0, 10.0);
    assert_eq!(s.to_px(0.0), 500.0);
    assert_eq!(s.to_px(10.0), 100.0);
}

#[test]
fn nice_ticks_are_round_and_in_range() {
    assert_eq!(nice_ticks(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    let t = nice_ticks(81.0, 419.0, 7);
    assert!(t.iter().all(|v| *v >= 81.0 && *v <= 419.0));
    assert_eq!(t, vec![100.0, 200.0, 300.0, 400.0]);
    assert_eq!(nice_ticks(5.0, 5.0, 7), vec![5.0]);
}

#[test]
fn tick_labels_drop_needless_decimals() {
    assert_eq!(format_tick(10.0), "10");
    assert_eq!(format_tick(2.5), "2.5");
    assert_eq!(format_tick(0.1 + 0.2), "0.3");
    assert_eq!(format_tick(-0.0), "0");
}

#[test]
fn explicit_ticks_outside_range_are_hidden() {
    let axis = Axis::log10("x", 8.0, 60.0)
        .with_ticks(vec![Tick::at(1.0), Tick::at(10.0), Tick::at(50.0), Tick::at(100.0)]);
    let values: Vec<f64> = axis.resolved_ticks().iter().map(|t| t.value).collect();
    assert_eq!(values, vec![10.0, 50.0]);
}

#[test]
fn category_axis_has_one_slot_per_label() {
    let axis = Axis::category("v", &["a", "b", "c"]);
    assert_eq!((axis.min, axis.max), (-0.5, 2.5));
    let labels: Vec<String> = axis.resolved_ticks().into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["a", "b", "c"]);
}

#[test]
fn line_points_sorted_by_x() {
    let s = Series::line("s", vec![(50.0, 1.0), (10.0, 2.0), (25.0, 3.0)], SeriesStyle::default());
    let xs: Vec<f64> = s.data_xy.iter().map(|p| p.0).collect();
    assert_eq!(xs, vec![10.0, 25.0, 50.0]);
}

#[test]
fn autoscale_pads_lines_and_ignores_empty_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("a", vec![(1.0, 100.0), (2.0, 400.0)], SeriesStyle::default()));
    chart.add_series(Series::line("empty", Vec::new(), SeriesStyle::default()));
    chart.autoscale_y(0.05);
    assert!((chart.y_axis.min - 85.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 415.0).abs() < 1e-9);
    assert_eq!(chart.legend_entries().len(), 1);
}
