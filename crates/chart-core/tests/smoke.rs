// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNGs.

use chart_core::{Axis, Chart, Dash, Marker, RenderOptions, Series, SeriesStyle, Tick};

fn line_chart() -> Chart {
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::log10("Virtual Users (VUs)", 8.0, 600.0)
        .with_ticks(vec![Tick::at(10.0), Tick::at(50.0), Tick::at(100.0), Tick::at(500.0)]);
    chart.y_axis = Axis::new("TPS", 0.0, 500.0);
    chart.add_series(Series::line(
        "a",
        vec![(500.0, 420.0), (10.0, 100.0), (50.0, 300.0), (100.0, 380.0)],
        SeriesStyle::new(chart_core::Color::BLUE, Dash::Solid, Marker::Circle),
    ));
    chart.add_series(Series::line(
        "b",
        vec![(10.0, 90.0)],
        SeriesStyle::new(chart_core::Color::RED, Dash::Dotted, Marker::Square),
    ));
    chart.legend = true;
    chart
}

#[test]
fn render_smoke_png() {
    let chart = line_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("smoke/nested/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn output_is_300_dpi_sized() {
    let chart = line_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (3600, 2400));
    assert_eq!(opts.pixel_size(), (3600, 2400));

    // figure corner is the white theme background
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn bar_chart_renders_with_rotated_labels() {
    let labels = ["v1.0.0 ", "v1.1.0-beta", "v2.0.0"];
    let mut chart = Chart::new().with_title("Bars");
    chart.x_axis = Axis::category("Version", &labels).with_label_rotation(30.0);
    chart.y_axis.label = "Max VUs".into();
    let palette = chart_core::Theme::report().palette.to_vec();
    chart.add_series(Series::bars("max", &[100.0, 250.0, 400.0], palette));
    chart.autoscale_y(0.05);
    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max > 400.0);

    let mut opts = RenderOptions::default();
    opts.dpi = 100;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (1200, 800));
}

#[test]
fn overwrites_existing_file() {
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("smoke/overwrite.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, b"stale").unwrap();

    let mut opts = RenderOptions::default();
    opts.dpi = 100;
    line_chart().render_to_png(&opts, &out).expect("render");
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
