// File: crates/perf-report/tests/plan.rs
// Purpose: Line/bar planning: series selection, point order, ticks, ranges, catalogs.

use std::path::{Path, PathBuf};

use perf_report::jobs::TPS;
use perf_report::{select_ticks, BarPlan, Catalog, Columns, LinePlan, Plot, ReportError, RowFilter, StyleTable, Table};

fn table(csv: &str) -> Table {
    Table::from_reader(csv.as_bytes(), Path::new("inline.csv")).expect("parse")
}

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn partial_series_covers_only_valid_rows() {
    let t = table("VUs,2024 Local,2024 Remote\n10,100,90\n50,400,NA\n");
    let plan = LinePlan::build(&t, &names(&["2024 Local", "2024 Remote"]), &StyleTable::base()).expect("plan");

    assert_eq!(plan.legend(), vec!["2024 Local", "2024 Remote"]);
    assert_eq!(plan.series[0].points, vec![(10.0, 100.0), (50.0, 400.0)]);
    assert_eq!(plan.series[1].points, vec![(10.0, 90.0)]);
    assert_eq!(plan.covered, vec![10.0, 50.0]);
    assert_eq!(plan.ticks, vec![10.0, 50.0]);
    assert!((plan.x_range.0 - 8.0).abs() < 1e-9);
    assert!((plan.x_range.1 - 60.0).abs() < 1e-9);
}

#[test]
fn empty_and_absent_series_are_skipped() {
    let t = table("VUs,2024 Local,2025 Local\n10,NA,1\n50,,2\n");
    let plan = LinePlan::build(&t, &names(&["2024 Local", "nope", "2025 Local"]), &StyleTable::base()).expect("plan");
    assert_eq!(plan.legend(), vec!["2025 Local"]);
}

#[test]
fn points_ascend_regardless_of_row_order() {
    let t = table("VUs,s\n500,5\n10,1\n100,NA\n50,3\n");
    let plan = LinePlan::build(&t, &names(&["s"]), &StyleTable::base()).expect("plan");
    let xs: Vec<f64> = plan.series[0].points.iter().map(|p| p.0).collect();
    assert_eq!(xs, vec![10.0, 50.0, 500.0]);
    assert_eq!(plan.covered, vec![10.0, 50.0, 500.0]);
}

#[test]
fn eight_values_all_ticked_ten_values_every_second() {
    let eight = [1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 200.0, 500.0];
    assert_eq!(select_ticks(&eight), eight.to_vec());

    let ten = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0];
    assert_eq!(select_ticks(&ten), vec![1.0, 5.0, 20.0, 100.0, 500.0]);
}

#[test]
fn covered_values_are_deduplicated_across_series() {
    let rows: String = [1, 2, 5, 10, 20, 50, 100, 200, 500, 1000]
        .iter()
        .map(|v| format!("{v},{v},{v}\n"))
        .collect();
    let t = table(&format!("VUs,a,b\n{rows}"));
    let plan = LinePlan::build(&t, &names(&["a", "b"]), &StyleTable::base()).expect("plan");
    assert_eq!(plan.covered.len(), 10);
    assert_eq!(plan.ticks, vec![1.0, 5.0, 20.0, 100.0, 500.0]);
}

#[test]
fn nothing_drawn_falls_back_to_raw_index_ticks() {
    let t = table("VUs,a\n1,NA\n5,NA\n10,NA\n50,NA\n100,NA\n");
    let plan = LinePlan::build(&t, &names(&["a"]), &StyleTable::base()).expect("plan");
    assert!(plan.series.is_empty());
    assert!(plan.covered.is_empty());
    assert_eq!(plan.ticks, vec![1.0, 10.0, 100.0]);
}

#[test]
fn text_in_index_column_fails_the_plan() {
    let t = table("VUs,a\nten,1\n");
    let err = LinePlan::build(&t, &names(&["a"]), &StyleTable::base()).unwrap_err();
    assert!(matches!(err, ReportError::NonNumericIndex { .. }));
}

#[test]
fn bar_plan_drops_missing_and_trims_labels() {
    let t = table("Version,Local Max VUs\n  v1.0  ,100\nv1.1,NA\n\tv2.0 ,abc\n v3.0,400\n");
    let plan = BarPlan::build(&t).expect("plan");
    assert_eq!(plan.labels, vec!["v1.0", "v3.0"]);
    assert_eq!(plan.values, vec![100.0, 400.0]);
    assert_eq!(plan.value_column, "Local Max VUs");
    assert_eq!(plan.category_column, "Version");
}

#[test]
fn bars_take_one_palette_hue_each() {
    let rows: String = (1..=12).map(|i| format!("v{i},{}\n", i * 10)).collect();
    let t = table(&format!("Version,Local Max VUs\n{rows}"));
    let theme = chart_core::Theme::report();
    let chart = BarPlan::build(&t).expect("plan").to_chart("Max VUs", "VUs", &theme);
    assert_eq!(chart.series.len(), 1);
    let bars = &chart.series[0];
    assert_eq!(bars.bar_colors.len(), 12);
    for i in 0..12 {
        assert_eq!(bars.bar_color(i), theme.palette_color(i));
    }
    // ten hues, then the palette repeats
    assert_ne!(bars.bar_color(0), bars.bar_color(1));
    assert_eq!(bars.bar_color(10), bars.bar_color(0));
}

#[test]
fn bar_plan_needs_a_value_column() {
    let t = table("Version\nv1\n");
    assert!(matches!(BarPlan::build(&t), Err(ReportError::NoValueColumn(_))));
}

#[test]
fn unknown_series_get_fallback_style() {
    let styles = StyleTable::extended();
    let fallback = styles.lookup("2023 Something");
    assert_eq!(fallback.color, chart_core::Color::BLACK);
    assert_eq!(fallback.dash, chart_core::Dash::Solid);
    assert_eq!(fallback.marker, chart_core::Marker::Circle);

    let local = styles.lookup("2025 Local");
    assert_eq!(local.dash, chart_core::Dash::Dotted);
    assert_eq!(local.marker, chart_core::Marker::Square);
    assert!(styles.contains("2025 POC Local 2,4"));
    assert!(!StyleTable::base().contains("2025 POC Local 2,4"));
}

#[test]
fn all_columns_resolve_in_file_order() {
    let t = table("VUs,b,a\n1,1,1\n");
    assert_eq!(Columns::All.resolve(&t), names(&["b", "a"]));
    assert_eq!(Columns::only(&["x"]).resolve(&t), names(&["x"]));
}

#[test]
fn year_jobs_derive_title_and_file() {
    let job = TPS.year(2024);
    assert_eq!(job.title, "Transactions Per Second (TPS) by Virtual Users - 2024 (Local vs Remote)");
    assert_eq!(job.out_file, "tps_chart_2024.png");
    assert_eq!(job.plot, Plot::Lines { columns: Columns::only(&["2024 Local", "2024 Remote"]), filter: None });
}

#[test]
fn catalogs_list_fixed_unique_outputs() {
    let combined = Catalog::Combined.jobs();
    assert_eq!(combined.len(), 12);
    assert!(combined.iter().all(|j| matches!(j.plot, Plot::Lines { filter: None, .. })));

    let comparison = Catalog::Comparison.jobs();
    assert_eq!(comparison.len(), 22);
    let mut files: Vec<PathBuf> = comparison.iter().map(|j| PathBuf::from(&j.out_file)).collect();
    files.sort();
    files.dedup();
    assert_eq!(files.len(), comparison.len());

    let bars: Vec<_> = comparison.iter().filter(|j| j.plot == Plot::Bar).collect();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].input, "data/max-vus.csv");

    let filtered: Vec<_> = comparison
        .iter()
        .filter(|j| matches!(j.plot, Plot::Lines { filter: Some(RowFilter::DropLast(2)), .. }))
        .collect();
    assert_eq!(filtered.len(), 1);

    // same list every time
    assert_eq!(Catalog::Comparison.jobs(), comparison);
    assert_eq!(Catalog::default(), Catalog::Comparison);
}

#[test]
fn jobs_announce_their_title() {
    let job = TPS.year(2025);
    assert_eq!(
        job.progress_line(),
        "Processing Transactions Per Second (TPS) by Virtual Users - 2025 (Local vs Remote)..."
    );
}

#[test]
fn completion_banner_groups_follow_catalog() {
    let combined = Catalog::Combined.chart_groups();
    let comparison = Catalog::Comparison.chart_groups();
    assert_eq!(combined.len(), 3);
    assert!(comparison.starts_with(combined));
    assert!(comparison.iter().any(|g| g.contains("POC")));
    assert!(comparison.iter().any(|g| g.contains("bar")));
}
