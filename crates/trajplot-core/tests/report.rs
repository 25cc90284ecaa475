// File: crates/trajplot-core/tests/report.rs
// Purpose: End-to-end report runs over generated CSV logs: chart selection, sampling, column policies.

use std::fmt::Write as _;
use std::path::Path;

use trajplot_core::{
    run, run_from_config, ChartKind, CollectSink, ColumnPolicy, PlotConfig, PlotError, PngDirSink, RowSet,
};

const FULL_HEADER: &str = "time_s,x_m,y_m,vx_m_s,vy_m_s,v_mag_m_s,ax_m_s2,ay_m_s2,a_mag_m_s2,water_mass_kg,total_mass_kg,thrust_N,pressure_abs_Pa";

/// Ballistic-looking log with every recognized column except those in `drop`.
fn log_csv(rows: usize, drop: &[&str]) -> String {
    let names: Vec<&str> = FULL_HEADER.split(',').collect();
    let keep: Vec<usize> = (0..names.len()).filter(|&i| !drop.contains(&names[i])).collect();
    let mut out = keep.iter().map(|&i| names[i]).collect::<Vec<_>>().join(",");
    out.push('\n');
    for r in 0..rows {
        let t = r as f64 * 0.001;
        let (vx, vy) = (8.0, 10.0 - 9.81 * t);
        let vals = [
            t,
            vx * t,
            10.0 * t - 0.5 * 9.81 * t * t,
            vx,
            vy,
            (vx * vx + vy * vy).sqrt(),
            0.0,
            -9.81,
            9.81,
            (0.5 - t).max(0.0),
            0.1 + (0.5 - t).max(0.0),
            if t < 0.1 { 40.0 } else { 0.0 },
            101_325.0 + 300_000.0 * (-t).exp(),
        ];
        let line = keep.iter().map(|&i| format!("{:.6}", vals[i])).collect::<Vec<_>>().join(",");
        writeln!(out, "{}", line).unwrap();
    }
    out
}

fn table(rows: usize, drop: &[&str]) -> RowSet {
    RowSet::from_reader(log_csv(rows, drop).as_bytes(), b',').expect("parse log")
}

fn pngs_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".png"))
        .collect();
    names.sort();
    names
}

#[test]
fn full_log_writes_every_default_chart() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("logs.csv");
    std::fs::write(&csv_path, log_csv(300, &[])).unwrap();
    let out_dir = dir.path().join("salidas");

    let config = PlotConfig { input_path: csv_path, output_dir: out_dir.clone(), ..PlotConfig::default() };
    let mut sink = PngDirSink::new(&config.output_dir).unwrap();
    let summary = run_from_config(&config, &mut sink).expect("report");

    assert_eq!(summary.produced.len(), 7);
    assert_eq!(summary.skipped, vec![ChartKind::OtherVariables]);
    assert_eq!(
        pngs_in(&out_dir),
        vec![
            "aceleraciones_vs_tiempo.png",
            "masas_vs_tiempo.png",
            "posicion_xy_vs_tiempo.png",
            "presion_vs_tiempo.png",
            "thrust_vs_tiempo.png",
            "trayectoria_y_vs_x.png",
            "velocidades_vs_tiempo.png",
        ]
    );
    assert_eq!(sink.written().len(), 7);

    // default figure 6x4 in at 80 dpi
    let img = image::open(out_dir.join("trayectoria_y_vs_x.png")).unwrap();
    assert_eq!((img.width(), img.height()), (480, 320));
}

#[test]
fn missing_thrust_skips_only_that_chart() {
    let rows = table(50, &["thrust_N"]);
    let mut sink = CollectSink::new();
    let summary = run(&PlotConfig::default(), &rows, &mut sink).unwrap();

    assert!(summary.skipped.contains(&ChartKind::Thrust));
    assert!(!summary.produced.contains(&ChartKind::Thrust));
    assert_eq!(summary.produced.len(), 6);
    assert!(sink.charts.iter().all(|c| c.kind != ChartKind::Thrust));
}

#[test]
fn partial_groups_draw_present_columns_only() {
    let rows = table(50, &["vx_m_s", "water_mass_kg"]);
    let mut sink = CollectSink::new();
    run(&PlotConfig::default(), &rows, &mut sink).unwrap();

    let velocity = sink.charts.iter().find(|c| c.kind == ChartKind::Velocity).unwrap();
    let labels: Vec<&str> = velocity.chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["vy_m_s", "v_mag_m_s"]);
    let mass = sink.charts.iter().find(|c| c.kind == ChartKind::Mass).unwrap();
    assert_eq!(mass.chart.series.len(), 1);
}

#[test]
fn secondary_charts_are_downsampled_primary_are_not() {
    let rows = table(12_000, &[]);
    let mut sink = CollectSink::new();
    let summary = run(&PlotConfig::default(), &rows, &mut sink).unwrap();

    assert_eq!(summary.total_rows, 12_000);
    assert_eq!(summary.stride, 2);
    assert_eq!(summary.secondary_rows, 6_000);
    for c in &sink.charts {
        let expected = match c.kind {
            ChartKind::Trajectory | ChartKind::Position => 12_000,
            _ => 6_000,
        };
        assert!(c.chart.series.iter().all(|s| s.len() == expected), "{:?}", c.kind);
    }
    // first secondary sample times are rows 0 and 2
    let thrust = sink.charts.iter().find(|c| c.kind == ChartKind::Thrust).unwrap();
    assert_eq!(thrust.chart.series[0].data_xy[1].0, 0.002);
}

#[test]
fn small_log_is_not_sampled() {
    let rows = table(100, &[]);
    let summary = run(&PlotConfig::default(), &rows, &mut CollectSink::new()).unwrap();
    assert_eq!(summary.stride, 1);
    assert_eq!(summary.secondary_rows, 100);
}

#[test]
fn other_variables_chart_when_enabled() {
    let rows = table(20, &[]);
    let config = PlotConfig { include_other_variables: true, ..PlotConfig::default() };
    let mut sink = CollectSink::new();
    let summary = run(&config, &rows, &mut sink).unwrap();

    assert_eq!(summary.produced.len(), 8);
    let other = sink.charts.iter().find(|c| c.kind == ChartKind::OtherVariables).unwrap();
    assert_eq!(other.chart.series.len(), 10);
    assert_eq!((other.width, other.height), (640, 400));
}

#[test]
fn strict_policy_fails_before_any_chart() {
    let rows = table(20, &["x_m"]);
    let mut sink = CollectSink::new();
    let err = run(&PlotConfig::default(), &rows, &mut sink).unwrap_err();
    assert!(matches!(err, PlotError::MissingColumn(ref c) if c == "x_m"));
    assert!(sink.charts.is_empty());
    assert!(err.to_string().contains("x_m"));
}

#[test]
fn lenient_policy_fails_when_column_is_read() {
    let rows = table(20, &["x_m"]);
    let config = PlotConfig { policy: ColumnPolicy::Lenient, ..PlotConfig::default() };
    let mut sink = CollectSink::new();
    let err = run(&config, &rows, &mut sink).unwrap_err();
    assert!(matches!(err, PlotError::MissingColumn(ref c) if c == "x_m"));
}

#[test]
fn lenient_policy_reports_missing_y_from_trajectory() {
    // y_m missing: trajectory is the first chart and reads it
    let rows = table(20, &["y_m"]);
    let config = PlotConfig { policy: ColumnPolicy::Lenient, ..PlotConfig::default() };
    let err = run(&config, &rows, &mut CollectSink::new()).unwrap_err();
    assert!(matches!(err, PlotError::MissingColumn(ref c) if c == "y_m"));
}

#[test]
fn lenient_policy_delivers_charts_before_missing_time() {
    // trajectory needs only x_m and y_m; the position chart is the first to read time_s
    let rows = table(20, &["time_s"]);
    let config = PlotConfig { policy: ColumnPolicy::Lenient, ..PlotConfig::default() };
    let mut sink = CollectSink::new();
    let err = run(&config, &rows, &mut sink).unwrap_err();

    assert!(matches!(err, PlotError::MissingColumn(ref c) if c == "time_s"));
    let kinds: Vec<ChartKind> = sink.charts.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![ChartKind::Trajectory]);
}

#[test]
fn strict_policy_delivers_nothing_without_time() {
    let rows = table(20, &["time_s"]);
    let mut sink = CollectSink::new();
    let err = run(&PlotConfig::default(), &rows, &mut sink).unwrap_err();

    assert!(matches!(err, PlotError::MissingColumn(ref c) if c == "time_s"));
    assert!(sink.charts.is_empty());
}

#[test]
fn missing_file_is_reported_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotConfig { input_path: dir.path().join("nope.csv"), ..PlotConfig::default() };
    let err = run_from_config(&config, &mut CollectSink::new()).unwrap_err();
    assert!(matches!(err, PlotError::Open { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn invalid_config_is_rejected_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("logs.csv");
    std::fs::write(&csv_path, log_csv(10, &[])).unwrap();

    let config = PlotConfig { input_path: csv_path, delimiter: '§', ..PlotConfig::default() };
    let mut sink = CollectSink::new();
    let err = run_from_config(&config, &mut sink).unwrap_err();
    assert!(matches!(err, PlotError::Config(_)));
    assert!(sink.charts.is_empty());
}

#[test]
fn semicolon_log_with_bom_loads() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("logs.csv");
    let text = format!("\u{feff}{}", log_csv(10, &[]).replace(',', ";"));
    std::fs::write(&csv_path, text).unwrap();

    let config = PlotConfig { input_path: csv_path, delimiter: ';', ..PlotConfig::default() };
    let summary = run_from_config(&config, &mut CollectSink::new()).unwrap();
    assert_eq!(summary.total_rows, 10);
    assert_eq!(summary.produced.len(), 7);
}
