// File: crates/trajplot-core/src/report.rs
// Summary: Report pipeline: validate columns, build primary charts on all rows,
// downsample, build secondary charts, hand every chart to a sink.

use crate::catalog::{ChartGroup, ChartKind, REQUIRED_COLUMNS};
use crate::chart::{Chart, RenderOptions};
use crate::config::{ColumnPolicy, PlotConfig};
use crate::downsample::sampling_stride;
use crate::error::Result;
use crate::series::Series;
use crate::sink::ChartSink;
use crate::table::RowSet;
use crate::theme::{self, Theme};
use crate::Axis;

/// Fraction of the data span added around each chart's data.
const AXIS_MARGIN: f64 = 0.05;

/// A chart ready for a sink, with its pixel size.
#[derive(Clone, Debug)]
pub struct ReportChart {
    pub kind: ChartKind,
    pub chart: Chart,
    pub width: i32,
    pub height: i32,
}

impl ReportChart {
    pub fn render_options(&self, theme: Theme) -> RenderOptions {
        RenderOptions::sized(self.width, self.height, theme)
    }
}

/// What a run produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportSummary {
    pub produced: Vec<ChartKind>,
    pub skipped: Vec<ChartKind>,
    pub total_rows: usize,
    pub secondary_rows: usize,
    pub stride: usize,
}

/// Build the chart of `kind` from `rows`, or `None` when none of its columns are present.
/// Primary charts read their columns unconditionally, so a missing one is an error.
pub fn build_chart(kind: ChartKind, rows: &RowSet, config: &PlotConfig) -> Result<Option<ReportChart>> {
    let y_columns = kind.y_columns(rows.headers());
    if y_columns.is_empty() {
        return Ok(None);
    }

    let xs = rows.column(kind.x_column())?;
    let mut chart = Chart::new();
    chart.title = kind.title().to_string();
    chart.x_axis = Axis::new(kind.x_label(), 0.0, 1.0);
    chart.y_axis = Axis::new(kind.y_label(), 0.0, 1.0);
    chart.equal_aspect = kind.equal_aspect();
    chart.show_legend = kind.show_legend();
    for name in &y_columns {
        chart.add_series(Series::from_columns(name.as_str(), xs, rows.column(name)?));
    }
    chart.autoscale_axes(AXIS_MARGIN);

    let (width, height) = config.pixels(kind.figure_inches());
    Ok(Some(ReportChart { kind, chart, width, height }))
}

/// Render every eligible chart of `rows` into `sink`.
///
/// Primary charts use all rows; secondary charts use rows downsampled to
/// `config.max_points`. Under [`ColumnPolicy::Strict`] the required columns
/// are checked before anything is delivered.
pub fn run(config: &PlotConfig, rows: &RowSet, sink: &mut dyn ChartSink) -> Result<ReportSummary> {
    if config.policy == ColumnPolicy::Strict {
        rows.require(&REQUIRED_COLUMNS)?;
    }
    let theme = theme::find(&config.theme);
    let mut summary = ReportSummary { total_rows: rows.len(), ..Default::default() };

    for kind in ChartKind::ALL.into_iter().filter(|k| k.group() == ChartGroup::Primary) {
        deliver(kind, rows, config, &theme, sink, &mut summary)?;
    }

    let secondary = rows.downsample(config.max_points);
    summary.secondary_rows = secondary.len();
    summary.stride = if rows.len() <= config.max_points { 1 } else { sampling_stride(rows.len(), config.max_points) };
    log::info!("Rows used for secondary charts: {}", secondary.len());

    for kind in ChartKind::ALL.into_iter().filter(|k| k.group() == ChartGroup::Secondary) {
        if kind == ChartKind::OtherVariables && !config.include_other_variables {
            log::info!("Skipping the 'other variables' chart (include_other_variables = false)");
            summary.skipped.push(kind);
            continue;
        }
        deliver(kind, &secondary, config, &theme, sink, &mut summary)?;
    }
    Ok(summary)
}

fn deliver(
    kind: ChartKind,
    rows: &RowSet,
    config: &PlotConfig,
    theme: &Theme,
    sink: &mut dyn ChartSink,
    summary: &mut ReportSummary,
) -> Result<()> {
    match build_chart(kind, rows, config)? {
        Some(chart) => {
            if kind == ChartKind::OtherVariables {
                let names: Vec<&str> = chart.chart.series.iter().map(|s| s.label.as_str()).collect();
                log::info!("Columns included in the 'other variables' chart: {:?}", names);
            }
            sink.deliver(chart, theme)?;
            summary.produced.push(kind);
        }
        None => {
            log::info!(
                "No columns found for '{}' (looked for {:?}); skipping",
                kind.title(),
                kind.y_candidates()
            );
            summary.skipped.push(kind);
        }
    }
    Ok(())
}

/// Validate `config`, load the configured CSV and run the report into `sink`.
pub fn run_from_config(config: &PlotConfig, sink: &mut dyn ChartSink) -> Result<ReportSummary> {
    config.validate()?;
    log::info!("Reading file: {}", config.input_path.display());
    let rows = RowSet::from_path(&config.input_path, config.delimiter_byte()?)?;
    rows.log_summary();
    run(config, &rows, sink)
}
