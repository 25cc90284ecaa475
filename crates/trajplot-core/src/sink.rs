// File: crates/trajplot-core/src/sink.rs
// Summary: Output sinks receiving finished charts: PNG directory writer and in-memory collector.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::report::ReportChart;
use crate::theme::Theme;

/// Destination for charts produced by [`crate::report::run`].
pub trait ChartSink {
    fn deliver(&mut self, chart: ReportChart, theme: &Theme) -> Result<()>;
}

/// Writes each chart as `<dir>/<file name>` PNG.
pub struct PngDirSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    /// Create the sink, making sure `dir` exists.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, written: Vec::new() })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in delivery order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartSink for PngDirSink {
    fn deliver(&mut self, chart: ReportChart, theme: &Theme) -> Result<()> {
        let path = self.dir.join(chart.kind.file_name());
        chart.chart.render_to_png(&chart.render_options(*theme), &path)?;
        log::info!("Chart saved to: {}", path.display());
        self.written.push(path);
        // chart (and its raster surface) released here
        Ok(())
    }
}

/// Keeps charts in memory, e.g. for an interactive viewer.
#[derive(Default)]
pub struct CollectSink {
    pub charts: Vec<ReportChart>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_charts(self) -> Vec<ReportChart> {
        self.charts
    }
}

impl ChartSink for CollectSink {
    fn deliver(&mut self, chart: ReportChart, _theme: &Theme) -> Result<()> {
        log::debug!("Collected chart '{}'", chart.chart.title);
        self.charts.push(chart);
        Ok(())
    }
}
