// File: crates/trajplot-core/src/lib.rs
// Summary: Core library entry point; exports the row set, downsampler, chart catalog,
// chart model/rendering, sinks and the report pipeline.

pub mod axis;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod downsample;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod report;
pub mod scale;
pub mod series;
pub mod sink;
pub mod table;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use catalog::{ChartGroup, ChartKind};
pub use chart::{Chart, RenderOptions};
pub use config::{ColumnPolicy, OutputKind, PlotConfig};
pub use downsample::{downsample, sampling_stride};
pub use error::{PlotError, Result};
pub use report::{build_chart, run, run_from_config, ReportChart, ReportSummary};
pub use series::Series;
pub use sink::{ChartSink, CollectSink, PngDirSink};
pub use table::RowSet;
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
