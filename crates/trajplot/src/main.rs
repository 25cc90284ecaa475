// File: crates/trajplot/src/main.rs
// Summary: Loads the run configuration, renders the trajectory log's charts and sends them
// to PNG files or the interactive window.

mod window;

use anyhow::{Context, Result};
use log::info;
use trajplot_core::{run_from_config, CollectSink, OutputKind, PlotConfig, PngDirSink};

/// Optional TOML config path (validated on load); defaults otherwise.
fn load_config(path: Option<String>) -> Result<PlotConfig> {
    match path {
        Some(path) => PlotConfig::load_from_file(&path)
            .with_context(|| format!("failed to load config '{}'", path)),
        None => {
            let config = PlotConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config(std::env::args().nth(1))?;

    if let Ok(cwd) = std::env::current_dir() {
        info!("Working directory: {}", cwd.display());
    }

    match config.output {
        OutputKind::Files => {
            let mut sink = PngDirSink::new(&config.output_dir)
                .with_context(|| format!("creating output directory '{}'", config.output_dir.display()))?;
            let summary = run_from_config(&config, &mut sink)
                .with_context(|| format!("failed to render '{}'", config.input_path.display()))?;
            info!(
                "Wrote {} chart(s) to {} ({} skipped)",
                sink.written().len(),
                sink.dir().display(),
                summary.skipped.len()
            );
        }
        OutputKind::Display => {
            let mut sink = CollectSink::new();
            run_from_config(&config, &mut sink)
                .with_context(|| format!("failed to render '{}'", config.input_path.display()))?;
            let theme = trajplot_core::theme::find(&config.theme);
            window::show(sink.into_charts(), theme)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajplot_core::ColumnPolicy;

    #[test]
    fn no_argument_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), PlotConfig::default());
    }

    #[test]
    fn config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajplot.toml");
        std::fs::write(&path, "policy = \"lenient\"\nmax_points = 100\n").unwrap();
        let config = load_config(Some(path.display().to_string())).unwrap();
        assert_eq!(config.policy, ColumnPolicy::Lenient);
        assert_eq!(config.max_points, 100);
    }

    #[test]
    fn invalid_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "dpi = 0\n").unwrap();
        let err = load_config(Some(path.display().to_string())).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }
}
