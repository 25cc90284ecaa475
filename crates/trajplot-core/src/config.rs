// File: crates/trajplot-core/src/config.rs
// Summary: Run configuration (paths, chart switches, resolution, sampling cap) loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PlotError, Result};

/// How missing required columns are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnPolicy {
    /// Check `time_s`, `x_m`, `y_m` before any chart is built.
    #[default]
    Strict,
    /// Skip the up-front check; the first chart reading a missing column fails.
    Lenient,
}

/// Where rendered charts go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// PNG files in `output_dir`.
    #[default]
    Files,
    /// Interactive window.
    Display,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlotConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// Draw the catch-all chart with every non-position column.
    pub include_other_variables: bool,
    /// Pixels per inch of figure size.
    pub dpi: u32,
    /// Row cap for the secondary charts.
    pub max_points: usize,
    pub policy: ColumnPolicy,
    pub output: OutputKind,
    pub delimiter: char,
    pub theme: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("logs.csv"),
            output_dir: PathBuf::from("salidas"),
            include_other_variables: false,
            dpi: 80,
            max_points: 5000,
            policy: ColumnPolicy::Strict,
            output: OutputKind::Files,
            delimiter: ',',
            theme: "light".to_string(),
        }
    }
}

impl PlotConfig {
    /// Read and validate a TOML config file. Missing keys keep their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlotError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PlotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(PlotError::Config("dpi must be greater than 0".into()));
        }
        if self.max_points == 0 {
            return Err(PlotError::Config("max_points must be greater than 0".into()));
        }
        self.delimiter_byte()?;
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter).ok().filter(u8::is_ascii).ok_or_else(|| {
            PlotError::Config(format!("delimiter must be a single ASCII character, got {:?}", self.delimiter))
        })
    }

    /// Pixel size for a figure of `inches` at the configured dpi.
    pub fn pixels(&self, inches: (f32, f32)) -> (i32, i32) {
        let dpi = self.dpi as f32;
        ((inches.0 * dpi).round() as i32, (inches.1 * dpi).round() as i32)
    }
}
