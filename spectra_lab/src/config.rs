//! Run configuration, read from YAML.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use spectra::{Border, FilterMode, Rotation, TransformMethod, WarpOptions, WHITE};

/// Everything a run needs. Missing YAML fields fall back to [`LabConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Grayscale source image.
    pub input: PathBuf,
    /// Directory receiving every rendered output.
    pub output_dir: PathBuf,
    /// Directory for rotating log files.
    pub log_dir: PathBuf,
    /// `flexi_logger` filter spec, e.g. `info` or `spectra=debug`.
    pub log_level: String,
    /// Transform implementation; `naive` is only practical for tiny images.
    pub method: TransformMethod,
    /// Shift in pixels, `[tx, ty]`.
    pub translation: [f64; 2],
    /// Counter-clockwise rotation in degrees.
    pub rotation_degrees: f64,
    pub rotation_scale: f64,
    /// Fill for areas exposed by translation and rotation.
    pub border_value: f64,
    pub filter: FilterMode,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("./Pictures/fingerprint.tif"),
            output_dir: PathBuf::from("./Pictures"),
            log_dir: PathBuf::from("logs"),
            log_level: "info".to_string(),
            method: TransformMethod::Fast,
            translation: [50.0, 50.0],
            rotation_degrees: 45.0,
            rotation_scale: 1.0,
            border_value: WHITE,
            filter: FilterMode::Bilinear,
        }
    }
}

impl LabConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid config '{}'", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would only fail once outputs are already written.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.rotation_scale.is_finite() || self.rotation_scale <= 0.0 {
            bail!(
                "rotation_scale must be finite and positive, got {}",
                self.rotation_scale
            );
        }
        Ok(())
    }

    pub fn warp_options(&self) -> WarpOptions {
        WarpOptions::new()
            .filter(self.filter)
            .border(Border::Constant(self.border_value))
    }

    pub fn rotation(&self) -> Rotation {
        Rotation::degrees(self.rotation_degrees).scale(self.rotation_scale)
    }
}
