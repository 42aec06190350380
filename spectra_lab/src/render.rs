//! Turning sample grids into viewable 8-bit images.

use std::path::{Path, PathBuf};

use image::GrayImage;
use spectra::Grid;
use thiserror::Error;

/// How samples map onto the 0..=255 gray range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Scaling {
    /// Stretch `[min, max]` to `[0, 255]`.
    #[default]
    Linear,
    /// `ln(1 + x)`, then stretch. Compresses the dynamic range of magnitude spectra.
    Log,
    /// Round and clamp to `[0, 255]`; for grids that already hold intensities.
    Clamp,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write '{path}': {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Cannot render empty grid to '{path}'")]
    Empty { path: PathBuf },
}

/// Renders a grid to an image file.
pub trait GridRenderer {
    fn render(&self, grid: &Grid<f64>, scaling: Scaling, path: &Path) -> Result<(), RenderError>;
}

/// Writes 8-bit grayscale files; the format follows the path extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngRenderer;

impl GridRenderer for PngRenderer {
    fn render(&self, grid: &Grid<f64>, scaling: Scaling, path: &Path) -> Result<(), RenderError> {
        let img = to_gray_image(grid, scaling).ok_or_else(|| RenderError::Empty {
            path: path.to_path_buf(),
        })?;
        img.save(path).map_err(|source| RenderError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Maps a grid to 8-bit gray. Returns `None` for an empty grid.
///
/// A constant grid renders black under `Linear` and `Log`.
pub fn to_gray_image(grid: &Grid<f64>, scaling: Scaling) -> Option<GrayImage> {
    let (min, max) = grid.min_max()?;

    let bytes: Vec<u8> = match scaling {
        Scaling::Clamp => grid.iter().map(|&v| v.round().clamp(0.0, 255.0) as u8).collect(),
        Scaling::Linear => stretch(grid.iter().copied(), min, max),
        Scaling::Log => {
            let compressed = grid.map(|&v| log_compress(v));
            let (min, max) = compressed.min_max()?;
            stretch(compressed.iter().copied(), min, max)
        }
    };

    GrayImage::from_raw(grid.width() as u32, grid.height() as u32, bytes)
}

/// `ln(1 + |x|)`; magnitudes are non-negative, the absolute value guards phase-like input.
#[inline]
pub fn log_compress(value: f64) -> f64 {
    value.abs().ln_1p()
}

fn stretch(values: impl Iterator<Item = f64>, min: f64, max: f64) -> Vec<u8> {
    let range = max - min;
    values
        .map(|v| {
            if range > 0.0 {
                (((v - min) / range) * 255.0).round() as u8
            } else {
                0
            }
        })
        .collect()
}
