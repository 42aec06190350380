//! Translation and rotation applied to an image before spectral analysis.
//!
//! Both operations resample through an affine map and keep the input dimensions.
//! Samples that fall outside the source take the border value, white by default.

mod sampling;

#[cfg(test)]
mod tests;

use glam::{DAffine2, DVec2};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::Grid;

use sampling::interpolate;

/// Border value for exposed areas: white for 8-bit intensities.
pub const WHITE: f64 = 255.0;

/// Filter mode for image sampling during transformation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FilterMode {
    /// Nearest neighbor sampling - fast but can produce aliasing.
    Nearest,
    /// Bilinear interpolation - smoother results.
    #[default]
    Bilinear,
}

/// What sampling outside the source image returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Border {
    /// A fixed value.
    Constant(f64),
    /// The source repeated periodically, turning a translation into a circular shift.
    /// Non-finite source coordinates sample as NaN.
    Wrap,
}

impl Default for Border {
    fn default() -> Self {
        Border::Constant(WHITE)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WarpOptions {
    pub filter: FilterMode,
    pub border: Border,
}

impl WarpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }
}

/// Rotation about a center point, counter-clockwise on screen for positive angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub angle_degrees: f64,
    pub scale: f64,
    /// Pivot in source pixels; `(width / 2, height / 2)` when `None`.
    pub center: Option<DVec2>,
}

impl Rotation {
    pub fn degrees(angle_degrees: f64) -> Self {
        Self {
            angle_degrees,
            scale: 1.0,
            center: None,
        }
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn around(mut self, center: DVec2) -> Self {
        self.center = Some(center);
        self
    }
}

/// Resamples `image` into a `width` x `height` grid.
///
/// `transform` maps source coordinates to output coordinates; every output pixel is
/// looked up through its inverse. Pixel centers sit on integer coordinates.
pub fn warp(
    image: &Grid<f64>,
    width: usize,
    height: usize,
    transform: &DAffine2,
    options: &WarpOptions,
) -> Grid<f64> {
    let inverse = transform.inverse();
    Grid::from_fn(width, height, |x, y| {
        let src = inverse.transform_point2(DVec2::new(x as f64, y as f64));
        interpolate(image, src, options)
    })
}

/// Shifts the content by `(tx, ty)` pixels (positive: right, down).
pub fn translate(image: &Grid<f64>, tx: f64, ty: f64, options: &WarpOptions) -> Grid<f64> {
    let transform = DAffine2::from_translation(DVec2::new(tx, ty));
    warp(image, image.width(), image.height(), &transform, options)
}

/// Size of the canvas that holds a `width` x `height` image rotated by `angle_degrees`
/// without clipping its corners. Never smaller than the input.
pub fn rotated_canvas_size(width: usize, height: usize, angle_degrees: f64) -> (usize, usize) {
    let (sin, cos) = angle_degrees.rem_euclid(360.0).to_radians().sin_cos();
    let (w, h) = (width as f64, height as f64);

    // Truncation, not rounding: the canvas is floor(...) pixels.
    let canvas_width = ((h * sin).abs() + (w * cos).abs()) as usize;
    let canvas_height = ((h * cos).abs() + (w * sin).abs()) as usize;

    (canvas_width.max(width), canvas_height.max(height))
}

/// Rotates into an enlarged canvas, then crops the centered window of the input size.
///
/// The enlarged canvas keeps every source pixel during the rotation; only the final
/// crop back to the original size discards content.
pub fn rotate(image: &Grid<f64>, rotation: &Rotation, options: &WarpOptions) -> Result<Grid<f64>> {
    if !rotation.scale.is_finite() || rotation.scale <= 0.0 {
        return Err(Error::InvalidScale(rotation.scale));
    }

    let (width, height) = image.dimensions();
    let angle = rotation.angle_degrees.rem_euclid(360.0);
    let (canvas_width, canvas_height) = rotated_canvas_size(width, height, angle);

    let center = rotation
        .center
        .unwrap_or(DVec2::new((width / 2) as f64, (height / 2) as f64));
    let canvas_center = DVec2::new((canvas_width / 2) as f64, (canvas_height / 2) as f64);

    // Image rows grow downwards, so a counter-clockwise turn on screen is a negative
    // angle in glam's y-up convention.
    let transform = DAffine2::from_translation(canvas_center)
        * DAffine2::from_scale(DVec2::splat(rotation.scale))
        * DAffine2::from_angle(-angle.to_radians())
        * DAffine2::from_translation(-center);

    debug!(
        "Rotating {}x{} by {} degrees (scale {}) through {}x{} canvas",
        width, height, angle, rotation.scale, canvas_width, canvas_height
    );

    let canvas = warp(image, canvas_width, canvas_height, &transform, options);

    let left = canvas_width / 2 - width / 2;
    let top = canvas_height / 2 - height / 2;
    Ok(canvas.crop(left, top, width, height))
}
