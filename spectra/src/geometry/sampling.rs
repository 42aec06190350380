use glam::DVec2;

use super::{Border, FilterMode, WarpOptions};
use crate::grid::Grid;

/// Sample a pixel, resolving out-of-range coordinates through the border policy.
#[inline]
fn sample_pixel(image: &Grid<f64>, x: i64, y: i64, border: Border) -> f64 {
    let (w, h) = (image.width() as i64, image.height() as i64);
    if x >= 0 && y >= 0 && x < w && y < h {
        return image[(x as usize, y as usize)];
    }
    match border {
        Border::Constant(value) => value,
        Border::Wrap => image[(x.rem_euclid(w) as usize, y.rem_euclid(h) as usize)],
    }
}

/// Nearest neighbor interpolation.
#[inline]
fn interpolate_nearest(image: &Grid<f64>, p: DVec2, border: Border) -> f64 {
    sample_pixel(image, p.x.round() as i64, p.y.round() as i64, border)
}

/// Bilinear interpolation.
#[inline]
fn interpolate_bilinear(image: &Grid<f64>, p: DVec2, border: Border) -> f64 {
    let x0 = p.x.floor();
    let y0 = p.y.floor();
    let fx = p.x - x0;
    let fy = p.y - y0;
    // Casts saturate for offsets far outside the grid.
    let (x0, y0) = (x0 as i64, y0 as i64);
    let (x1, y1) = (x0.saturating_add(1), y0.saturating_add(1));

    let p00 = sample_pixel(image, x0, y0, border);
    let p10 = sample_pixel(image, x1, y0, border);
    let p01 = sample_pixel(image, x0, y1, border);
    let p11 = sample_pixel(image, x1, y1, border);

    let top = p00 + fx * (p10 - p00);
    let bottom = p01 + fx * (p11 - p01);

    top + fy * (bottom - top)
}

pub(super) fn interpolate(image: &Grid<f64>, p: DVec2, options: &WarpOptions) -> f64 {
    // Infinite or NaN coordinates map to no source pixel.
    if !p.is_finite() {
        return match options.border {
            Border::Constant(value) => value,
            Border::Wrap => f64::NAN,
        };
    }
    match options.filter {
        FilterMode::Nearest => interpolate_nearest(image, p, options.border),
        FilterMode::Bilinear => interpolate_bilinear(image, p, options.border),
    }
}
