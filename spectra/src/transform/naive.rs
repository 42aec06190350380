use std::f64::consts::PI;

use rustfft::num_complex::Complex64;

use crate::error::{ensure_non_empty, Result};
use crate::grid::Grid;
use crate::spectrum::Spectrum;

/// Forward 2D DFT by direct evaluation of the defining double sum per coefficient.
pub fn dft_naive(image: &Grid<f64>) -> Result<Spectrum> {
    ensure_non_empty(image.dimensions())?;
    let input = image.map(|&v| Complex64::new(v, 0.0));
    Ok(Spectrum::new(direct_sum(&input, -1.0)))
}

/// Inverse 2D DFT by direct evaluation, divided by `W * H`.
pub fn idft_naive(spectrum: &Spectrum) -> Result<Grid<Complex64>> {
    ensure_non_empty(spectrum.dimensions())?;
    let norm = 1.0 / (spectrum.width() * spectrum.height()) as f64;
    Ok(direct_sum(spectrum.coefficients(), 1.0).map(|&c| c * norm))
}

/// `out[u, v] = sum_{x, y} input[x, y] * e^(sign * 2*pi*i*(u*x/W + v*y/H))`.
fn direct_sum(input: &Grid<Complex64>, sign: f64) -> Grid<Complex64> {
    let (width, height) = input.dimensions();

    Grid::from_fn(width, height, |u, v| {
        let mut sum = Complex64::new(0.0, 0.0);
        for y in 0..height {
            for x in 0..width {
                // Reduce the products first so the angle stays in [0, 2*pi) per axis.
                let fx = ((u * x) % width) as f64 / width as f64;
                let fy = ((v * y) % height) as f64 / height as f64;
                let angle = sign * 2.0 * PI * (fx + fy);
                sum += input[(x, y)] * Complex64::from_polar(1.0, angle);
            }
        }
        sum
    })
}
