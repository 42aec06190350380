use rustfft::num_complex::Complex64;

use crate::error::{ensure_dimensions, Result};
use crate::grid::Grid;

/// Complex DFT coefficients indexed by frequency `(u, v)`, same size as the source image.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    coefficients: Grid<Complex64>,
}

impl Spectrum {
    pub fn new(coefficients: Grid<Complex64>) -> Self {
        Self { coefficients }
    }

    /// Rebuilds the coefficients elementwise as `magnitude * e^(i * phase)`.
    pub fn from_polar(magnitude: &Grid<f64>, phase: &Grid<f64>) -> Result<Self> {
        ensure_dimensions(magnitude.dimensions(), phase.dimensions())?;
        Ok(Self::new(
            magnitude.zip_map(phase, |&r, &theta| Complex64::from_polar(r, theta)),
        ))
    }

    #[inline]
    pub fn coefficients(&self) -> &Grid<Complex64> {
        &self.coefficients
    }

    #[inline]
    pub fn into_coefficients(self) -> Grid<Complex64> {
        self.coefficients
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.coefficients.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.coefficients.height()
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.coefficients.dimensions()
    }

    /// Coefficient at frequency `(u, v)`.
    #[inline]
    pub fn get(&self, u: usize, v: usize) -> Complex64 {
        self.coefficients[(u, v)]
    }

    /// Elementwise modulus.
    pub fn magnitude(&self) -> Grid<f64> {
        self.coefficients.map(|c| c.norm())
    }

    /// Elementwise argument in `(-pi, pi]`.
    pub fn phase(&self) -> Grid<f64> {
        self.coefficients.map(|c| c.arg())
    }

    /// `(magnitude, phase)`; `from_polar` inverts this exactly up to round-off.
    pub fn to_polar(&self) -> (Grid<f64>, Grid<f64>) {
        (self.magnitude(), self.phase())
    }
}
