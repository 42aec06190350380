use std::sync::Arc;

use log::debug;
use rustfft::num_complex::Complex64;
use rustfft::{Fft, FftPlanner};

use crate::error::{ensure_dimensions, ensure_non_empty, Result};
use crate::grid::Grid;
use crate::spectrum::Spectrum;

/// Planned 2D FFT for one grid size.
///
/// Uses row-column decomposition: 1D transforms over every row, a transpose, 1D
/// transforms over every former column, and a transpose back. The plans live as long
/// as the `Fourier2d`, so one value serves every grid of the planned size.
pub struct Fourier2d {
    width: usize,
    height: usize,
    row_forward: Arc<dyn Fft<f64>>,
    row_inverse: Arc<dyn Fft<f64>>,
    column_forward: Arc<dyn Fft<f64>>,
    column_inverse: Arc<dyn Fft<f64>>,
}

impl Fourier2d {
    /// Plans transforms for `width` x `height` grids.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        ensure_non_empty((width, height))?;

        let mut planner = FftPlanner::new();
        let row_forward = planner.plan_fft_forward(width);
        let row_inverse = planner.plan_fft_inverse(width);
        let column_forward = planner.plan_fft_forward(height);
        let column_inverse = planner.plan_fft_inverse(height);

        debug!("Planned {}x{} FFT", width, height);

        Ok(Self {
            width,
            height,
            row_forward,
            row_inverse,
            column_forward,
            column_inverse,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Forward transform of a real image of the planned size.
    pub fn forward(&self, image: &Grid<f64>) -> Result<Spectrum> {
        ensure_dimensions(self.dimensions(), image.dimensions())?;

        let data = image.iter().map(|&v| Complex64::new(v, 0.0)).collect();
        let data = self.process(data, &self.row_forward, &self.column_forward);

        Ok(Spectrum::new(Grid::new(self.width, self.height, data)))
    }

    /// Normalized inverse transform of a spectrum of the planned size.
    pub fn inverse(&self, spectrum: &Spectrum) -> Result<Grid<Complex64>> {
        ensure_dimensions(self.dimensions(), spectrum.dimensions())?;

        let data = spectrum.coefficients().samples().to_vec();
        let mut data = self.process(data, &self.row_inverse, &self.column_inverse);

        // rustfft does not normalize
        let norm = 1.0 / (self.width * self.height) as f64;
        data.iter_mut().for_each(|c| *c *= norm);

        Ok(Grid::new(self.width, self.height, data))
    }

    fn process(
        &self,
        mut data: Vec<Complex64>,
        rows: &Arc<dyn Fft<f64>>,
        columns: &Arc<dyn Fft<f64>>,
    ) -> Vec<Complex64> {
        for row in data.chunks_exact_mut(self.width) {
            rows.process(row);
        }

        let mut transposed = transpose(&data, self.width, self.height);
        for column in transposed.chunks_exact_mut(self.height) {
            columns.process(column);
        }

        transpose(&transposed, self.height, self.width)
    }
}

/// Transposes a row-major `width` x `height` buffer into a `height` x `width` one.
fn transpose(data: &[Complex64], width: usize, height: usize) -> Vec<Complex64> {
    debug_assert_eq!(data.len(), width * height);
    let mut out = vec![Complex64::new(0.0, 0.0); data.len()];
    for y in 0..height {
        for x in 0..width {
            out[x * height + y] = data[y * width + x];
        }
    }
    out
}
