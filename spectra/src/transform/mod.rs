//! Forward and inverse 2D discrete Fourier transforms.
//!
//! Forward: `S[u, v] = sum_{x, y} I[x, y] * e^(-2*pi*i*(u*x/W + v*y/H))`.
//! Inverse: `I[x, y] = 1/(W*H) * sum_{u, v} S[u, v] * e^(+2*pi*i*(u*x/W + v*y/H))`.
//!
//! [`dft_naive`] evaluates the sum literally and is the reference definition.
//! [`Fourier2d`] computes the same values with planned FFTs.

mod fast;
mod naive;


pub use fast::Fourier2d;
pub use naive::{dft_naive, idft_naive};

use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::Grid;
use crate::spectrum::Spectrum;

/// Which implementation evaluates the transform.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransformMethod {
    /// Literal quadruple sum, O(W²H²). Only practical for small grids.
    Naive,
    /// Row/column FFT, O(WH log WH).
    #[default]
    Fast,
}

/// Forward transform of a real image.
///
/// `Fast` plans a new [`Fourier2d`] on each call; hold one directly when transforming
/// many grids of the same size.
pub fn forward(method: TransformMethod, image: &Grid<f64>) -> Result<Spectrum> {
    match method {
        TransformMethod::Naive => dft_naive(image),
        TransformMethod::Fast => Fourier2d::new(image.width(), image.height())?.forward(image),
    }
}

/// Normalized inverse transform, complex-valued. Plans per call, like [`forward`].
pub fn inverse(method: TransformMethod, spectrum: &Spectrum) -> Result<Grid<Complex64>> {
    match method {
        TransformMethod::Naive => idft_naive(spectrum),
        TransformMethod::Fast => {
            Fourier2d::new(spectrum.width(), spectrum.height())?.inverse(spectrum)
        }
    }
}
