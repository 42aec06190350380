// Error handling
pub use crate::error::{Error, Result};

// Data model
pub use crate::grid::Grid;
pub use crate::spectrum::Spectrum;
pub use rustfft::num_complex::Complex64;

// Centering
pub use crate::centering::{center, fft_shift, ifft_shift};

// Transforms
pub use crate::transform::{
    dft_naive, forward, idft_naive, inverse, Fourier2d, TransformMethod,
};

// Reconstruction
pub use crate::reconstruction::{reconstruct, Component, Reconstruction};

// Geometry
pub use crate::geometry::{
    rotate, rotated_canvas_size, translate, warp, Border, FilterMode, Rotation, WarpOptions,
    WHITE,
};
pub use glam::{DAffine2, DVec2};
