//! Frequency-domain analysis of grayscale grids.
//!
//! The crate holds the numeric core only: grids, spectral centering, forward and
//! inverse 2D DFT, reconstruction from partial spectra and the geometric transforms
//! applied before analysis. Loading and rendering images is left to callers.

mod centering;
mod error;
mod geometry;
mod grid;
mod reconstruction;
mod spectrum;
mod transform;

#[cfg(test)]
pub(crate) mod test_utils;

pub mod prelude;

pub use prelude::*;
