use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::num_complex::Complex64;

use crate::grid::Grid;

/// Random 8-bit-range intensities, reproducible per seed.
pub fn random_grid(width: usize, height: usize, seed: u64) -> Grid<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_fn(width, height, |_, _| rng.random_range(0.0..255.0))
}

/// Asserts `|a - b| <= tolerance * max(1, max|b|)` for every sample.
pub fn assert_grids_close(actual: &Grid<f64>, expected: &Grid<f64>, tolerance: f64) {
    assert_eq!(actual.dimensions(), expected.dimensions(), "dimensions differ");
    let scale = expected.iter().fold(1.0f64, |m, v| m.max(v.abs()));
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() <= tolerance * scale,
            "sample {} differs: {} vs {} (tolerance {})",
            i,
            a,
            e,
            tolerance * scale
        );
    }
}

/// Complex counterpart of [`assert_grids_close`].
pub fn assert_complex_close(actual: &Grid<Complex64>, expected: &Grid<Complex64>, tolerance: f64) {
    assert_eq!(actual.dimensions(), expected.dimensions(), "dimensions differ");
    let scale = expected.iter().fold(1.0f64, |m, c| m.max(c.norm()));
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).norm() <= tolerance * scale,
            "coefficient {} differs: {} vs {}",
            i,
            a,
            e
        );
    }
}
