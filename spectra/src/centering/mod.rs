//! Moving the zero-frequency term to the middle of the spectrum.
//!
//! [`center`] works in the spatial domain before the transform: multiplying by the
//! checkerboard `(-1)^(x+y)` shifts the spectrum by half its size in both directions.
//! [`fft_shift`] does the same rearrangement on a spectrum that is already computed.


use crate::grid::Grid;

/// Returns `image[x, y] * (-1)^(x + y)`.
pub fn center(image: &Grid<f64>) -> Grid<f64> {
    Grid::from_fn(image.width(), image.height(), |x, y| {
        let value = image[(x, y)];
        if (x + y) % 2 == 0 {
            value
        } else {
            -value
        }
    })
}

/// Circularly shifts by `(width / 2, height / 2)`, bringing index `(0, 0)` to the middle.
pub fn fft_shift<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    grid.circular_shift((grid.width() / 2) as isize, (grid.height() / 2) as isize)
}

/// Inverse of [`fft_shift`]; differs from it only for odd dimensions.
pub fn ifft_shift<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    grid.circular_shift(-((grid.width() / 2) as isize), -((grid.height() / 2) as isize))
}
