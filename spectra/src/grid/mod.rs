//! Row-major 2D sample grid shared by the spatial and frequency domains.


use std::ops::Index;
use std::slice;

use num_traits::Zero;

/// A `width` x `height` grid of samples, origin at the top-left, stored row by row.
///
/// Grids are values: every transform in this crate returns a new grid and leaves its
/// input untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    samples: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, samples: Vec<T>) -> Self {
        assert_eq!(
            samples.len(),
            width * height,
            "samples length must equal width * height"
        );
        Self {
            samples,
            width,
            height,
        }
    }

    /// Builds a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut samples = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            samples,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &T {
        debug_assert!(x < self.width && y < self.height);
        &self.samples[y * self.width + x]
    }

    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.samples
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.samples.iter()
    }

    /// Applies `f` to every sample.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            samples: self.samples.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Combines two grids of identical dimensions sample by sample.
    pub fn zip_map<U, V>(&self, other: &Grid<U>, mut f: impl FnMut(&T, &U) -> V) -> Grid<V> {
        assert_eq!(
            self.dimensions(),
            other.dimensions(),
            "grid dimensions mismatch"
        );
        Grid {
            samples: self
                .samples
                .iter()
                .zip(other.samples.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn new_filled(width: usize, height: usize, value: T) -> Self {
        Self {
            samples: vec![value; width * height],
            width,
            height,
        }
    }

    /// Copies the `width` x `height` window whose top-left corner is `(left, top)`.
    pub fn crop(&self, left: usize, top: usize, width: usize, height: usize) -> Self {
        assert!(
            left + width <= self.width && top + height <= self.height,
            "crop window {}x{}+{}+{} exceeds {}x{} grid",
            width,
            height,
            left,
            top,
            self.width,
            self.height
        );
        Self::from_fn(width, height, |x, y| self[(left + x, top + y)].clone())
    }

    /// Periodic translation: the sample at `(x, y)` moves to
    /// `((x + dx) mod width, (y + dy) mod height)`.
    pub fn circular_shift(&self, dx: isize, dy: isize) -> Self {
        let w = self.width as isize;
        let h = self.height as isize;
        Self::from_fn(self.width, self.height, |x, y| {
            let sx = (x as isize - dx).rem_euclid(w) as usize;
            let sy = (y as isize - dy).rem_euclid(h) as usize;
            self[(sx, sy)].clone()
        })
    }

    /// The grid turned by 180 degrees: `(x, y)` maps to `(width - 1 - x, height - 1 - y)`.
    pub fn rotated_180(&self) -> Self {
        Self::from_fn(self.width, self.height, |x, y| {
            self[(self.width - 1 - x, self.height - 1 - y)].clone()
        })
    }

    /// Point reflection through the origin of the periodic grid:
    /// `(x, y)` maps to `(-x mod width, -y mod height)`.
    pub fn point_reflection(&self) -> Self {
        Self::from_fn(self.width, self.height, |x, y| {
            self[((self.width - x) % self.width, (self.height - y) % self.height)].clone()
        })
    }
}

impl<T: Zero + Clone> Grid<T> {
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new_filled(width, height, T::zero())
    }
}

impl Grid<f64> {
    /// Smallest and largest sample, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.samples.is_empty() {
            return None;
        }
        let min = self.samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .samples
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Largest absolute difference to `other`; grids must share dimensions.
    pub fn max_abs_diff(&self, other: &Grid<f64>) -> f64 {
        self.zip_map(other, |a, b| (a - b).abs())
            .samples
            .into_iter()
            .fold(0.0, f64::max)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        debug_assert!(x < self.width && y < self.height);
        &self.samples[y * self.width + x]
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.samples[idx]
    }
}

impl<T> AsRef<[T]> for Grid<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.samples
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl<T> From<Grid<T>> for Vec<T> {
    #[inline]
    fn from(grid: Grid<T>) -> Self {
        grid.samples
    }
}
