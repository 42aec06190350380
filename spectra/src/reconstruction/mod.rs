//! Spatial reconstruction from (possibly partial) polar spectra.
//!
//! Holding the magnitude at 1 isolates what the phase carries (edges, positions);
//! holding the phase at 0 isolates what the magnitude carries (energy per frequency).


use log::debug;

use crate::error::{ensure_dimensions, ensure_non_empty, Error, Result};
use crate::grid::Grid;
use crate::spectrum::Spectrum;
use crate::transform::{inverse, TransformMethod};

/// One polar component of a spectrum: a full grid or a value broadcast to every cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component<'a> {
    Grid(&'a Grid<f64>),
    Constant(f64),
}

impl Component<'_> {
    fn dimensions(&self) -> Option<(usize, usize)> {
        match self {
            Component::Grid(grid) => Some(grid.dimensions()),
            Component::Constant(_) => None,
        }
    }

    #[inline]
    fn at(&self, idx: usize) -> f64 {
        match self {
            Component::Grid(grid) => grid[idx],
            Component::Constant(value) => *value,
        }
    }
}

/// Inverse transform of `magnitude * e^(i * phase)`, returned as elementwise modulus.
#[derive(Debug, Clone, Copy)]
pub struct Reconstruction<'a> {
    magnitude: Component<'a>,
    phase: Component<'a>,
    dimensions: Option<(usize, usize)>,
    method: TransformMethod,
}

impl<'a> Reconstruction<'a> {
    pub fn new(magnitude: Component<'a>, phase: Component<'a>) -> Self {
        Self {
            magnitude,
            phase,
            dimensions: None,
            method: TransformMethod::default(),
        }
    }

    /// Both components known: reproduces `|image|` of the source.
    pub fn full(magnitude: &'a Grid<f64>, phase: &'a Grid<f64>) -> Self {
        Self::new(Component::Grid(magnitude), Component::Grid(phase))
    }

    /// Unit magnitude with the given phase.
    pub fn phase_only(phase: &'a Grid<f64>) -> Self {
        Self::new(Component::Constant(1.0), Component::Grid(phase))
    }

    /// Given magnitude with zero phase.
    pub fn magnitude_only(magnitude: &'a Grid<f64>) -> Self {
        Self::new(Component::Grid(magnitude), Component::Constant(0.0))
    }

    /// Sets the output size; required when both components are constant.
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    /// Selects the inverse transform implementation.
    pub fn method(mut self, method: TransformMethod) -> Self {
        self.method = method;
        self
    }

    /// Output `(width, height)`, checked against every grid component.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        let mut resolved = self.dimensions;
        for dims in [self.magnitude.dimensions(), self.phase.dimensions()]
            .into_iter()
            .flatten()
        {
            match resolved {
                Some(expected) => ensure_dimensions(expected, dims)?,
                None => resolved = Some(dims),
            }
        }

        let dims = resolved.ok_or(Error::UnknownDimensions)?;
        ensure_non_empty(dims)?;
        Ok(dims)
    }

    /// The complex spectrum assembled from the two components.
    pub fn spectrum(&self) -> Result<Spectrum> {
        let (width, height) = self.dimensions()?;
        let magnitude = Grid::from_fn(width, height, |x, y| self.magnitude.at(y * width + x));
        let phase = Grid::from_fn(width, height, |x, y| self.phase.at(y * width + x));
        Spectrum::from_polar(&magnitude, &phase)
    }

    /// Runs the inverse transform and takes the modulus of every sample.
    pub fn execute(&self) -> Result<Grid<f64>> {
        let spectrum = self.spectrum()?;
        debug!(
            "Reconstructing {}x{} image ({} inverse)",
            spectrum.width(),
            spectrum.height(),
            self.method
        );
        Ok(inverse(self.method, &spectrum)?.map(|c| c.norm()))
    }
}

/// Shorthand for `Reconstruction::new(magnitude, phase).method(method).execute()`.
pub fn reconstruct(
    method: TransformMethod,
    magnitude: Component<'_>,
    phase: Component<'_>,
) -> Result<Grid<f64>> {
    Reconstruction::new(magnitude, phase).method(method).execute()
}
