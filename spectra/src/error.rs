use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("dimension mismatch: expected (width, height) {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("grid has a zero dimension")]
    EmptyGrid,

    #[error("reconstruction dimensions are unknown: both components are constant")]
    UnknownDimensions,

    #[error("invalid scale {0}: must be finite and positive")]
    InvalidScale(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails with `DimensionMismatch` unless both (width, height) pairs agree.
pub(crate) fn ensure_dimensions(expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, actual })
    }
}

/// Fails with `EmptyGrid` if either dimension is zero.
pub(crate) fn ensure_non_empty((width, height): (usize, usize)) -> Result<()> {
    if width == 0 || height == 0 {
        Err(Error::EmptyGrid)
    } else {
        Ok(())
    }
}
