use std::fmt;

use thiserror::Error;

use crate::consts::MIN_GRID_DIMENSION;

/// Image axis named in size validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// Coarse classification of a [`ThinningError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller's buffer was rejected before anything was touched.
    Validation,
    /// A thinning run failed to converge. Signals a predicate defect.
    Internal,
}

#[derive(Error, Debug)]
pub enum ThinningError {
    #[error("Image must be 2-dimensional (got {ndim} dimensions)")]
    WrongDimensionality { ndim: usize },

    #[error("Image buffer must be row-major (C-order); column-major input is not supported")]
    NonStandardLayout,

    #[error("Image {axis} is {size}px, thinning needs at least {min}px", min = MIN_GRID_DIMENSION)]
    TooSmall { axis: Axis, size: usize },

    #[error("Buffer length {actual} does not match {width}x{height}")]
    SizeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("Pixel ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidPixel { row: usize, col: usize, value: u8 },

    #[error("Internal error: {algorithm} did not converge within {cap} passes")]
    IterationCapExceeded { algorithm: &'static str, cap: usize },
}

impl ThinningError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ThinningError::IterationCapExceeded { .. } => ErrorKind::Internal,
            _ => ErrorKind::Validation,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

pub type Result<T> = std::result::Result<T, ThinningError>;
