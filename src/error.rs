//! Error handling for the soa-slice library
//!
//! Every failure in this crate is a broken caller contract: a bad index, a bad
//! slice window, an arithmetic overflow while sizing a result, or an extremum
//! query on an empty container. The panicking API reports these through
//! [`fatal`]; the `try_*` API hands the same [`SoaError`] back to the caller.

use thiserror::Error;

/// Main error type for the soa-slice library
#[derive(Error, Debug)]
pub enum SoaError {
    /// I/O related errors (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Element index outside the visible length
    #[error("index out of range [{index}] with length {len}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The visible length
        len: usize,
    },

    /// Three-index slice window outside the capacity
    #[error("slice bounds out of range [{low}:{high}:{max}] with capacity {cap}")]
    SliceBounds {
        /// Requested low bound
        low: usize,
        /// Requested high bound
        high: usize,
        /// Requested capacity bound
        max: usize,
        /// Capacity of the source
        cap: usize,
    },

    /// Half-open range that is inverted or exceeds the length
    #[error("invalid range [{start}:{end}] with length {len}")]
    InvalidRange {
        /// Range start
        start: usize,
        /// Range end
        end: usize,
        /// Visible length
        len: usize,
    },

    /// Result length not representable
    #[error("{operation}: length overflow")]
    LengthOverflow {
        /// Operation that overflowed
        operation: &'static str,
    },

    /// Chunk window of zero elements
    #[error("cannot be less than 1")]
    InvalidChunkSize,

    /// Operation has no meaningful result on an empty container
    #[error("{operation}: empty list")]
    Empty {
        /// Operation that received the empty container
        operation: &'static str,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl SoaError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }

    /// Create a slice bounds error
    pub fn slice_bounds(low: usize, high: usize, max: usize, cap: usize) -> Self {
        Self::SliceBounds { low, high, max, cap }
    }

    /// Create an invalid range error
    pub fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::InvalidRange { start, end, len }
    }

    /// Create a length overflow error
    pub fn length_overflow(operation: &'static str) -> Self {
        Self::LengthOverflow { operation }
    }

    /// Create an empty input error
    pub fn empty(operation: &'static str) -> Self {
        Self::Empty { operation }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get the error category for reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::OutOfBounds { .. } | Self::SliceBounds { .. } | Self::InvalidRange { .. } => {
                "bounds"
            }
            Self::LengthOverflow { .. } => "overflow",
            Self::InvalidChunkSize => "argument",
            Self::Empty { .. } => "empty",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SoaError>;

/// Assert that an index is within the visible length
#[inline]
pub fn check_bounds(index: usize, len: usize) -> Result<()> {
    if index >= len {
        Err(SoaError::out_of_bounds(index, len))
    } else {
        Ok(())
    }
}

/// Assert that `[start, end)` is a valid range of a container of length `len`
#[inline]
pub fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end || end > len {
        return Err(SoaError::invalid_range(start, end, len));
    }
    Ok(())
}

/// Assert `low <= high <= max <= cap`
#[inline]
pub fn check_slice(low: usize, high: usize, max: usize, cap: usize) -> Result<()> {
    if low > high || high > max || max > cap {
        return Err(SoaError::slice_bounds(low, high, max, cap));
    }
    Ok(())
}

/// Abort the current operation with a contract violation.
#[cold]
#[track_caller]
pub fn fatal(err: SoaError) -> ! {
    panic!("{}", err)
}
