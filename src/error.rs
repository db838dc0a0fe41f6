//! Error types for container operations.

use core::fmt;

/// A positional argument fell outside the operation's valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    /// The rejected index.
    pub index: usize,
    /// Length of the container at the time of the call.
    pub len: usize,
}

impl IndexError {
    pub(crate) const fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} is out of bounds for length {}", self.index, self.len)
    }
}

impl core::error::Error for IndexError {}

/// An operation that needs at least one element was called on an empty container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyContainerError;

impl fmt::Display for EmptyContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("container is empty")
    }
}

impl core::error::Error for EmptyContainerError {}

/// Any error produced by the containers in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A positional argument was out of range.
    Index(IndexError),
    /// The container had no element to give back.
    Empty(EmptyContainerError),
}

/// Result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Index(e) => write!(f, "{}", e),
            Error::Empty(e) => write!(f, "{}", e),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Index(e) => Some(e),
            Error::Empty(e) => Some(e),
        }
    }
}

impl From<IndexError> for Error {
    fn from(value: IndexError) -> Self {
        Error::Index(value)
    }
}

impl From<EmptyContainerError> for Error {
    fn from(value: EmptyContainerError) -> Self {
        Error::Empty(value)
    }
}
