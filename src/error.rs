use thiserror::Error;

/// Construction-time configuration errors. Fatal to building the instance;
/// nothing is allocated or borrowed when one is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The chosen index width cannot represent every id in `[0, N)`.
    #[error("index type cannot represent capacity {capacity}")]
    CapacityOverflow { capacity: usize },

    /// A borrowed buffer does not have the required length.
    #[error("storage of length {actual} supplied where {expected} is required")]
    InvalidStorageLength { expected: usize, actual: usize },
}

/// An element id at or above the capacity was passed to an operation.
///
/// Ids are validated before any store is touched, so the failing call left
/// the structure exactly as it was.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("element id {index} is out of range for capacity {len}")]
pub struct OutOfRangeIndex {
    pub index: usize,
    pub len: usize,
}
