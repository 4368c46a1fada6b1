use thiserror::Error;

/// Alias for `Result<T, sortviz_orst::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors which can occur while building or mutating an
/// [`ArrayModel`](crate::ArrayModel).
///
/// Neither variant is expected when the sorters are used as intended. Seeing one means a caller
/// asked for an empty round or a sorter stepped outside the array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raised when an array of fewer than one element is requested.
    #[error("invalid array size {0}: an array needs at least one element")]
    InvalidSize(usize),

    /// Raised when an index does not point inside the array.
    #[error("index {index} is out of range for an array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
