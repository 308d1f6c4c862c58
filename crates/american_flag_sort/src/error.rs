use thiserror::Error;

/// Errors reported by the sorter.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The sequence holds a negative value; decimal digits are only defined
    /// for non-negative keys.
    #[error("invalid input: negative value {value} at index {index}")]
    InvalidInput { index: usize, value: i64 },
}
