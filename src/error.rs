//! Shared error type for checked container access

/// Errors reported by checked container operations.
///
/// Missing hash-table keys are not errors; they are reported as `None`
/// by `get`/`remove`. Allocation failure is fatal and never surfaces here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A checked index was at or past the container's logical length.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The index that was requested
        index: usize,
        /// The logical length at the time of the access
        len: usize,
    },
    /// A pop was attempted on a container with no elements.
    #[error("pop from an empty container")]
    Empty,
}
