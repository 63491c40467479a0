use thiserror::Error;

/// Errors returned by tree operations. A failed operation never modifies the tree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation was handed no data to work with.
    #[error("cannot {operation} absent data")]
    InvalidArgument {
        /// The name of the rejected operation.
        operation: &'static str,
    },

    /// The requested data is not stored in the tree, or the tree has no median.
    #[error("data not found in tree")]
    NotFound,
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
