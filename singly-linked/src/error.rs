use thiserror::Error;

/// Failure of a checked (`try_*`) list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("index {index} is out of bounds for a list of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },
}
