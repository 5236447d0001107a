pub type Result<T> = std::result::Result<T, ListError>;

/// Errors returned by position-addressed list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("position {position} is out of range for a list of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("failed to allocate a list node")]
    AllocationError,
}
