use thiserror::Error;

/// Recoverable problems detected while ingesting platform input.
///
/// These never reach subscribers: platform shims log them and drop the
/// offending sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    #[error("sample at {time_ms}ms has non-finite coordinates")]
    InvalidSample { time_ms: u64 },

    #[error("move batch contains no samples")]
    EmptyBatch,

    #[error("sample at {time_ms}ms precedes the previous sample at {previous_ms}ms")]
    OutOfOrderSample { time_ms: u64, previous_ms: u64 },

    #[error("gesture behavior is not attached to a view")]
    Detached,
}
