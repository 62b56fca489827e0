use thiserror::Error;

/// Errors raised by collection operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjEachError {
    /// A reduce ran over a collection with no own entries and no seed.
    #[error("Reduce of empty collection with no initial value")]
    EmptyReduce,
    /// An operation that needs a collection received some other value.
    #[error("invalid receiver for {op}, got {got}")]
    InvalidReceiver { op: &'static str, got: &'static str },
}
