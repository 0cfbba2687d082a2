use thiserror::Error;

/// Errors from the fallible derivation and encoding surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code has fewer than 6 decimal digits")]
    IncorrectLength,

    #[error("code contains a non-numeric segment or an out-of-range payload")]
    InvalidData,
}
