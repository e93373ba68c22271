use thiserror::Error;

/// Construction-time errors.  The scheduler core itself has no error states;
/// everything fallible lives at this configuration boundary.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match mob count {expected}")]
    MobCountMismatch {
        expected: usize,
        got: usize,
        what: &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
