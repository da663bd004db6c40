use fm_core::FmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("population row {row}: missing field `{field}`")]
    MissingField { row: usize, field: &'static str },

    #[error("population parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] FmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AgentResult<T> = Result<T, AgentError>;
