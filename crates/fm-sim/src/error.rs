use fm_core::FmError;
use fm_message::MessageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] FmError),

    #[error("message channel error: {0}")]
    Message(#[from] MessageError),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

pub type SimResult<T> = Result<T, SimError>;
