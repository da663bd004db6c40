use fm_core::FmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("coordinates ({x}, {y}) fall outside the channel domain")]
    OutOfDomain { x: f32, y: f32 },

    #[error(transparent)]
    Config(#[from] FmError),
}

pub type MessageResult<T> = Result<T, MessageError>;
