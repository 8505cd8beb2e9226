use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown {kind} reference: {id}")]
    UnknownReference { kind: &'static str, id: String },

    #[error("gesture rejected: {0}")]
    GestureRejected(&'static str),
}
