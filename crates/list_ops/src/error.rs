use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SeqError {
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

pub type Result<T> = std::result::Result<T, SeqError>;
