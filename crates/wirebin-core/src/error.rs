use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A read needed more bytes than remain. The cursor offset is untouched,
    /// so the same read can be retried once more input arrives.
    #[error("out of data: need {needed} byte(s), {remaining} remaining")]
    OutOfData { needed: usize, remaining: usize },

    #[error("malformed varint: did not terminate after {max_bytes} bytes")]
    MalformedVarInt { max_bytes: usize },

    #[error("encoding overflow: {0}")]
    EncodingOverflow(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("invalid offset {offset} for buffer of length {len}")]
    InvalidOffset { offset: usize, len: usize },
}

impl CodecError {
    /// True when buffering more input and retrying the same read can succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CodecError::OutOfData { .. })
    }

    pub(crate) fn out_of_data(needed: usize, remaining: usize) -> Self {
        CodecError::OutOfData { needed, remaining }
    }
}
