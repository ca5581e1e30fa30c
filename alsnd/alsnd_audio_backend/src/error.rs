use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Audio_Error {
    #[error("failed to initialize audio: {0}")]
    Init(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to decode audio: {0}")]
    Decode(String),

    #[error("unsupported audio format `{0}`")]
    Unsupported_Format(String),

    #[error("unsupported number of channels {0}")]
    Unsupported_Channels(u16),

    #[error("OpenAL errcode {0:#x}")]
    Backend(i32),

    #[error("a sound with key `{0}` is already loaded")]
    Duplicate_Key(String),
}
