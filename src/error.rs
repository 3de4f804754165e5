use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no audio output device: {0}")]
    OutputStream(#[from] rodio::StreamError),

    #[error("could not create playback sink: {0}")]
    Sink(#[from] rodio::PlayError),

    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("could not probe audio: {0}")]
    Probe(#[from] symphonia::core::errors::Error),

    #[error("seek failed: {0}")]
    Seek(#[from] rodio::source::SeekError),

    #[error("no file prepared")]
    NotPrepared,

    #[error("config io error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
