use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("Tab group '{group}' has {contents} content items but {visuals} visual items")]
    MismatchedTabItems {
        group: String,
        contents: usize,
        visuals: usize,
    },

    #[error("Invalid duration for {0}: must be greater than zero")]
    InvalidDuration(String),

    #[error("Tab index {index} out of range for group '{group}' with {len} items")]
    TabIndexOutOfRange {
        group: String,
        index: usize,
        len: usize,
    },

    #[error("Tab group not found: {0}")]
    TabGroupNotFound(usize),

    #[error("FAQ item {index} out of range ({len} items)")]
    FaqIndexOutOfRange { index: usize, len: usize },

    #[error("Modal not found: {0}")]
    UnknownModal(String),

    #[error("Video not found: {0}")]
    VideoNotFound(usize),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
