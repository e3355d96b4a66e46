//! Error type shared by the builder, the configuration layer and the graph loader

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Unrecognized orientation, node shape or malformed configuration document
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid color format: {0}. Expected a 6-digit hex code.")]
    InvalidColorFormat(String),

    /// Graph document that could not be decoded
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
}

pub type Result<T> = std::result::Result<T, Error>;
