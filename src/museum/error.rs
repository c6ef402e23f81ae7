/// Errors raised while building the museum deck.
use crate::ooxml::OoxmlError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MuseumError>;

#[derive(Error, Debug)]
pub enum MuseumError {
    /// Writing or reading the presentation failed
    #[error("Presentation error: {0}")]
    Presentation(#[from] OoxmlError),

    /// The content file could not be parsed
    #[error("Invalid content file: {0}")]
    Config(String),

    /// The written deck breaks the navigation rules
    #[error("Navigation check failed:\n{}", .0.join("\n"))]
    Navigation(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
