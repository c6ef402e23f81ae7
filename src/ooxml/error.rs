/// Error types for OOXML operations.
use thiserror::Error;

/// Result type for OOXML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::ooxml::opc::error::OpcError),

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Malformed or unknown entity reference
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Shape with a non-positive size or an offset outside the drawing canvas
    #[error("Invalid geometry for {shape}: {reason}")]
    InvalidGeometry { shape: String, reason: String },

    /// A slide handle that does not belong to the presentation
    #[error("Slide {0} does not exist")]
    SlideNotFound(usize),

    /// A shape handle that does not resolve to a shape
    #[error("Shape {index} does not exist on slide {slide}")]
    ShapeNotFound { slide: usize, index: usize },

    /// Part not found
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OoxmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for OoxmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
