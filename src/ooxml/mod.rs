//! Office Open XML writer support.
//!
//! - [`opc`]: Open Packaging Conventions (parts, relationships, ZIP container)
//! - [`pptx`]: PresentationML writer and outline reader

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
