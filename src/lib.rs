//! museo-danzas - generator for an interactive PowerPoint museum of Peruvian dances
//!
//! The crate has two layers:
//!
//! - [`ooxml`]: a small PresentationML writer (slides, text boxes, filled
//!   rectangles, slide jumps and external links) on top of an OPC package
//!   writer, plus an outline reader for checking written files
//! - [`museum`]: the dance content and the assembly of the deck
//!
//! # Example
//!
//! ```no_run
//! use museo_danzas::museum::{DanceCatalog, build_deck, layout::MenuGrid};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deck = build_deck(&DanceCatalog::builtin(), &MenuGrid::default())?;
//! deck.save("Museo_Digital_Danzas_Peruanas.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod museum;
pub mod ooxml;
