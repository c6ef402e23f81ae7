//! Common types and utilities shared by the OOXML writer and the deck builder.

pub mod color;
pub mod unit;
pub mod xml;

pub use color::RGBColor;
pub use unit::{Emu, inches, points};
