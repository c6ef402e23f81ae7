//! PowerPoint (.pptx) presentation support.
//!
//! - [`writer`]: build a presentation slide by slide and save it
//! - [`outline`]: read a written presentation back as titles, text and links
//! - [`template`]: the slide master, layouts and theme every deck is written with

pub mod format;
pub mod hyperlinks;
pub mod outline;
pub mod template;
pub mod writer;

pub use format::{Rect, SlideLayout, TextAlign, TextFormat};
pub use hyperlinks::ClickAction;
pub use outline::{ButtonOutline, LinkOutline, PresentationOutline, SlideOutline};
pub use writer::{MutablePresentation, MutableShape, MutableSlide, ShapeRef, SlideRef, TextBody};
