//! Writing PowerPoint presentations.
//!
//! [`MutablePresentation`] owns the slides; slides own their shapes. Both are
//! addressed through copyable handles so that click actions can be wired
//! after every slide exists.
//!
//! # Example
//!
//! ```rust,no_run
//! use museo_danzas::common::inches;
//! use museo_danzas::ooxml::pptx::{ClickAction, MutablePresentation, Rect, SlideLayout, TextBody};
//!
//! let mut pres = MutablePresentation::new();
//! let home = pres.add_slide(SlideLayout::Title).slide_ref();
//! let next = pres.add_slide(SlideLayout::TitleAndContent);
//! next.set_title("Second");
//! let back = next.add_rectangle(
//!     Rect::new(inches(1.0), inches(1.0), inches(2.0), inches(0.5)),
//!     None,
//!     Some(TextBody::new("Back")),
//! )?;
//! pres.set_click_action(back, ClickAction::slide(home))?;
//! pres.save("deck.pptx")?;
//! # Ok::<(), museo_danzas::ooxml::OoxmlError>(())
//! ```

pub mod pres;
pub(crate) mod relmap;
pub mod shape;
pub mod slide;

pub use pres::MutablePresentation;
pub use shape::{MutableShape, TextBody};
pub use slide::{MutableSlide, ShapeRef, SlideRef};
