//! The "Museo Digital de las Danzas Peruanas" deck.
//!
//! A cover, a menu with one button per dance, and three slides per dance
//! (history, clothing, video). Every content slide links back to the menu.
//!
//! ```rust,no_run
//! use museo_danzas::museum::{GeneratorConfig, generate};
//!
//! let deck = generate(&GeneratorConfig::default())?;
//! assert_eq!(deck.slide_count(), 23);
//! # Ok::<(), museo_danzas::museum::MuseumError>(())
//! ```

pub mod assembler;
pub mod builders;
pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod verify;

pub use assembler::{BuiltDeck, DanceSlides, build_deck, generate};
pub use config::GeneratorConfig;
pub use content::{DANCES, Dance, DanceCatalog};
pub use error::{MuseumError, Result};
pub use verify::check_navigation;
