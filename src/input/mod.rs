//! Input event types shared by the palette widget and its backends.
//!
//! Backends translate native keyboard and pointer events into these types
//! before handing them to [`crate::palette::PaletteWidget`].

pub mod events;
pub mod modifiers;

pub use events::{Key, MouseButton, PointerPosition};
pub use modifiers::Modifiers;
