//! Page effect math, kept free of DOM access so it runs (and tests) natively.

pub mod hover;
pub mod scroll;
pub mod typewriter;

pub use hover::{hover_style, stagger_delay, HoverEffect};
pub use scroll::{active_section, fragment, parallax_offset, scroll_target, NavbarStyle, SectionBounds};
pub use typewriter::{Frame, Typewriter};
