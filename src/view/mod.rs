//! Rendering: the display abstraction and the viewport projection.

pub mod renderer;
pub mod surface;
pub mod term;

pub use surface::{Surface, TestSurface};
pub use term::TermSurface;
