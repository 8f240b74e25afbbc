//! Input pipeline: key events resolve to actions at the boundary.

pub mod keybindings;

pub use keybindings::{resolve, Action};
