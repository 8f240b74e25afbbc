//! Session state: the editable line, command history and scrollback.

pub mod history;
pub mod line_buffer;
pub mod scrollback;

pub use history::History;
pub use line_buffer::LineBuffer;
pub use scrollback::Scrollback;
