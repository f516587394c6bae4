//! Rendering primitives: cells, border glyphs, and the frame buffer.

pub mod border;
pub mod buffer;
pub mod cell;

pub use border::{BorderChars, BorderKind};
pub use buffer::{Buffer, CellUpdate};
pub use cell::{Attrs, Cell, Color, Style};
