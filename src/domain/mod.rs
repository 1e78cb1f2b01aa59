pub mod enums;
pub mod list;
pub mod palette;

pub use enums::{SwitchPolicy, UiMode};
pub use list::{fresh_id, Task, TodoList};
pub use palette::{ColorPalette, Gradient, PaletteEntry, PaletteError};
