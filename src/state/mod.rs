//! Application state module

mod app_state;
mod carousel;
pub mod content;
mod forms;
mod intro_state;
mod notification;
mod theme;
mod timer;

pub use app_state::*;
pub use carousel::*;
pub use forms::*;
pub use intro_state::*;
pub use notification::*;
pub use theme::*;
