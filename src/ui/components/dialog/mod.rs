//! Dialog components for TUI

mod base;
mod loading_dialog;
mod notification;

pub use base::wrap_text;
pub use loading_dialog::render_loading_dialog;
pub use notification::render_notification;
