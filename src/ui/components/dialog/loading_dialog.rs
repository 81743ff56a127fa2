//! Loading overlay shown while a contact request is in flight

use super::base::{render_dialog, DialogConfig};
use crate::state::Palette;
use ratatui::Frame;

pub const LOADING_TITLE: &str = "Processando...";

/// Render the loading overlay centered on the screen
pub fn render_loading_dialog(frame: &mut Frame, spinner: &str, palette: &Palette) {
    render_dialog(
        frame,
        DialogConfig {
            title: LOADING_TITLE,
            title_color: palette.text,
            border_color: palette.primary,
            background: palette.surface,
            message: spinner,
            hint: None,
            max_width: 30,
        },
    );
}
