//! Button component for TUI

use crate::state::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    palette: &Palette,
) {
    let border_style = if is_selected {
        Style::default().fg(palette.primary)
    } else {
        Style::default().fg(palette.border)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(palette.background)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.primary)
    };

    let paragraph = Paragraph::new(format!(" {content} → "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Width a button needs to fit `content` on one line
pub fn button_width(content: &str) -> u16 {
    // " content → " plus two borders
    (content.chars().count() + 6) as u16
}
