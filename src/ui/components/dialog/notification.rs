//! Notification toast with an auto-dismiss progress bar

use super::base::wrap_text;
use crate::state::{Notification, NotificationKind, Palette};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 48;

/// Render the toast in the top-right corner, below the header
pub fn render_notification(
    frame: &mut Frame,
    notification: &Notification,
    remaining_percent: f64,
    palette: &Palette,
) {
    let area = frame.area();
    let (color, icon) = match notification.kind {
        NotificationKind::Success => (palette.success, "✓"),
        NotificationKind::Error => (palette.error, "✗"),
    };

    let width = TOAST_WIDTH.min(area.width);
    // Icon, spaces and borders take 6 columns
    let lines = wrap_text(&notification.message, width.saturating_sub(6) as usize);
    // Message lines + progress bar + borders
    let height = (lines.len() as u16 + 3).min(area.height);

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 3,
        width,
        height,
    }
    .intersection(area);
    if toast_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(" Esc ", Style::default().fg(palette.text_secondary)))
        .title_alignment(ratatui::layout::Alignment::Right)
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let text: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { format!("{icon} ") } else { "  ".to_string() };
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(line, Style::default().fg(palette.text)),
            ])
        })
        .collect();
    let message_height = inner.height.saturating_sub(1);
    frame.render_widget(
        Paragraph::new(text),
        Rect {
            height: message_height,
            ..inner
        },
    );

    let bar_area = Rect {
        y: inner.y + message_height,
        height: inner.height.min(1),
        ..inner
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(palette.surface))
        .ratio((remaining_percent / 100.0).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, bar_area);
}
