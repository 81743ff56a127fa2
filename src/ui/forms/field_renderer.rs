//! Field rendering utilities for forms

use crate::state::{Decoration, FormField, Palette};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field takes: bordered input plus the error line under it
pub fn field_height(field: &FormField) -> u16 {
    let input = if field.is_multiline() { 5 } else { 3 };
    input + 1
}

/// Border colour, suffix icon and error text for a field's decoration
fn decoration_parts<'a>(
    field: &'a FormField,
    is_active: bool,
    palette: &Palette,
) -> (Style, &'static str, Option<&'a str>) {
    match field.decoration() {
        Decoration::Invalid => (
            Style::default().fg(palette.error),
            " ✗",
            Some(field.error_message.as_str()),
        ),
        Decoration::Valid => (Style::default().fg(palette.success), " ✓", None),
        Decoration::Neutral if is_active => (Style::default().fg(palette.primary), "", None),
        Decoration::Neutral => (Style::default().fg(palette.border), "", None),
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    palette: &Palette,
) {
    let (border_style, icon, error) = decoration_parts(field, is_active, palette);

    let input_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let error_area = Rect {
        y: area.y + input_area.height,
        height: area.height.min(1),
        ..area
    };

    let cursor = if is_active { "▌" } else { "" };
    let value = if field.value().is_empty() {
        Span::styled(
            field.placeholder.as_str(),
            Style::default().fg(palette.text_secondary).add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(field.value(), Style::default().fg(palette.text))
    };

    let line = if field.value().is_empty() {
        // Cursor sits before the placeholder
        Line::from(vec![Span::styled(cursor, Style::default().fg(palette.primary)), value])
    } else {
        Line::from(vec![value, Span::styled(cursor, Style::default().fg(palette.primary))])
    };

    let required = if field.required { " *" } else { "" };
    let title = Line::from(vec![
        Span::styled(format!(" {}", field.label), Style::default().fg(palette.text)),
        Span::styled(required, Style::default().fg(palette.primary)),
        Span::styled(format!("{icon} "), border_style),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = Paragraph::new(line).block(block);
    let content = if field.is_multiline() {
        content.wrap(Wrap { trim: false })
    } else {
        content
    };
    frame.render_widget(content, input_area);

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {message}"),
                Style::default().fg(palette.error),
            )),
            error_area,
        );
    }
}

/// Draw a single line of help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let help = Paragraph::new(text).style(Style::default().fg(palette.text_secondary));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactForm;

    #[test]
    fn test_message_field_is_taller() {
        let form = ContactForm::new();
        assert_eq!(field_height(&form.name), 4);
        assert_eq!(field_height(&form.message), 6);
    }

    #[test]
    fn test_pristine_field_shows_no_error() {
        let form = ContactForm::new();
        let (_, icon, error) = decoration_parts(&form.email, false, &Palette::DARK);
        assert_eq!(icon, "");
        assert!(error.is_none());
    }

    #[test]
    fn test_invalid_field_shows_its_error_text() {
        let mut form = ContactForm::new();
        form.focus(2);
        form.set_active_input("nope");
        form.blur_active();
        let (style, icon, error) = decoration_parts(&form.email, true, &Palette::DARK);
        assert_eq!(icon, " ✗");
        assert_eq!(style.fg, Some(Palette::DARK.error));
        assert_eq!(error, Some("Por favor, insira um e-mail válido"));
    }

    #[test]
    fn test_valid_field_shows_check() {
        let mut form = ContactForm::new();
        form.set_active_input("Ana");
        form.blur_active();
        let (style, icon, _) = decoration_parts(&form.name, false, &Palette::LIGHT);
        assert_eq!(icon, " ✓");
        assert_eq!(style.fg, Some(Palette::LIGHT.success));
    }
}
