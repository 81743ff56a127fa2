//! Hero section rendering with the intro slide-in

use crate::app::App;
use crate::state::content;
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Rows the hero starts below its resting place
const SLIDE_ROWS: u16 = 6;

/// Draw the hero section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let lines = vec![
        Line::from(Span::styled(
            content::PRACTICE_TAGLINE.to_uppercase(),
            Style::default().fg(palette.primary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            content::HERO.lead,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            content::HERO.accent,
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            content::HERO.intro,
            Style::default().fg(palette.text_secondary),
        )),
    ];

    let text_width = area.width.saturating_sub(8).min(72);
    let text_height = 8u16;
    let block_height = text_height + BUTTON_HEIGHT;

    // Center vertically, pushed down while the intro is running
    let offset = app
        .intro_state
        .as_ref()
        .map(|intro| intro.offset_rows(SLIDE_ROWS))
        .unwrap_or(0);
    let base_y = area.y + area.height.saturating_sub(block_height) / 2;
    let y = (base_y + offset).min(area.bottom().saturating_sub(1));
    let x = area.x + area.width.saturating_sub(text_width) / 2;

    let text_area = Rect {
        x,
        y,
        width: text_width,
        height: text_height.min(area.bottom().saturating_sub(y)),
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        text_area,
    );

    // Call to action, hidden until the text has settled enough to fit it
    let button_y = y + text_height;
    if button_y + BUTTON_HEIGHT <= area.bottom() {
        let width = button_width(content::HERO_CTA).min(area.width);
        let button_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: button_y,
            width,
            height: BUTTON_HEIGHT,
        };
        render_button(frame, button_area, content::HERO_CTA, true, &palette);
    }

    // Skip hint at the bottom while animating
    if app.intro_state.is_some() && area.height > 2 {
        let hint = "Pressione qualquer tecla para pular";
        let hint_area = Rect {
            x: area.x,
            y: area.bottom() - 2,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(hint)
                .style(Style::default().fg(palette.text_secondary))
                .alignment(Alignment::Center),
            hint_area,
        );
    }
}
