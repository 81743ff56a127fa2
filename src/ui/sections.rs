//! Static content sections (Sobre, Serviços, Abordagem) and testimonials

use crate::app::App;
use crate::state::content::{self, Card, Headline};
use crate::state::{Palette, Section, Testimonial};
use crate::ui::components::wrap_text;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Headline with its highlighted half and the intro paragraph
pub fn headline_lines(headline: &Headline, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                headline.lead,
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                headline.accent,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            headline.intro,
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(""),
    ]
}

/// Columns of padding on each side of the scrolling sections
const CONTENT_PADDING: u16 = 2;

fn card_lines(marker: String, card: &Card, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.primary)),
            Span::styled(
                card.title,
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", card.body),
            Style::default().fg(palette.text_secondary),
        )),
    ]
}

fn about_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = headline_lines(&content::ABOUT, palette);
    for card in &content::PILLARS {
        lines.extend(card_lines("◆ ".to_string(), card, palette));
        lines.push(Line::from(""));
    }
    lines
}

fn services_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = headline_lines(&content::SERVICES, palette);
    for card in &content::SERVICE_CARDS {
        lines.extend(card_lines("▸ ".to_string(), card, palette));
        lines.push(Line::from(Span::styled(
            "  Saiba mais →",
            Style::default().fg(palette.primary),
        )));
        lines.push(Line::from(""));
    }
    lines
}

/// Numbered timeline of the approach steps
fn approach_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = headline_lines(&content::APPROACH, palette);
    let last = content::APPROACH_STEPS.len() - 1;
    for (i, step) in content::APPROACH_STEPS.iter().enumerate() {
        lines.extend(card_lines(format!("({}) ", i + 1), step, palette));
        if i != last {
            lines.push(Line::from(Span::styled(
                " │",
                Style::default().fg(palette.primary),
            )));
        }
    }
    lines
}

/// Lines of the sections that scroll, empty for the others
fn scrolling_lines(section: Section, palette: &Palette) -> Vec<Line<'static>> {
    match section {
        Section::Sobre => about_lines(palette),
        Section::Servicos => services_lines(palette),
        Section::Abordagem => approach_lines(palette),
        Section::Inicio | Section::Depoimentos | Section::Contato => Vec::new(),
    }
}

/// Rows the lines take once word-wrapped to `width`
fn wrapped_height(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            if text.trim().is_empty() {
                1
            } else {
                wrap_text(&text, width).len()
            }
        })
        .sum()
}

fn scroll_limit(lines: &[Line], area: Rect) -> usize {
    let width = area.width.saturating_sub(2 * CONTENT_PADDING);
    wrapped_height(lines, width).saturating_sub(usize::from(area.height))
}

/// Furthest `section` can scroll when drawn in `area`
pub fn max_scroll(section: Section, area: Rect) -> usize {
    scroll_limit(&scrolling_lines(section, &Palette::DARK), area)
}

/// Draw the "Sobre", "Serviços" or "Abordagem" section at its scroll offset
pub fn draw_text_section(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let lines = scrolling_lines(app.state.current_section, &palette);
    let offset = app.state.scroll_offset.min(scroll_limit(&lines, area));
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
        .block(Block::default().padding(Padding::horizontal(CONTENT_PADDING)));
    frame.render_widget(paragraph, area);
}

/// Carousel position dots, current one filled
pub fn dots(len: usize, current: usize) -> String {
    (0..len)
        .map(|i| if i == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn testimonial_lines(testimonial: &Testimonial, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            testimonial.name,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            testimonial.stars(),
            Style::default().fg(palette.primary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", testimonial.text),
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            testimonial.image_ref,
            Style::default().fg(palette.border),
        )),
    ]
}

/// Draw the "Depoimentos" section with the carousel
pub fn draw_testimonials(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let carousel = &app.state.carousel;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Headline
            Constraint::Min(6),    // Card
            Constraint::Length(1), // Dots
            Constraint::Length(1), // Hint
        ])
        .horizontal_margin(2)
        .split(area);

    frame.render_widget(
        Paragraph::new(headline_lines(&content::TESTIMONIALS_HEADLINE, &palette))
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let lines = carousel
        .current()
        .map(|t| testimonial_lines(t, &palette))
        .unwrap_or_default();
    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(Span::styled(" ‹ [ ", Style::default().fg(palette.primary)))
                .title_top(
                    Line::from(Span::styled(" ] › ", Style::default().fg(palette.primary)))
                        .right_aligned(),
                )
                .padding(Padding::uniform(1))
                .style(Style::default().bg(palette.surface)),
        );
    frame.render_widget(card, rows[1]);

    frame.render_widget(
        Paragraph::new(dots(carousel.len(), carousel.index()))
            .style(Style::default().fg(palette.primary))
            .alignment(Alignment::Center),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new("[ / ]:anterior/próximo  1-3:ir para")
            .style(Style::default().fg(palette.text_secondary))
            .alignment(Alignment::Center),
        rows[3],
    );
}
