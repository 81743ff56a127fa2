//! Contact section: the consultation form and the practice's details

use super::field_renderer::{draw_field, draw_help_text, field_height};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{content, ContactForm, Palette};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::sections::headline_lines;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Headline
            Constraint::Min(0),    // Form + info
        ])
        .split(area);

    let headline = Paragraph::new(headline_lines(&content::CONTACT, &palette))
        .wrap(Wrap { trim: true });
    frame.render_widget(headline, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    draw_form(frame, columns[0], app, &palette);
    draw_contact_info(frame, columns[1], &palette);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let form = &app.state.form;
    let focused = app.state.is_form_focused();

    let border_color = if focused {
        palette.primary
    } else {
        palette.border
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", content::FORM_TITLE),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = form.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Help
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (index, field) in fields.iter().enumerate() {
        let is_active = focused && form.active_field_index == index;
        draw_field(frame, chunks[index], field, is_active, palette);
    }

    let submit_selected = focused && form.is_submit_active();
    render_button(
        frame,
        chunks[ContactForm::SUBMIT_INDEX],
        content::SUBMIT_LABEL,
        submit_selected,
        palette,
    );

    let help = if focused {
        format!("Tab:próximo  Enter:avançar/enviar  {SUBMIT_SHORTCUT}:enviar  Esc:sair")
    } else {
        "Enter:preencher formulário".to_string()
    };
    draw_help_text(frame, chunks[ContactForm::SUBMIT_INDEX + 1], &help, palette);
}

fn draw_contact_info(frame: &mut Frame, area: Rect, palette: &Palette) {
    let heading = Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.text_secondary);

    let mut lines = vec![
        Line::from(Span::styled("Informações de Contato", heading)),
        Line::from(""),
    ];
    for (i, line) in content::ADDRESS.iter().enumerate() {
        let style = if i == 0 { text } else { muted };
        lines.push(Line::from(Span::styled(*line, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(content::PHONE, text)));
    lines.push(Line::from(vec![
        Span::styled(format!("WhatsApp: {}", content::WHATSAPP), muted),
        Span::styled("  (y copia)", Style::default().fg(palette.border)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(content::EMAIL, text)));
    lines.push(Line::from(Span::styled(content::EMAIL_NOTE, muted)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Horários de Atendimento", heading)));
    for line in content::OPENING_HOURS {
        lines.push(Line::from(Span::styled(line, muted)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        content::FIRST_CONSULTATION.title,
        heading,
    )));
    lines.push(Line::from(Span::styled(content::FIRST_CONSULTATION.body, muted)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(content::FOOTER, Style::default().fg(palette.border))));

    let info = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.surface)),
        );
    frame.render_widget(info, area);
}
