//! Layout components (header, status bar, section menu)

use crate::app::App;
use crate::platform::THEME_SHORTCUT;
use crate::state::{content, Palette, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the practice name and section tabs
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let name_width = content::PRACTICE_NAME.chars().count() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(name_width),
            Constraint::Min(0),
            Constraint::Length(4), // Theme toggle
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", content::PRACTICE_NAME),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let titles = Section::ALL.iter().map(|s| Line::from(s.label()));
    let tabs = Tabs::new(titles)
        .select(app.state.current_section.index())
        .style(Style::default().fg(palette.text_secondary))
        .highlight_style(
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("·", Style::default().fg(palette.border)));
    frame.render_widget(tabs, chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} ", app.theme.theme().toggle().symbol()),
            Style::default().fg(palette.text),
        )),
        chunks[2],
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let mut spans = vec![Span::raw(" ")];

    let hints = get_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(palette.text_secondary)));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.success)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.surface));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:sair ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget = Paragraph::new(quit_hint)
        .style(Style::default().bg(palette.surface).fg(palette.text_secondary));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current focus and section
fn get_hints(app: &App) -> String {
    if app.intro_state.is_some() {
        return "Pressione qualquer tecla para pular".to_string();
    }
    if app.state.menu_open {
        return "j/k:mover  Enter:ir  Esc:fechar".to_string();
    }
    if app.state.is_form_focused() {
        return format!("Tab:próximo  Esc:sair do formulário  {THEME_SHORTCUT}:tema");
    }

    let section_hint = match app.state.current_section {
        Section::Inicio => "Enter:agendar  ",
        Section::Depoimentos => "[/]:depoimento  ",
        Section::Contato => "Enter:formulário  y:copiar WhatsApp  ",
        Section::Sobre | Section::Servicos | Section::Abordagem => "j/k:rolar  ",
    };
    format!("{section_hint}h/l:seção  m:menu  t:tema  q:sair")
}

/// Draw the section menu overlay
pub fn draw_menu(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let width = 24u16.min(area.width);
    let height = (Section::ALL.len() as u16 + 2).min(area.height);
    let menu_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 3.min(area.height.saturating_sub(height)),
        width,
        height,
    };

    frame.render_widget(Clear, menu_area);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|s| ListItem::new(format!(" {}", s.label())))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.primary))
                .style(Style::default().bg(palette.surface)),
        )
        .style(Style::default().fg(palette.text))
        .highlight_style(
            Style::default()
                .fg(palette.background)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_selected(Some(app.state.menu_index));
    frame.render_stateful_widget(list, menu_area, &mut list_state);
}
