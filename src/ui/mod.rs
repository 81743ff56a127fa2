//! UI module for rendering the TUI

mod components;
mod forms;
mod hero;
mod layout;
mod sections;

use crate::app::App;
use crate::state::Section;
use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};
use std::time::Instant;

/// Furthest `section` can scroll in a terminal of the given size
pub fn max_scroll(section: Section, terminal: Rect) -> usize {
    let (_, main_area, _) = layout::create_layout(terminal);
    sections::max_scroll(section, main_area)
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let now = Instant::now();
    let area = frame.area();
    let palette = app.theme.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let (header_area, main_area, status_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    // Draw main content based on current section
    match app.state.current_section {
        Section::Inicio => hero::draw(frame, main_area, app),
        Section::Sobre | Section::Servicos | Section::Abordagem => {
            sections::draw_text_section(frame, main_area, app)
        }
        Section::Depoimentos => sections::draw_testimonials(frame, main_area, app),
        Section::Contato => forms::draw_contact(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays, topmost last
    if app.state.menu_open {
        layout::draw_menu(frame, app, &palette);
    }
    if app.loading_visible() {
        components::render_loading_dialog(frame, app.spinner_frame(now), &palette);
    }
    if let Some(notification) = app.state.notifier.current() {
        let remaining = app.state.notifier.remaining_percent(now);
        components::render_notification(frame, notification, remaining, &palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::SimulatedContactClient;
    use crate::state::{MemoryThemeStore, Theme, ThemeState};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        let theme = ThemeState::init(Box::new(MemoryThemeStore::default()), Theme::Dark);
        let mut app = App::with_parts(
            Arc::new(SimulatedContactClient::new()),
            theme,
            Instant::now(),
        );
        app.intro_state = None;
        app
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_section_renders_its_copy() {
        let mut app = app();
        let expected = [
            (Section::Inicio, "Agende uma Avaliação Inovadora"),
            (Section::Sobre, "Medicina Regenerativa"),
            (Section::Servicos, "Terapia Regenerativa Celular"),
            (Section::Abordagem, "Design da Solução"),
            (Section::Depoimentos, "Marina Santos"),
            (Section::Contato, "Agende sua Consulta Inicial"),
        ];
        for (section, text) in expected {
            app.state.go_to(section);
            let screen = render(&app);
            assert!(screen.contains(text), "{section:?} should show {text:?}");
        }
    }

    #[test]
    fn test_testimonial_card_titles_sit_on_both_corners() {
        let mut app = app();
        app.state.go_to(Section::Depoimentos);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect();
        let top = rows
            .iter()
            .find(|row| row.contains("‹ ["))
            .expect("card top border");
        let column = |pattern: &str| top[..top.find(pattern).unwrap()].chars().count();
        let middle = usize::from(buffer.area.width) / 2;
        assert!(column("‹ [") < middle);
        assert!(column("] ›") > middle);
    }

    #[test]
    fn test_notification_is_drawn() {
        let mut app = app();
        app.state.notifier.error("Falhou o envio", Instant::now());
        assert!(render(&app).contains("Falhou o envio"));
    }

    #[test]
    fn test_menu_overlay_is_drawn() {
        let mut app = app();
        app.state.open_menu();
        assert!(render(&app).contains("Menu"));
    }

    #[test]
    fn test_invalid_field_error_is_drawn() {
        let mut app = app();
        app.state.start_contact();
        app.state.form.focus(2);
        app.state.form.set_active_input("nope");
        app.state.form.blur_active();
        assert!(render(&app).contains("Por favor, insira um e-mail válido"));
    }

    #[test]
    fn test_renders_in_a_tiny_terminal() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
