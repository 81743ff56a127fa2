//! Application state definitions

use super::carousel::{TestimonialCarousel, TESTIMONIALS};
use super::forms::{ContactForm, Form, SubmissionController};
use super::notification::Notifier;
use std::time::Instant;

/// Page section shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Inicio,
    Sobre,
    Servicos,
    Abordagem,
    Depoimentos,
    Contato,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Inicio,
        Self::Sobre,
        Self::Servicos,
        Self::Abordagem,
        Self::Depoimentos,
        Self::Contato,
    ];

    pub fn index(&self) -> usize {
        match self {
            Self::Inicio => 0,
            Self::Sobre => 1,
            Self::Servicos => 2,
            Self::Abordagem => 3,
            Self::Depoimentos => 4,
            Self::Contato => 5,
        }
    }

    /// Section at `index`, wrapping around
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inicio => "Início",
            Self::Sobre => "Sobre",
            Self::Servicos => "Serviços",
            Self::Abordagem => "Abordagem",
            Self::Depoimentos => "Depoimentos",
            Self::Contato => "Contato",
        }
    }
}

/// Where keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Section navigation and global shortcuts
    #[default]
    Navigation,
    /// Typing into the contact form
    Form,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub current_section: Section,
    pub focus: Focus,
    pub menu_open: bool,
    pub menu_index: usize,
    pub scroll_offset: usize,

    // Contact form
    pub form: ContactForm,
    pub submission: SubmissionController,

    // Feedback
    pub notifier: Notifier,

    pub carousel: TestimonialCarousel,
}

impl AppState {
    pub fn new(now: Instant) -> Self {
        Self {
            current_section: Section::default(),
            focus: Focus::default(),
            menu_open: false,
            menu_index: 0,
            scroll_offset: 0,
            form: ContactForm::new(),
            submission: SubmissionController::new(),
            notifier: Notifier::new(),
            carousel: TestimonialCarousel::new(&TESTIMONIALS, now),
        }
    }

    /// Switch section, leaving the form if it was focused
    pub fn go_to(&mut self, section: Section) {
        if self.focus == Focus::Form {
            self.leave_form();
        }
        self.current_section = section;
        self.scroll_offset = 0;
    }

    pub fn next_section(&mut self) {
        self.go_to(self.current_section.next());
    }

    pub fn prev_section(&mut self) {
        self.go_to(self.current_section.prev());
    }

    /// Jump to the contact section with the first field focused
    pub fn start_contact(&mut self) {
        self.go_to(Section::Contato);
        self.enter_form();
    }

    pub fn enter_form(&mut self) {
        self.focus = Focus::Form;
        self.form.set_active_field(0);
    }

    /// Leaving the form blurs whatever field was focused
    pub fn leave_form(&mut self) {
        self.form.blur_active();
        self.focus = Focus::Navigation;
    }

    pub fn is_form_focused(&self) -> bool {
        self.focus == Focus::Form
    }

    /// Open the section menu on the current section
    pub fn open_menu(&mut self) {
        self.menu_open = true;
        self.menu_index = self.current_section.index();
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_down(&mut self) {
        self.menu_index = (self.menu_index + 1) % Section::ALL.len();
    }

    pub fn menu_up(&mut self) {
        self.menu_index = (self.menu_index + Section::ALL.len() - 1) % Section::ALL.len();
    }

    /// Go to the highlighted menu entry and close the menu
    pub fn select_menu_item(&mut self) {
        let section = Section::from_index(self.menu_index);
        self.close_menu();
        self.go_to(section);
    }

    /// Scroll down, stopping at `max`
    pub fn scroll_down(&mut self, max: usize) {
        if self.scroll_offset < max {
            self.scroll_offset += 1;
        }
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod section {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_wraps() {
            assert_eq!(Section::Contato.next(), Section::Inicio);
            assert_eq!(Section::Inicio.next(), Section::Sobre);
        }

        #[test]
        fn test_prev_wraps() {
            assert_eq!(Section::Inicio.prev(), Section::Contato);
            assert_eq!(Section::Sobre.prev(), Section::Inicio);
        }

        #[test]
        fn test_index_round_trips() {
            for section in Section::ALL {
                assert_eq!(Section::from_index(section.index()), section);
            }
        }

        #[test]
        fn test_labels_match_nav() {
            let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
            assert_eq!(
                labels,
                vec!["Início", "Sobre", "Serviços", "Abordagem", "Depoimentos", "Contato"]
            );
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_at_hero() {
            let state = AppState::new(Instant::now());
            assert_eq!(state.current_section, Section::Inicio);
            assert_eq!(state.focus, Focus::Navigation);
            assert!(!state.menu_open);
        }

        #[test]
        fn test_go_to_resets_scroll() {
            let mut state = AppState::new(Instant::now());
            state.scroll_down(10);
            state.scroll_down(10);
            state.next_section();
            assert_eq!(state.current_section, Section::Sobre);
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_scroll_down_stops_at_max() {
            let mut state = AppState::new(Instant::now());
            for _ in 0..5 {
                state.scroll_down(3);
            }
            assert_eq!(state.scroll_offset, 3);
            state.scroll_up();
            assert_eq!(state.scroll_offset, 2);
        }

        #[test]
        fn test_scroll_up_saturates() {
            let mut state = AppState::new(Instant::now());
            state.scroll_up();
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_start_contact_focuses_form() {
            let mut state = AppState::new(Instant::now());
            state.start_contact();
            assert_eq!(state.current_section, Section::Contato);
            assert!(state.is_form_focused());
            assert_eq!(state.form.active_field(), 0);
        }

        #[test]
        fn test_leaving_section_leaves_form() {
            let mut state = AppState::new(Instant::now());
            state.start_contact();
            state.prev_section();
            assert_eq!(state.current_section, Section::Depoimentos);
            assert_eq!(state.focus, Focus::Navigation);
        }

        #[test]
        fn test_leave_form_blurs_dirty_field() {
            let mut state = AppState::new(Instant::now());
            state.start_contact();
            state.form.input_char('x');
            state.form.backspace();
            state.leave_form();
            // Dirty but empty required field fails on blur
            assert!(!state.form.name.is_valid());
        }
    }

    mod menu {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_open_highlights_current_section() {
            let mut state = AppState::new(Instant::now());
            state.go_to(Section::Abordagem);
            state.open_menu();
            assert!(state.menu_open);
            assert_eq!(state.menu_index, 3);
        }

        #[test]
        fn test_menu_cursor_wraps() {
            let mut state = AppState::new(Instant::now());
            state.open_menu();
            state.menu_up();
            assert_eq!(state.menu_index, 5);
            state.menu_down();
            assert_eq!(state.menu_index, 0);
        }

        #[test]
        fn test_select_navigates_and_closes() {
            let mut state = AppState::new(Instant::now());
            state.open_menu();
            state.menu_down();
            state.menu_down();
            state.select_menu_item();
            assert!(!state.menu_open);
            assert_eq!(state.current_section, Section::Servicos);
        }
    }
}
