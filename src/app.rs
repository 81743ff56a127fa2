//! Application state and core logic

use crate::config::{ConfigThemeStore, SiteConfig};
use crate::contact::{ContactSubmitter, SimulatedContactClient};
use crate::platform;
use crate::state::{
    content, AppState, Form, IntroState, MemoryThemeStore, Section, Settlement, SubmitOutcome,
    ThemeState, ThemeStore, SUCCESS_MESSAGE,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Spinner frames for the loading overlay
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const SPINNER_FRAME_DURATION: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Theme preference and its store
    pub theme: ThemeState,
    /// Where contact requests are delivered
    submitter: Arc<dyn ContactSubmitter>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Hero intro animation, dropped once it completes
    pub intro_state: Option<IntroState>,
    /// Last known terminal size as (height, width)
    pub terminal_size: Option<(u16, u16)>,
    started_at: Instant,
}

impl App {
    /// Create the app with the simulated client and the persisted theme
    pub fn new() -> Self {
        let store: Box<dyn ThemeStore> = match SiteConfig::config_path() {
            Some(path) => Box::new(ConfigThemeStore::new(path)),
            None => {
                tracing::warn!("no config directory found, theme will not be persisted");
                Box::new(MemoryThemeStore::default())
            }
        };
        let theme = ThemeState::init(store, platform::ambient_theme());
        let submitter = Arc::new(SimulatedContactClient::from_env());
        Self::with_parts(submitter, theme, Instant::now())
    }

    /// Create the app from explicit collaborators
    pub fn with_parts(
        submitter: Arc<dyn ContactSubmitter>,
        theme: ThemeState,
        now: Instant,
    ) -> Self {
        Self {
            state: AppState::new(now),
            theme,
            submitter,
            quit: false,
            copy_message: None,
            intro_state: Some(IntroState::new(now)),
            terminal_size: None,
            started_at: now,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the intro animation is still running
    pub fn is_animating(&self) -> bool {
        self.intro_state.is_some()
    }

    /// Loading overlay is shown exactly while a request is in flight
    pub fn loading_visible(&self) -> bool {
        self.state.submission.is_submitting()
    }

    pub fn spinner_frame(&self, now: Instant) -> &'static str {
        let elapsed = now.saturating_duration_since(self.started_at);
        let index = (elapsed.as_millis() / SPINNER_FRAME_DURATION.as_millis()) as usize;
        SPINNER_FRAMES[index % SPINNER_FRAMES.len()]
    }

    /// Furthest the current section can scroll at the last known terminal size
    pub fn max_scroll(&self) -> usize {
        // terminal_size is (height, width)
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        crate::ui::max_scroll(self.state.current_section, Rect::new(0, 0, width, height))
    }

    /// Advance every timed behavior to `now` and collect a settled submission
    pub fn tick(&mut self, now: Instant) {
        if let Some(ref mut intro) = self.intro_state {
            intro.update(now);
            if intro.is_complete() {
                self.intro_state = None;
            }
        }
        self.state.notifier.tick(now);
        self.state.carousel.tick(now);
        self.poll_submission(now);
    }

    /// Stop background timers before exit
    pub fn shutdown(&mut self) {
        self.state.carousel.stop();
        tracing::debug!("carousel stopped");
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    /// Handle a key event at an explicit time
    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global quit: Ctrl+C
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        // Any key skips the intro
        if self.intro_state.take().is_some() {
            return;
        }

        // Clear any status messages on key press
        self.copy_message = None;

        if ctrl && key.code == KeyCode::Char('t') {
            self.toggle_theme();
            return;
        }

        if ctrl && key.code == KeyCode::Char('s') {
            if self.state.current_section == Section::Contato && !self.state.menu_open {
                self.submit_contact(now);
            }
            return;
        }

        // Esc closes a visible notification before anything else
        if key.code == KeyCode::Esc && self.state.notifier.is_visible() {
            self.state.notifier.dismiss();
            return;
        }

        if self.state.menu_open {
            self.handle_menu_key(key);
        } else if self.state.is_form_focused() {
            self.handle_form_key(key, now);
        } else {
            self.handle_navigation_key(key);
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.menu_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.menu_up(),
            KeyCode::Enter => self.state.select_menu_item(),
            KeyCode::Esc | KeyCode::Char('m') => self.state.close_menu(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) {
        let section = self.state.current_section;
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.state.next_section(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.state.prev_section(),
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.max_scroll();
                self.state.scroll_down(max);
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Char('m') => self.state.open_menu(),
            KeyCode::Char('t') => self.toggle_theme(),
            // Hero call to action
            KeyCode::Enter if section == Section::Inicio => self.state.start_contact(),
            KeyCode::Enter | KeyCode::Char('i') if section == Section::Contato => {
                self.state.enter_form()
            }
            KeyCode::Char('y') if section == Section::Contato => self.copy_whatsapp(),
            KeyCode::Char(']') if section == Section::Depoimentos => self.state.carousel.next(),
            KeyCode::Char('[') if section == Section::Depoimentos => self.state.carousel.prev(),
            KeyCode::Char(c @ '1'..='9') if section == Section::Depoimentos => {
                if let Some(digit) = c.to_digit(10) {
                    self.state.carousel.select(digit as usize - 1);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        let on_submit = self.state.form.is_submit_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if on_submit => self.submit_contact(now),
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Esc => self.state.leave_form(),
            KeyCode::Backspace if !on_submit => self.state.form.backspace(),
            KeyCode::Char(c) if !on_submit && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c)
            }
            _ => {}
        }
    }

    /// Validate and send the contact form.
    ///
    /// Pressing submit blurs the focused field first. A rejected form raises
    /// the first failing rule as an error notification.
    pub fn submit_contact(&mut self, now: Instant) {
        self.state.form.blur_active();
        let submitter = Arc::clone(&self.submitter);
        match self.state.submission.submit(&self.state.form, submitter) {
            SubmitOutcome::Started(id) => {
                tracing::debug!(request_id = %id, "loading overlay shown");
            }
            SubmitOutcome::Rejected(err) => {
                self.state.notifier.error(err.to_string(), now);
            }
            SubmitOutcome::Ignored => {}
        }
    }

    /// Apply the result of a settled submission, if any
    pub fn poll_submission(&mut self, now: Instant) {
        let Some(settlement) = self.state.submission.poll() else {
            return;
        };

        match settlement {
            Settlement::Succeeded => {
                self.state.form.clear();
                self.state.notifier.success(SUCCESS_MESSAGE, now);
            }
            Settlement::Failed(err) => {
                // Values stay so the user can retry
                tracing::warn!("contact submission failed: {err}");
                self.state.notifier.error(err.user_message(), now);
            }
        }
        self.state.submission.finish();
    }

    fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        tracing::debug!(theme = theme.as_str(), "theme toggled");
    }

    fn copy_whatsapp(&mut self) {
        match self.copy_to_clipboard(content::WHATSAPP) {
            Ok(()) => {
                self.copy_message = Some(format!("WhatsApp copiado: {}", content::WHATSAPP));
            }
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err:#}");
                self.copy_message = Some("Não foi possível copiar".to_string());
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
