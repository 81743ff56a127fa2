//! Light/dark theme with a persisted preference

use anyhow::Result;
use ratatui::style::Color;

/// Colour scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything else is treated as unset
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

/// Colours the UI draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub primary: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(18, 20, 24),
        surface: Color::Rgb(26, 29, 36),
        text: Color::Rgb(226, 232, 240),
        text_secondary: Color::Rgb(148, 163, 184),
        primary: Color::Rgb(0, 240, 196),
        border: Color::Rgb(55, 65, 81),
        success: Color::Rgb(34, 197, 94),
        error: Color::Rgb(239, 68, 68),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(249, 250, 251),
        surface: Color::Rgb(255, 255, 255),
        text: Color::Rgb(30, 41, 59),
        text_secondary: Color::Rgb(71, 85, 105),
        primary: Color::Rgb(0, 212, 168),
        border: Color::Rgb(209, 213, 219),
        success: Color::Rgb(22, 163, 74),
        error: Color::Rgb(220, 38, 38),
    };
}

/// Where the theme preference is read from and written to
pub trait ThemeStore: Send {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme) -> Result<()>;
}

/// Current theme plus the store it writes through to
pub struct ThemeState {
    theme: Theme,
    store: Box<dyn ThemeStore>,
}

impl ThemeState {
    /// Use the stored preference, or `fallback` when none is stored
    pub fn init(store: Box<dyn ThemeStore>, fallback: Theme) -> Self {
        let theme = match store.load() {
            Some(theme) => theme,
            None => {
                tracing::debug!(theme = fallback.as_str(), "no stored theme, using ambient preference");
                fallback
            }
        };
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Flip the theme and persist it; a failed write only logs
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        if let Err(err) = self.store.save(self.theme) {
            tracing::warn!("failed to persist theme: {err:#}");
        }
        self.theme
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

/// In-memory store, for tests and for running without a config dir
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    pub saved: Option<Theme>,
    pub writes: usize,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.saved
    }

    fn save(&mut self, theme: Theme) -> Result<()> {
        self.saved = Some(theme);
        self.writes += 1;
        Ok(())
    }
}
