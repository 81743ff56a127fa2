//! Platform-specific configuration

use crate::state::Theme;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Theme toggle shortcut display
/// - macOS: "Cmd+T"
/// - Linux/Windows: "Ctrl+T"
#[cfg(target_os = "macos")]
pub const THEME_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const THEME_SHORTCUT: &str = "Ctrl+T";

/// Ambient light/dark preference of the terminal.
///
/// Uses `COLORFGBG` ("fg;bg") when the terminal exports it; terminals that
/// don't are assumed dark.
pub fn ambient_theme() -> Theme {
    theme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn theme_from_colorfgbg(value: Option<&str>) -> Theme {
    let background = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        // 7 (white) and 9-15 (bright colours) are light backgrounds
        Some(7) | Some(9..=15) => Theme::Light,
        _ => Theme::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_is_dark() {
        assert_eq!(theme_from_colorfgbg(None), Theme::Dark);
    }

    #[test]
    fn test_dark_background() {
        assert_eq!(theme_from_colorfgbg(Some("15;0")), Theme::Dark);
        assert_eq!(theme_from_colorfgbg(Some("7;default;0")), Theme::Dark);
    }

    #[test]
    fn test_light_background() {
        assert_eq!(theme_from_colorfgbg(Some("0;15")), Theme::Light);
        assert_eq!(theme_from_colorfgbg(Some("0;7")), Theme::Light);
    }

    #[test]
    fn test_garbage_is_dark() {
        assert_eq!(theme_from_colorfgbg(Some("default")), Theme::Dark);
        assert_eq!(theme_from_colorfgbg(Some("")), Theme::Dark);
    }
}
