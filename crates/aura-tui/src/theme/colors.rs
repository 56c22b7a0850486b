//! Color palettes for the TUI.
//!
//! The default palette follows the purple-to-blue gradient of the Aura brand.

use aura_engine::ThemeName;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub secondary: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Transcript
    pub user_bubble: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::aura()
    }
}

impl Theme {
    /// Palette for a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Aura => Self::aura(),
            ThemeName::Light => Self::light(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Dark theme with purple and blue accents (default).
    pub fn aura() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(17, 17, 27),      // #11111b
            surface: Color::Rgb(36, 32, 56),   // #242038
            overlay: Color::Rgb(55, 50, 82),   // #373252

            // Foregrounds
            text: Color::Rgb(229, 231, 235),    // #e5e7eb
            subtext: Color::Rgb(180, 184, 196), // #b4b8c4
            muted: Color::Rgb(115, 118, 135),   // #737687

            // Accents
            primary: Color::Rgb(168, 85, 247),   // #a855f7 (purple)
            secondary: Color::Rgb(59, 130, 246), // #3b82f6 (blue)

            // Semantic
            success: Color::Rgb(134, 239, 172), // #86efac
            warning: Color::Rgb(253, 224, 71),  // #fde047
            error: Color::Rgb(248, 113, 113),   // #f87171

            user_bubble: Color::Rgb(46, 38, 72), // #2e2648

            // Borders
            border: Color::Rgb(63, 63, 90),            // #3f3f5a
            border_focused: Color::Rgb(168, 85, 247),  // #a855f7
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(250, 250, 252),    // #fafafc
            surface: Color::Rgb(243, 240, 252), // #f3f0fc
            overlay: Color::Rgb(229, 225, 245), // #e5e1f5

            // Foregrounds
            text: Color::Rgb(31, 41, 55),       // #1f2937
            subtext: Color::Rgb(75, 85, 99),    // #4b5563
            muted: Color::Rgb(140, 145, 160),   // #8c91a0

            // Accents
            primary: Color::Rgb(147, 51, 234),  // #9333ea
            secondary: Color::Rgb(37, 99, 235), // #2563eb

            // Semantic
            success: Color::Rgb(22, 163, 74),   // #16a34a
            warning: Color::Rgb(202, 138, 4),   // #ca8a04
            error: Color::Rgb(220, 38, 38),     // #dc2626

            user_bubble: Color::Rgb(255, 255, 255),

            // Borders
            border: Color::Rgb(209, 213, 219),        // #d1d5db
            border_focused: Color::Rgb(147, 51, 234), // #9333ea
        }
    }

    /// High contrast theme.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),
            overlay: Color::Rgb(40, 40, 40),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Magenta,
            secondary: Color::Cyan,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            user_bubble: Color::Rgb(30, 30, 30),

            border: Color::White,
            border_focused: Color::Magenta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_aura() {
        let theme = Theme::default();
        assert!(matches!(theme.primary, Color::Rgb(168, 85, 247)));
    }

    #[test]
    fn test_from_name() {
        assert!(matches!(
            Theme::from_name(ThemeName::Light).base,
            Color::Rgb(250, 250, 252)
        ));
        assert!(matches!(
            Theme::from_name(ThemeName::HighContrast).base,
            Color::Black
        ));
    }
}
