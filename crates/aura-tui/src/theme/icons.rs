//! Icon sets for Unicode and ASCII fallback.

use aura_engine::IconStyle;

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Standard Unicode symbols (default).
    #[default]
    Unicode,
    /// ASCII-only fallback (also used with `NO_COLOR`).
    Ascii,
}

impl IconMode {
    /// Resolve the configured style, letting `NO_COLOR` force ASCII.
    pub fn resolve(style: IconStyle) -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::Ascii;
        }
        match style {
            IconStyle::Unicode => Self::Unicode,
            IconStyle::Ascii => Self::Ascii,
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    fn pick(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        match self.mode {
            IconMode::Unicode => unicode,
            IconMode::Ascii => ascii,
        }
    }

    // === Sidebar ===

    /// Brand mark, also used as the assistant avatar.
    pub fn brand(&self) -> &'static str {
        self.pick("✦", "*")
    }

    pub fn new_chat(&self) -> &'static str {
        self.pick("✚", "+")
    }

    pub fn explore(&self) -> &'static str {
        self.pick("◎", "*")
    }

    pub fn library(&self) -> &'static str {
        self.pick("▤", "#")
    }

    pub fn history(&self) -> &'static str {
        self.pick("◷", "@")
    }

    pub fn panel_close(&self) -> &'static str {
        self.pick("«", "<<")
    }

    pub fn panel_open(&self) -> &'static str {
        self.pick("»", ">>")
    }

    // === Composer ===

    pub fn image(&self) -> &'static str {
        self.pick("▣", "[img]")
    }

    pub fn video(&self) -> &'static str {
        self.pick("▶", "[vid]")
    }

    pub fn globe(&self) -> &'static str {
        self.pick("◍", "[api]")
    }

    pub fn send(&self) -> &'static str {
        self.pick("➤", ">")
    }

    pub fn paperclip(&self) -> &'static str {
        self.pick("⎘", "@")
    }

    pub fn remove(&self) -> &'static str {
        self.pick("×", "x")
    }

    pub fn cursor(&self) -> &'static str {
        self.pick("█", "_")
    }

    // === Activity ===

    /// Spinner frame for the given tick.
    pub fn spinner(&self, tick: usize) -> &'static str {
        const UNICODE: [&str; 4] = ["◐", "◓", "◑", "◒"];
        const ASCII: [&str; 4] = ["|", "/", "-", "\\"];
        match self.mode {
            IconMode::Unicode => UNICODE[tick % UNICODE.len()],
            IconMode::Ascii => ASCII[tick % ASCII.len()],
        }
    }
}
