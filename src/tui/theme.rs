use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Task index caption
    pub index: Color,
    /// Caption of a struck-through task
    pub index_struck: Color,
    /// Border of the focused list while navigating
    pub border_navigate: Color,
    /// Border of the focused list while editing
    pub border_edit: Color,
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Reset,
            text: Color::Reset,
            text_bright: Color::White,
            dim: Color::DarkGray,
            index: Color::Indexed(11),
            index_struck: Color::Indexed(11),
            border_navigate: Color::Indexed(12),
            border_edit: Color::Indexed(160),
            red: Color::Rgb(0xFF, 0x44, 0x44),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring malformed color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "index" => theme.index = color,
                "index_struck" => theme.index_struck = color,
                "border_navigate" => theme.border_navigate = color,
                "border_edit" => theme.border_edit = color,
                "red" => theme.red = color,
                _ => tracing::warn!(key = %key, "unknown color slot"),
            }
        }

        theme
    }
}
