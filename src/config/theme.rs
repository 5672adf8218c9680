use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub focus: FocusStyle,
    pub form: FormStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
            focus: FocusStyle::default(),
            form: FormStyle::default(),
        }
    }
}

impl Theme {
    /// Built-in theme by name; unknown names get the default.
    pub fn preset(name: &str) -> Self {
        match name {
            "vibrant" => Self::vibrant(),
            _ => Self::default(),
        }
    }

    pub fn vibrant() -> Self {
        Self {
            name: "vibrant".to_string(),
            colors: ThemeColors {
                foreground: HexColor::new("#e0e0e0"),
                primary: HexColor::new("#ff6b6b"),
                accent: HexColor::new("#ffe66d"),
                error: HexColor::new("#ff6b6b"),
                muted: HexColor::new("#6c757d"),
            },
            focus: FocusStyle {
                focused_border: HexColor::new("#ff6b6b"),
                unfocused_border: HexColor::new("#3d3d4d"),
                focused_title: HexColor::new("#ffe66d"),
                unfocused_title: HexColor::new("#6c757d"),
                use_bold_focused: true,
            },
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub foreground: HexColor,
    pub primary: HexColor,
    pub accent: HexColor,
    pub error: HexColor,
    pub muted: HexColor,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            foreground: HexColor::new("#c0caf5"),
            primary: HexColor::new("#7aa2f7"),
            accent: HexColor::new("#bb9af7"),
            error: HexColor::new("#f7768e"),
            muted: HexColor::new("#565f89"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusStyle {
    pub focused_border: HexColor,
    pub unfocused_border: HexColor,
    pub focused_title: HexColor,
    pub unfocused_title: HexColor,
    pub use_bold_focused: bool,
}

impl Default for FocusStyle {
    fn default() -> Self {
        Self {
            focused_border: HexColor::new("#7aa2f7"),
            unfocused_border: HexColor::new("#3b4261"),
            focused_title: HexColor::new("#bb9af7"),
            unfocused_title: HexColor::new("#565f89"),
            use_bold_focused: true,
        }
    }
}

/// Colors specific to the add-good form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormStyle {
    /// Border of a field whose error flag is set
    pub error_border: HexColor,
    pub button_fg: HexColor,
    pub button_bg: HexColor,
    pub button_focused_bg: HexColor,
    pub placeholder_fg: HexColor,
    pub cursor: char,
}

impl Default for FormStyle {
    fn default() -> Self {
        Self {
            error_border: HexColor::new("#f7768e"),
            button_fg: HexColor::new("#1a1b26"),
            button_bg: HexColor::new("#565f89"),
            button_focused_bg: HexColor::new("#7aa2f7"),
            placeholder_fg: HexColor::new("#565f89"),
            cursor: '▏',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(hex: &str) -> Self {
        Self(hex.to_string())
    }

    pub fn to_color(&self) -> Color {
        self.parse_hex().unwrap_or(Color::Reset)
    }

    fn parse_hex(&self) -> Option<Color> {
        let hex = self.0.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color::Rgb(r, g, b))
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self("#ffffff".to_string())
    }
}

impl Theme {
    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus.focused_border.to_color()
        } else {
            self.focus.unfocused_border.to_color()
        };

        let mut style = Style::default().fg(color);
        if focused && self.focus.use_bold_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn title_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus.focused_title.to_color()
        } else {
            self.focus.unfocused_title.to_color()
        };

        let mut style = Style::default().fg(color);
        if focused && self.focus.use_bold_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Border for a form field. The error decoration wins over focus.
    pub fn field_border_style(&self, focused: bool, has_error: bool) -> Style {
        if has_error {
            let mut style = Style::default().fg(self.form.error_border.to_color());
            if focused {
                style = style.add_modifier(Modifier::BOLD);
            }
            style
        } else {
            self.border_style(focused)
        }
    }

    pub fn button_style(&self, focused: bool) -> Style {
        let bg = if focused {
            self.form.button_focused_bg.to_color()
        } else {
            self.form.button_bg.to_color()
        };
        Style::default()
            .fg(self.form.button_fg.to_color())
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.form.placeholder_fg.to_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parsing() {
        let color = HexColor::new("#ff0000");
        assert_eq!(color.to_color(), Color::Rgb(255, 0, 0));

        let color = HexColor::new("00ff00");
        assert_eq!(color.to_color(), Color::Rgb(0, 255, 0));

        let color = HexColor::new("#zzz");
        assert_eq!(color.to_color(), Color::Reset);
    }

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.name, "default");
        assert!(theme.focus.use_bold_focused);
    }

    #[test]
    fn test_theme_serialization() {
        let theme = Theme::default();
        let toml_str = toml::to_string_pretty(&theme).unwrap();
        let parsed: Theme = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.name, theme.name);
        assert_eq!(parsed.form.error_border, theme.form.error_border);
    }

    #[test]
    fn test_partial_theme_fills_defaults() {
        let parsed: Theme = toml::from_str("[form]\nerror_border = \"#ff0000\"\n").unwrap();
        assert_eq!(parsed.form.error_border.to_color(), Color::Rgb(255, 0, 0));
        assert_eq!(parsed.name, "default");
    }

    #[test]
    fn test_error_border_overrides_focus() {
        let theme = Theme::default();
        let style = theme.field_border_style(true, true);
        assert_eq!(style.fg, Some(theme.form.error_border.to_color()));

        let style = theme.field_border_style(true, false);
        assert_eq!(style.fg, Some(theme.focus.focused_border.to_color()));
    }

    #[test]
    fn test_presets() {
        assert_eq!(Theme::preset("vibrant").name, "vibrant");
        assert_eq!(Theme::preset("nope").name, "default");
    }
}
