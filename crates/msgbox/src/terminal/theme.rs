use crate::icon;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Mono,
}

impl ThemeName {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Some(ThemeName::Default),
            "mono" => Some(ThemeName::Mono),
            _ => None,
        }
    }
}

/// Styles used by the terminal shell. Window classes map to border styles, the way a
/// stylesheet would skin them.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Style,
    pub title: Style,
    pub close_tool: Style,
    pub message: Style,
    pub button: Style,
    pub focused_button: Style,
    pub input: Style,
    pub gauge: Style,
    pub mask: Style,
    class_styles: Vec<(String, Style)>,
    colored_icons: bool,
}

const INPUT_BG: Color = Color::Rgb(40, 40, 40);

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self {
                border: Style::default().fg(Color::Gray),
                title: Style::default().add_modifier(Modifier::BOLD),
                close_tool: Style::default().fg(Color::DarkGray),
                message: Style::default(),
                button: Style::default(),
                focused_button: Style::default().add_modifier(Modifier::REVERSED),
                input: Style::default().bg(INPUT_BG),
                gauge: Style::default().fg(Color::Cyan).bg(INPUT_BG),
                mask: Style::default().add_modifier(Modifier::DIM),
                class_styles: Vec::new(),
                colored_icons: true,
            },
            ThemeName::Mono => Self {
                border: Style::default(),
                title: Style::default().add_modifier(Modifier::BOLD),
                close_tool: Style::default(),
                message: Style::default(),
                button: Style::default(),
                focused_button: Style::default().add_modifier(Modifier::REVERSED),
                input: Style::default().add_modifier(Modifier::UNDERLINED),
                gauge: Style::default().add_modifier(Modifier::REVERSED),
                mask: Style::default().add_modifier(Modifier::DIM),
                class_styles: Vec::new(),
                colored_icons: false,
            },
        }
    }

    pub fn with_class_style(mut self, class: impl Into<String>, style: Style) -> Self {
        self.class_styles.push((class.into(), style));
        self
    }

    /// Border style with every matching window class patched on top.
    pub fn border_for<'a, I>(&self, classes: I) -> Style
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut style = self.border;
        for class in classes {
            for (name, patch) in &self.class_styles {
                if name == class {
                    style = style.patch(*patch);
                }
            }
        }
        style
    }

    pub fn icon_style(&self, class: &str) -> Style {
        if !self.colored_icons {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        let color = match class {
            icon::INFO => Color::Cyan,
            icon::WARNING => Color::Yellow,
            icon::QUESTION => Color::Blue,
            icon::ERROR => Color::Red,
            _ => Color::Reset,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::named(ThemeName::Default)
    }
}

pub fn icon_glyph(class: &str) -> Option<&'static str> {
    match class {
        icon::INFO => Some("i"),
        icon::WARNING => Some("!"),
        icon::QUESTION => Some("?"),
        icon::ERROR => Some("x"),
        _ => None,
    }
}
