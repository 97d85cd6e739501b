use std::collections::BTreeMap;

use ratatui::style::Color;

use crate::color::parse_color;

#[derive(Clone)]
pub struct Theme {
    pub bg: Color,
    pub bg_light: Color,
    pub fg: Color,
    pub fg_dim: Color,

    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub cyan: Color,

    pub border_active: Color,
    pub border_inactive: Color,
    pub status_bg: Color,
    pub cursor_line: Color,

    pub dir_color: Color,
    pub file_color: Color,
    /// Color for markers whose record has none.
    pub icon_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            bg: Color::Rgb(11, 14, 20),
            bg_light: Color::Rgb(15, 19, 26),
            fg: Color::Rgb(191, 189, 182),
            fg_dim: Color::Rgb(86, 91, 102),
            red: Color::Rgb(240, 113, 120),
            green: Color::Rgb(170, 217, 76),
            yellow: Color::Rgb(230, 180, 80),
            blue: Color::Rgb(89, 194, 255),
            cyan: Color::Rgb(57, 186, 230),
            border_active: Color::Rgb(89, 194, 255),
            border_inactive: Color::Rgb(60, 65, 74),
            status_bg: Color::Rgb(17, 21, 28),
            cursor_line: Color::Rgb(27, 58, 91),
            dir_color: Color::Rgb(89, 194, 255),
            file_color: Color::Rgb(191, 189, 182),
            icon_color: Color::Rgb(148, 163, 167),
        }
    }
}

impl Theme {
    /// Default palette with the config's `[theme]` entries applied.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut theme = Self::default();
        for (key, value) in overrides {
            let Some(color) = parse_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring unparsable theme color");
                continue;
            };
            match theme.slot_mut(key) {
                Some(slot) => *slot = color,
                None => tracing::warn!(key = %key, "unknown theme color"),
            }
        }
        theme
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Color> {
        Some(match key {
            "bg" => &mut self.bg,
            "bg_light" => &mut self.bg_light,
            "fg" => &mut self.fg,
            "fg_dim" => &mut self.fg_dim,
            "red" => &mut self.red,
            "green" => &mut self.green,
            "yellow" => &mut self.yellow,
            "blue" => &mut self.blue,
            "cyan" => &mut self.cyan,
            "border_active" => &mut self.border_active,
            "border_inactive" => &mut self.border_inactive,
            "status_bg" => &mut self.status_bg,
            "cursor_line" => &mut self.cursor_line,
            "dir_color" => &mut self.dir_color,
            "file_color" => &mut self.file_color,
            "icon_color" => &mut self.icon_color,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply() {
        let mut o = BTreeMap::new();
        o.insert("fg".to_string(), "#ffffff".to_string());
        o.insert("icon_color".to_string(), "hsl(0, 100%, 50%)".to_string());
        let t = Theme::with_overrides(&o);
        assert_eq!(t.fg, Color::Rgb(255, 255, 255));
        assert_eq!(t.icon_color, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn bad_overrides_are_skipped() {
        let mut o = BTreeMap::new();
        o.insert("fg".to_string(), "nope".to_string());
        o.insert("nonexistent".to_string(), "#000000".to_string());
        let t = Theme::with_overrides(&o);
        assert_eq!(t.fg, Theme::default().fg);
    }

    #[test]
    fn default_theme_has_distinct_colors() {
        let t = Theme::default();
        assert_ne!(t.bg, t.fg);
        assert_ne!(t.red, t.green);
        assert_ne!(t.blue, t.yellow);
    }
}
