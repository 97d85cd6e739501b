use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::color::parse_color;
use crate::icons::{DEFAULT_SIZE, IconRecord};

/// A decoration placed in front of a list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Icon {
        glyph: char,
        color: Option<String>,
        size: u16,
    },
    /// Empty slot; the list draws its own glyph (folders).
    Placeholder,
}

impl From<&IconRecord> for Marker {
    fn from(record: &IconRecord) -> Self {
        Marker::Icon {
            glyph: record.icon,
            color: record.color.clone(),
            size: record.font_size(),
        }
    }
}

impl Marker {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Marker::Placeholder)
    }

    /// Render as a two-cell span. `fallback` is used when the marker has no
    /// color or the color cannot be parsed.
    pub fn to_span(&self, fallback: Color) -> Span<'static> {
        match self {
            Marker::Icon { glyph, color, size } => {
                let fg = color.as_deref().and_then(parse_color).unwrap_or(fallback);
                let mut style = Style::default().fg(fg);
                // Cells cannot grow, so oversized glyphs are emphasised instead.
                if *size > DEFAULT_SIZE {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Span::styled(format!("{glyph} "), style)
            }
            Marker::Placeholder => Span::raw(""),
        }
    }
}

/// A list that can carry markers in front of its rows.
///
/// Renderers only talk to this trait, so resolution logic stays independent
/// of the widget toolkit that eventually draws the rows.
pub trait MarkerHost {
    fn row_count(&self) -> usize;

    /// Extension label of a row (e.g. `.tar.gz`), if it shows one.
    fn row_extension_text(&self, row: usize) -> Option<&str>;

    /// Full visible text of a row, without markers.
    fn row_text(&self, row: usize) -> String;

    /// Remove every marker from every row.
    fn clear_markers(&mut self);

    /// Insert `marker` as the first decoration of `row`.
    fn prepend_marker(&mut self, row: usize, marker: Marker);
}
