use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

use super::util::truncate;

pub(super) fn render_working_set(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let ws = &app.working_set;
    let is_focused = app.focus == Focus::WorkingSet;
    let border_color = if is_focused {
        t.border_active
    } else {
        t.border_inactive
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" 󰈔 Open Files ({}) ", ws.len()))
        .title_style(Style::default().fg(if is_focused { t.fg } else { t.cyan }));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if ws.is_empty() {
        let hint = Paragraph::new(Span::styled(
            " Enter on a file in the tree opens it here",
            Style::default().fg(t.fg_dim),
        ));
        f.render_widget(hint, inner);
        return;
    }

    let width = inner.width as usize;

    let items: Vec<ListItem> = ws
        .rows()
        .iter()
        .enumerate()
        .skip(ws.offset)
        .take(inner.height as usize)
        .map(|(i, row)| {
            let is_cursor = i == ws.selected;
            let (label_style, ext_style) = if is_cursor && is_focused {
                let s = Style::default().fg(t.bg).bg(t.blue);
                (s, s)
            } else if is_cursor {
                let s = Style::default().bg(t.cursor_line);
                (s.fg(t.fg), s.fg(t.fg_dim))
            } else {
                (Style::default().fg(t.file_color), Style::default().fg(t.fg_dim))
            };

            let mut spans: Vec<Span> = row.markers.iter().map(|m| m.to_span(t.icon_color)).collect();
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let avail = width.saturating_sub(used);

            let label = truncate(&row.label, avail);
            let rest = avail.saturating_sub(label.width());
            spans.push(Span::styled(label, label_style));
            if let Some(ext) = &row.extension {
                spans.push(Span::styled(truncate(ext, rest), ext_style));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    f.render_widget(List::new(items), inner);
}
