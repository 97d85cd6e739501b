use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

use super::util::truncate;

const FOLDER_CLOSED: &str = "\u{f07b} ";
const FOLDER_OPEN: &str = "\u{f07c} ";

pub(super) fn render_tree(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let is_focused = app.focus == Focus::Tree;
    let border_color = if is_focused {
        t.border_active
    } else {
        t.border_inactive
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" 󰙅 Tree ")
        .title_style(Style::default().fg(if is_focused { t.fg } else { t.cyan }));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible = inner.height as usize;
    let width = inner.width as usize;

    if visible == 0 || width == 0 || app.tree_data.is_empty() {
        return;
    }

    let items: Vec<ListItem> = app
        .tree_data
        .iter()
        .enumerate()
        .skip(app.tree_scroll)
        .take(visible)
        .map(|(i, line)| {
            // Placeholder markers leave the folder glyph to the tree.
            let icon = if line.marker.is_placeholder() {
                let glyph = if line.expanded { FOLDER_OPEN } else { FOLDER_CLOSED };
                Span::styled(glyph, Style::default().fg(t.dir_color))
            } else {
                line.marker.to_span(t.icon_color)
            };

            let is_cursor = i == app.tree_selected;
            let name_style = if is_cursor && is_focused {
                Style::default().fg(t.bg).bg(t.blue)
            } else if is_cursor {
                Style::default().fg(t.fg).bg(t.cursor_line)
            } else if line.item.is_file {
                Style::default().fg(t.file_color)
            } else {
                Style::default().fg(t.dir_color)
            };

            let used = line.prefix.width() + icon.content.width();
            let name = truncate(&line.item.name, width.saturating_sub(used));

            ListItem::new(Line::from(vec![
                Span::styled(line.prefix.as_str(), Style::default().fg(t.border_inactive)),
                icon,
                Span::styled(name, name_style),
            ]))
        })
        .collect();

    f.render_widget(List::new(items), inner);
}
