use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{App, Focus, Mode};

use super::{SEP_LEFT, SEP_RIGHT};

const TREE_HINTS: &str = "l open  h close  a open all  Tab switch  R rescan  q quit";
const WORKING_SET_HINTS: &str = "x close  X close all  s sort  r rename  Enter reveal  Tab switch";

pub(super) fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;

    // Fill background
    f.render_widget(
        Block::default().style(Style::default().bg(t.status_bg)),
        area,
    );

    let width = area.width as usize;

    let (mode_str, mode_bg) = match (app.mode, app.focus) {
        (Mode::Rename, _) => ("󰑕 RENAME", t.yellow),
        (Mode::Normal, Focus::Tree) => (" TREE", t.cyan),
        (Mode::Normal, Focus::WorkingSet) => ("󰈔 FILES", t.green),
    };

    let mode_span = Span::styled(
        format!(" {mode_str} "),
        Style::default().fg(t.bg).bg(mode_bg),
    );
    let mode_sep = Span::styled(SEP_RIGHT, Style::default().fg(mode_bg).bg(t.bg_light));

    let info_text = if app.mode == Mode::Rename {
        format!(" {}\u{2588} ", app.rename_input)
    } else if !app.status_message.is_empty() {
        format!(" {} ", app.status_message)
    } else if app.focus == Focus::Tree {
        format!(" {TREE_HINTS} ")
    } else {
        format!(" {WORKING_SET_HINTS} ")
    };

    let info_fg = if app.status_is_error && app.mode == Mode::Normal {
        t.red
    } else {
        t.fg
    };

    // Position segment (rightmost)
    let (pos, total) = match app.focus {
        Focus::Tree => (app.tree_selected + 1, app.tree_data.len()),
        Focus::WorkingSet => (app.working_set.selected + 1, app.working_set.len()),
    };
    let pos_text = format!(" {}/{} ", pos.min(total), total);
    let right_spans = vec![
        Span::styled(SEP_LEFT, Style::default().fg(t.blue).bg(t.status_bg)),
        Span::styled(pos_text, Style::default().fg(t.bg).bg(t.blue)),
    ];
    let right_used: usize = right_spans.iter().map(|s| s.content.chars().count()).sum();

    // Cap info width so the position segment stays at the right edge
    let mode_width = mode_str.chars().count() + 2 + 1;
    let max_info = width.saturating_sub(mode_width + 1 + right_used);
    let info_display = super::util::truncate(&info_text, max_info);

    let left_used = mode_width + info_display.chars().count() + 1;
    let fill = width.saturating_sub(left_used + right_used);

    let mut spans = vec![
        mode_span,
        mode_sep,
        Span::styled(info_display, Style::default().fg(info_fg).bg(t.bg_light)),
        Span::styled(SEP_RIGHT, Style::default().fg(t.bg_light).bg(t.status_bg)),
        Span::styled(" ".repeat(fill), Style::default().bg(t.status_bg)),
    ];
    spans.extend(right_spans);

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
