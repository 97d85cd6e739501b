use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

mod status;
mod tree;
pub(crate) mod util;
mod working_set;

// Powerline separators
pub(super) const SEP_RIGHT: &str = "\u{e0b0}"; //
pub(super) const SEP_LEFT: &str = "\u{e0b2}"; //

// ── Main render ─────────────────────────────────────────────────────

pub fn render(f: &mut Frame, app: &mut App) {
    let full_area = f.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // lists
            Constraint::Length(1), // status bar
        ])
        .split(full_area);

    let tree_pct = app.config.tree_width;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(tree_pct),
            Constraint::Percentage(100 - tree_pct),
        ])
        .split(rows[0]);

    let vis_h = cols[0].height.saturating_sub(2) as usize;
    app.adjust_tree_scroll(vis_h);
    app.working_set.adjust_scroll(vis_h);

    tree::render_tree(f, app, cols[0]);
    working_set::render_working_set(f, app, cols[1]);
    status::render_status(f, app, rows[1]);
}
