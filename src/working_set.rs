use std::path::{Path, PathBuf};

use crate::icons::ExtensionTable;
use crate::marker::{Marker, MarkerHost};

/// Changes to the working set. Every one of them triggers a re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingSetEvent {
    Add,
    AddList,
    Remove,
    RemoveList,
    FileNameChange,
    PathDeleted,
    Sort,
}

#[derive(Debug, Clone)]
pub struct WorkingSetRow {
    pub path: PathBuf,
    /// Name without its extension label.
    pub label: String,
    /// Extension label as shown, including the dot (`.tar.gz`).
    pub extension: Option<String>,
    pub markers: Vec<Marker>,
}

impl WorkingSetRow {
    pub fn new(path: PathBuf) -> Self {
        let mut row = WorkingSetRow {
            path,
            label: String::new(),
            extension: None,
            markers: Vec::new(),
        };
        row.relabel();
        row
    }

    fn relabel(&mut self) {
        let name = file_name(&self.path);
        let (label, extension) = split_display_name(&name);
        self.label = label;
        self.extension = extension;
    }

    pub fn text(&self) -> String {
        match &self.extension {
            Some(ext) => format!("{}{}", self.label, ext),
            None => self.label.clone(),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Split a file name into its label and extension label. The extension starts
/// at the first dot after the first character, so dotfiles keep their whole
/// name as label.
pub fn split_display_name(name: &str) -> (String, Option<String>) {
    match name.char_indices().skip(1).find(|&(_, c)| c == '.') {
        Some((i, _)) => (name[..i].to_string(), Some(name[i..].to_string())),
        None => (name.to_string(), None),
    }
}

/// The list of files the user has open.
#[derive(Debug, Default)]
pub struct WorkingSet {
    rows: Vec<WorkingSetRow>,
    pub selected: usize,
    pub offset: usize,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[WorkingSetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_row(&self) -> Option<&WorkingSetRow> {
        self.rows.get(self.selected)
    }

    fn position(&self, path: &Path) -> Option<usize> {
        self.rows.iter().position(|r| r.path == path)
    }

    /// Open a file. Re-opening an open file only selects it.
    pub fn add(&mut self, path: PathBuf) -> Option<WorkingSetEvent> {
        if let Some(idx) = self.position(&path) {
            self.selected = idx;
            return None;
        }
        self.rows.push(WorkingSetRow::new(path));
        self.selected = self.rows.len() - 1;
        Some(WorkingSetEvent::Add)
    }

    pub fn add_list(&mut self, paths: impl IntoIterator<Item = PathBuf>) -> Option<WorkingSetEvent> {
        let before = self.rows.len();
        for path in paths {
            if self.position(&path).is_none() {
                self.rows.push(WorkingSetRow::new(path));
            }
        }
        if self.rows.len() == before {
            return None;
        }
        self.selected = before;
        Some(WorkingSetEvent::AddList)
    }

    pub fn remove(&mut self, idx: usize) -> Option<WorkingSetEvent> {
        if idx >= self.rows.len() {
            return None;
        }
        self.rows.remove(idx);
        self.clamp_selection();
        Some(WorkingSetEvent::Remove)
    }

    pub fn remove_all(&mut self) -> Option<WorkingSetEvent> {
        if self.rows.is_empty() {
            return None;
        }
        self.rows.clear();
        self.selected = 0;
        self.offset = 0;
        Some(WorkingSetEvent::RemoveList)
    }

    /// Point the row at `from` to its new location.
    pub fn rename(&mut self, from: &Path, to: PathBuf) -> Option<WorkingSetEvent> {
        let idx = self.position(from)?;
        let row = &mut self.rows[idx];
        row.path = to;
        row.relabel();
        Some(WorkingSetEvent::FileNameChange)
    }

    /// Drop rows whose file no longer exists on disk.
    pub fn prune_missing(&mut self) -> Option<WorkingSetEvent> {
        let before = self.rows.len();
        self.rows.retain(|r| r.path.exists());
        if self.rows.len() == before {
            return None;
        }
        self.clamp_selection();
        Some(WorkingSetEvent::PathDeleted)
    }

    /// Order rows by file name, case-insensitively. The selected file stays
    /// selected.
    pub fn sort(&mut self) -> Option<WorkingSetEvent> {
        if self.rows.len() < 2 {
            return None;
        }
        let current = self.selected_row().map(|r| r.path.clone());
        self.rows
            .sort_by_cached_key(|r| (file_name(&r.path).to_lowercase(), r.path.clone()));
        if let Some(idx) = current.and_then(|p| self.position(&p)) {
            self.selected = idx;
        }
        Some(WorkingSetEvent::Sort)
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn adjust_scroll(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
    }
}

impl MarkerHost for WorkingSet {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_extension_text(&self, row: usize) -> Option<&str> {
        self.rows.get(row)?.extension.as_deref()
    }

    fn row_text(&self, row: usize) -> String {
        self.rows.get(row).map(|r| r.text()).unwrap_or_default()
    }

    fn clear_markers(&mut self) {
        for row in &mut self.rows {
            row.markers.clear();
        }
    }

    fn prepend_marker(&mut self, row: usize, marker: Marker) {
        if let Some(r) = self.rows.get_mut(row) {
            r.markers.insert(0, marker);
        }
    }
}

/// Lookup key for a row: its extension label (or its whole text when it has
/// none) minus the leading character, cut down to the part after the last
/// dot, lowercased.
pub fn row_extension<H: MarkerHost + ?Sized>(host: &H, row: usize) -> String {
    let text = match host.row_extension_text(row) {
        Some(ext) if !ext.is_empty() => ext.to_string(),
        _ => host.row_text(row),
    };
    let ext: String = text.chars().skip(1).collect::<String>().to_lowercase();
    match ext.rfind('.') {
        Some(i) if i > 0 => ext[i + 1..].to_string(),
        _ => ext,
    }
}

/// Strip all markers and decorate every row again.
pub fn render_working_set<H: MarkerHost + ?Sized>(host: &mut H, table: &ExtensionTable) {
    host.clear_markers();
    let count = host.row_count();
    for row in 0..count {
        let ext = row_extension(host, row);
        let record = table.lookup(&ext);
        host.prepend_marker(row, Marker::from(&record));
    }
    tracing::debug!(rows = count, "working set decorated");
}
