use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::icons::ExtensionTable;
use crate::marker::Marker;

/// What the icon provider gets to see of a tree entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub name: String,
    pub is_file: bool,
    pub full_path: PathBuf,
}

/// Callback that decorates tree entries. Registered once on the app.
pub type IconProvider = fn(&TreeItem, &ExtensionTable) -> Marker;

pub struct TreeLine {
    pub prefix: String,
    pub item: TreeItem,
    pub depth: usize,
    pub expanded: bool,
    pub marker: Marker,
}

/// Text after the last dot of a file name, or `""` when there is none.
/// Case is preserved.
pub fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[i + 1..],
        None => "",
    }
}

/// Files get a marker resolved from their extension; directories get an
/// empty placeholder so the tree can draw its folder glyph.
pub fn icon_provider(item: &TreeItem, table: &ExtensionTable) -> Marker {
    if !item.is_file {
        return Marker::Placeholder;
    }
    let record = table.lookup(file_extension(&item.name));
    Marker::from(&record)
}

pub struct TreeOptions {
    pub show_hidden: bool,
    pub dirs_first: bool,
}

/// Build a flat list of tree lines under `root`, descending only into
/// directories listed in `expanded`.
pub fn build_tree(
    root: &Path,
    expanded: &HashSet<PathBuf>,
    opts: &TreeOptions,
    table: &ExtensionTable,
    provider: IconProvider,
) -> Vec<TreeLine> {
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "/".into());
    let root_item = TreeItem {
        name: root_name,
        is_file: false,
        full_path: root.to_path_buf(),
    };

    let mut lines = vec![TreeLine {
        prefix: String::new(),
        marker: provider(&root_item, table),
        item: root_item,
        depth: 0,
        expanded: true,
    }];

    let mut walker = Walker {
        expanded,
        opts,
        table,
        provider,
        lines: &mut lines,
    };
    walker.expand_dir(root, &[]);

    lines
}

struct Walker<'a> {
    expanded: &'a HashSet<PathBuf>,
    opts: &'a TreeOptions,
    table: &'a ExtensionTable,
    provider: IconProvider,
    lines: &'a mut Vec<TreeLine>,
}

impl Walker<'_> {
    fn expand_dir(&mut self, dir: &Path, connector_state: &[bool]) {
        let entries = read_entries(dir, self.opts);
        let total = entries.len();

        for (idx, item) in entries.into_iter().enumerate() {
            let is_last = idx + 1 == total;
            let is_open = !item.is_file && self.expanded.contains(&item.full_path);
            let path = item.full_path.clone();

            self.lines.push(TreeLine {
                prefix: make_prefix(connector_state, is_last),
                marker: (self.provider)(&item, self.table),
                item,
                depth: connector_state.len() + 1,
                expanded: is_open,
            });

            if is_open {
                let mut next_connectors = connector_state.to_vec();
                next_connectors.push(!is_last);
                self.expand_dir(&path, &next_connectors);
            }
        }
    }
}

fn read_entries(dir: &Path, opts: &TreeOptions) -> Vec<TreeItem> {
    let mut items = Vec::new();
    match fs::read_dir(dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let name = entry.file_name().to_string_lossy().into_owned();
                if !opts.show_hidden && name.starts_with('.') {
                    continue;
                }
                let is_dir = entry.path().is_dir();
                items.push(TreeItem {
                    name,
                    is_file: !is_dir,
                    full_path: entry.path(),
                });
            }
        }
        Err(e) => tracing::warn!(dir = %dir.display(), "cannot read directory: {e}"),
    }

    items.sort_by(|a, b| {
        let group = if opts.dirs_first {
            a.is_file.cmp(&b.is_file)
        } else {
            std::cmp::Ordering::Equal
        };
        group.then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    items
}

/// Regular files directly inside `dir`, in tree order.
pub fn list_files(dir: &Path, opts: &TreeOptions) -> Vec<PathBuf> {
    read_entries(dir, opts)
        .into_iter()
        .filter(|i| i.is_file)
        .map(|i| i.full_path)
        .collect()
}

fn make_prefix(connector_state: &[bool], is_last: bool) -> String {
    let mut prefix = String::new();
    for &has_more in connector_state {
        if has_more {
            prefix.push_str("│  ");
        } else {
            prefix.push_str("   ");
        }
    }
    if is_last {
        prefix.push_str("└─ ");
    } else {
        prefix.push_str("├─ ");
    }
    prefix
}
