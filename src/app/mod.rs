pub(crate) use std::collections::HashSet;
pub(crate) use std::path::{Path, PathBuf};

pub(crate) use crossterm::event::{KeyCode, KeyEvent};

pub(crate) use crate::config::Config;
pub(crate) use crate::error::{AppError, Result};
pub(crate) use crate::icons::ExtensionTable;
pub(crate) use crate::theme::Theme;
pub(crate) use crate::tree::{IconProvider, TreeLine, TreeOptions};
pub(crate) use crate::working_set::{WorkingSet, WorkingSetEvent, render_working_set};

mod input;
mod rename;
mod tree;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Normal,
    Rename,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Tree,
    WorkingSet,
}

pub struct App {
    pub root: PathBuf,
    pub config: Config,
    pub theme: Theme,
    pub icons: ExtensionTable,
    pub icon_provider: IconProvider,
    pub mode: Mode,
    pub focus: Focus,
    pub rename_input: String,
    pub status_message: String,
    pub status_is_error: bool,
    pub should_quit: bool,
    // Tree
    pub tree_data: Vec<TreeLine>,
    pub tree_selected: usize,
    pub tree_scroll: usize,
    pub expanded: HashSet<PathBuf>,
    // Working set
    pub working_set: WorkingSet,
}

impl App {
    pub fn new(root: &Path, config: Config) -> Result<Self> {
        let root = root
            .canonicalize()
            .map_err(|_| AppError::NotFound(root.to_path_buf()))?;
        if !root.is_dir() {
            return Err(AppError::NotFound(root));
        }

        let theme = Theme::with_overrides(&config.theme);
        let icons = crate::catalog::builtin_table();

        let mut app = App {
            root,
            config,
            theme,
            icons,
            icon_provider: crate::tree::icon_provider,
            mode: Mode::Normal,
            focus: Focus::Tree,
            rename_input: String::new(),
            status_message: String::new(),
            status_is_error: false,
            should_quit: false,
            tree_data: Vec::new(),
            tree_selected: 0,
            tree_scroll: 0,
            expanded: HashSet::new(),
            working_set: WorkingSet::new(),
        };
        app.rebuild_tree();
        render_working_set(&mut app.working_set, &app.icons);
        tracing::info!(root = %app.root.display(), icons = app.icons.len(), "app ready");
        Ok(app)
    }

    pub(crate) fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            show_hidden: self.config.show_hidden,
            dirs_first: self.config.dirs_first,
        }
    }

    /// Working-set change notification. Any change redraws every marker.
    pub fn notify_working_set(&mut self, event: Option<WorkingSetEvent>) {
        let Some(event) = event else { return };
        tracing::debug!(?event, "working set changed");
        render_working_set(&mut self.working_set, &self.icons);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message.clear();
        self.status_is_error = false;

        match self.mode {
            Mode::Normal => self.handle_normal(key),
            Mode::Rename => self.handle_rename(key),
        }
    }

    /// Rescan the tree and close files that disappeared from disk.
    pub fn refresh(&mut self) {
        self.expanded.retain(|p| p.is_dir());
        self.rebuild_tree();
        let event = self.working_set.prune_missing();
        if event.is_some() {
            self.status_message = "Closed deleted files".into();
        }
        self.notify_working_set(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::Marker;
    use crossterm::event::KeyModifiers;

    pub(super) fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    pub(super) fn fixture() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("lib")).unwrap();
        std::fs::write(dir.path().join("lib/util.js"), "").unwrap();
        std::fs::write(dir.path().join("lib/style.sass"), "").unwrap();
        std::fs::write(dir.path().join("index.html"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        let app = App::new(dir.path(), Config::default()).unwrap();
        (dir, app)
    }

    pub(super) fn select_tree(app: &mut App, name: &str) {
        app.tree_selected = app
            .tree_data
            .iter()
            .position(|l| l.item.name == name)
            .unwrap();
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let res = App::new(&dir.path().join("missing"), Config::default());
        assert!(matches!(res, Err(AppError::NotFound(_))));
    }

    #[test]
    fn open_file_decorates_working_set() {
        let (_dir, mut app) = fixture();
        select_tree(&mut app, "index.html");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.working_set.len(), 1);
        let row = &app.working_set.rows()[0];
        assert_eq!(row.markers, vec![Marker::from(&app.icons.lookup("html"))]);
    }

    #[test]
    fn repeated_events_do_not_stack_markers() {
        let (_dir, mut app) = fixture();
        select_tree(&mut app, "lib");
        app.handle_key(key('a'));
        app.focus = Focus::WorkingSet;
        app.handle_key(key('s'));
        app.handle_key(key('s'));
        assert_eq!(app.working_set.len(), 2);
        for row in app.working_set.rows() {
            assert_eq!(row.markers.len(), 1);
        }
        let scss = Marker::from(&app.icons.lookup("scss"));
        assert!(app.working_set.rows().iter().any(|r| r.markers[0] == scss));
    }

    #[test]
    fn refresh_closes_deleted_files() {
        let (dir, mut app) = fixture();
        select_tree(&mut app, "notes.txt");
        app.handle_key(key('l'));
        select_tree(&mut app, "index.html");
        app.handle_key(key('l'));
        std::fs::remove_file(dir.path().join("notes.txt")).unwrap();
        app.handle_key(key('R'));
        assert_eq!(app.working_set.len(), 1);
        assert!(!app.tree_data.iter().any(|l| l.item.name == "notes.txt"));
    }

    #[test]
    fn close_and_close_all() {
        let (_dir, mut app) = fixture();
        select_tree(&mut app, "lib");
        app.handle_key(key('a'));
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(app.focus, Focus::WorkingSet);
        app.handle_key(key('x'));
        assert_eq!(app.working_set.len(), 1);
        app.handle_key(key('X'));
        assert!(app.working_set.is_empty());
    }

    #[test]
    fn quit() {
        let (_dir, mut app) = fixture();
        app.handle_key(key('q'));
        assert!(app.should_quit);
    }
}
