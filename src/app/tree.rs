use super::*;

impl App {
    pub(super) fn handle_tree_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.tree_selected + 1 < self.tree_data.len() {
                    self.tree_selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.tree_selected = self.tree_selected.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.tree_selected = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.tree_selected = self.tree_data.len().saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => self.tree_activate(),
            KeyCode::Char('h') | KeyCode::Left => self.tree_collapse_or_parent(),
            KeyCode::Char('a') => self.tree_open_all(),
            _ => {}
        }
    }

    /// Toggle a directory, or open a file in the working set.
    fn tree_activate(&mut self) {
        let Some(line) = self.tree_data.get(self.tree_selected) else {
            return;
        };
        if line.depth == 0 {
            return;
        }
        let path = line.item.full_path.clone();
        if line.item.is_file {
            let event = self.working_set.add(path);
            self.notify_working_set(event);
        } else {
            if !self.expanded.remove(&path) {
                self.expanded.insert(path);
            }
            self.rebuild_tree();
        }
    }

    fn tree_collapse_or_parent(&mut self) {
        let Some(line) = self.tree_data.get(self.tree_selected) else {
            return;
        };
        if line.depth == 0 {
            return;
        }
        if line.expanded {
            let path = line.item.full_path.clone();
            self.expanded.remove(&path);
            self.rebuild_tree();
            return;
        }
        let target_depth = line.depth - 1;
        if let Some(i) = (0..self.tree_selected)
            .rev()
            .find(|&i| self.tree_data[i].depth == target_depth)
        {
            self.tree_selected = i;
        }
    }

    /// Open every file in the selected directory, or in the selected file's
    /// directory.
    fn tree_open_all(&mut self) {
        let Some(line) = self.tree_data.get(self.tree_selected) else {
            return;
        };
        let dir = if line.item.is_file {
            match line.item.full_path.parent() {
                Some(p) => p.to_path_buf(),
                None => return,
            }
        } else {
            line.item.full_path.clone()
        };
        let files = crate::tree::list_files(&dir, &self.tree_options());
        let count = files.len();
        let event = self.working_set.add_list(files);
        if event.is_some() {
            self.status_message = format!("Opened {count} files");
        }
        self.notify_working_set(event);
    }

    /// Select the working-set file in the tree, expanding its parents.
    pub(super) fn reveal_selected(&mut self) {
        let Some(path) = self.working_set.selected_row().map(|r| r.path.clone()) else {
            return;
        };
        let Ok(rel) = path.strip_prefix(&self.root) else {
            self.status_message = "File is outside the project".into();
            return;
        };
        let mut dir = self.root.clone();
        if let Some(parent) = rel.parent() {
            for part in parent.components() {
                dir.push(part);
                self.expanded.insert(dir.clone());
            }
        }
        self.rebuild_tree();
        if let Some(i) = self.tree_data.iter().position(|l| l.item.full_path == path) {
            self.tree_selected = i;
        }
        self.focus = Focus::Tree;
    }

    pub fn rebuild_tree(&mut self) {
        let opts = self.tree_options();
        self.tree_data = crate::tree::build_tree(
            &self.root,
            &self.expanded,
            &opts,
            &self.icons,
            self.icon_provider,
        );
        if self.tree_selected >= self.tree_data.len() {
            self.tree_selected = self.tree_data.len().saturating_sub(1);
        }
    }

    pub fn adjust_tree_scroll(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.tree_selected < self.tree_scroll {
            self.tree_scroll = self.tree_selected;
        } else if self.tree_selected >= self.tree_scroll + visible {
            self.tree_scroll = self.tree_selected + 1 - visible;
        }
    }
}
