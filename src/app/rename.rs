use super::*;

impl App {
    pub(super) fn start_rename(&mut self) {
        let Some(row) = self.working_set.selected_row() else {
            return;
        };
        self.rename_input = row.text();
        self.mode = Mode::Rename;
    }

    pub(super) fn handle_rename(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let new_name = self.rename_input.trim().to_string();
                self.mode = Mode::Normal;
                let Some(path) = self.working_set.selected_row().map(|r| r.path.clone()) else {
                    return;
                };
                if new_name.is_empty() {
                    return;
                }
                match rename_file(&path, &new_name) {
                    Ok(to) => {
                        let event = self.working_set.rename(&path, to);
                        self.notify_working_set(event);
                        self.rebuild_tree();
                        self.status_message = format!("Renamed to: {new_name}");
                    }
                    Err(e) => {
                        tracing::warn!("rename failed: {e}");
                        self.status_message = format!("rename: {e}");
                        self.status_is_error = true;
                    }
                }
            }
            KeyCode::Esc => {
                self.mode = Mode::Normal;
            }
            KeyCode::Backspace => {
                if self.rename_input.is_empty() {
                    self.mode = Mode::Normal;
                } else {
                    self.rename_input.pop();
                }
            }
            KeyCode::Char(c) => {
                self.rename_input.push(c);
            }
            _ => {}
        }
    }
}

/// Rename `path` to `new_name` inside the same directory.
pub(crate) fn rename_file(path: &Path, new_name: &str) -> Result<PathBuf> {
    if new_name.contains(std::path::MAIN_SEPARATOR) || new_name == "." || new_name == ".." {
        return Err(AppError::Rename {
            path: path.to_path_buf(),
            reason: format!("invalid name {new_name:?}"),
        });
    }
    let parent = path.parent().ok_or_else(|| AppError::NotFound(path.to_path_buf()))?;
    let to = parent.join(new_name);
    if to == path {
        return Ok(to);
    }
    if to.exists() {
        return Err(AppError::Rename {
            path: path.to_path_buf(),
            reason: format!("{} already exists", to.display()),
        });
    }
    std::fs::rename(path, &to)?;
    tracing::info!(from = %path.display(), to = %to.display(), "renamed");
    Ok(to)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{fixture, key, select_tree};
    use super::*;
    use crate::marker::Marker;
    use crossterm::event::KeyModifiers;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(c));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn rename_moves_file_and_redecorates() {
        let (dir, mut app) = fixture();
        select_tree(&mut app, "notes.txt");
        press(&mut app, KeyCode::Enter);
        app.focus = Focus::WorkingSet;

        app.handle_key(key('r'));
        assert_eq!(app.mode, Mode::Rename);
        assert_eq!(app.rename_input, "notes.txt");
        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "md");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Normal);
        assert!(dir.path().join("notes.md").exists());
        let row = &app.working_set.rows()[0];
        assert_eq!(row.text(), "notes.md");
        assert_eq!(row.markers, vec![Marker::from(&app.icons.lookup("md"))]);
        assert!(app.tree_data.iter().any(|l| l.item.name == "notes.md"));
    }

    #[test]
    fn rename_onto_existing_file_fails() {
        let (dir, mut app) = fixture();
        select_tree(&mut app, "notes.txt");
        press(&mut app, KeyCode::Enter);
        app.focus = Focus::WorkingSet;
        app.handle_key(key('r'));
        app.rename_input = "index.html".into();
        press(&mut app, KeyCode::Enter);
        assert!(app.status_message.starts_with("rename:"));
        assert!(app.status_is_error);
        assert!(dir.path().join("notes.txt").exists());
        assert_eq!(app.working_set.rows()[0].text(), "notes.txt");
    }

    #[test]
    fn escape_cancels() {
        let (_dir, mut app) = fixture();
        select_tree(&mut app, "notes.txt");
        press(&mut app, KeyCode::Enter);
        app.focus = Focus::WorkingSet;
        app.handle_key(key('r'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn rename_rejects_separators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "").unwrap();
        let bad = format!("x{}y", std::path::MAIN_SEPARATOR);
        assert!(matches!(rename_file(&path, &bad), Err(AppError::Rename { .. })));
    }
}
