use super::*;

impl App {
    pub(super) fn handle_normal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Tree => Focus::WorkingSet,
                    Focus::WorkingSet => Focus::Tree,
                };
                return;
            }
            KeyCode::Char('R') => {
                self.refresh();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Tree => self.handle_tree_input(key),
            Focus::WorkingSet => self.handle_working_set_input(key),
        }
    }

    fn handle_working_set_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.working_set.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.working_set.move_up(),
            KeyCode::Char('x') | KeyCode::Char('d') => {
                let event = self.working_set.remove(self.working_set.selected);
                self.notify_working_set(event);
            }
            KeyCode::Char('X') => {
                let event = self.working_set.remove_all();
                self.notify_working_set(event);
            }
            KeyCode::Char('s') => {
                let event = self.working_set.sort();
                self.notify_working_set(event);
            }
            KeyCode::Char('r') => self.start_rename(),
            KeyCode::Enter => self.reveal_selected(),
            _ => {}
        }
    }
}
