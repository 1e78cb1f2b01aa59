use crate::domain::{SwitchPolicy, TodoList, UiMode};
use crate::session::{CreateListForm, DeleteSelector, DetailSession};
use crate::store::ListStore;

/// Which screen is in front
#[derive(Debug)]
pub enum Screen {
    /// Carousel of all lists
    Overview,
    /// One list's tasks, edited on a copy
    Detail(DetailSession),
}

/// Blocking message shown over everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Main application state
pub struct AppState {
    pub store: ListStore,
    pub screen: Screen,
    pub ui_mode: UiMode,
    /// Cursor in display (reverse creation) order
    pub selected_index: usize,
    pub create_form: CreateListForm,
    pub delete_selector: DeleteSelector,
    pub alert: Option<Alert>,
    pub switch_policy: SwitchPolicy,
}

impl AppState {
    pub fn new(store: ListStore, switch_policy: SwitchPolicy) -> Self {
        Self {
            store,
            screen: Screen::Overview,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            create_form: CreateListForm::new(),
            delete_selector: DeleteSelector::new(),
            alert: None,
            switch_policy,
        }
    }

    /// The list under the overview cursor
    pub fn selected_list(&self) -> Option<&TodoList> {
        self.store
            .display_to_canonical(self.selected_index)
            .and_then(|i| self.store.get(i))
    }

    pub fn move_selection_left(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_right(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.store.len() {
            self.selected_index = self.store.len().saturating_sub(1);
        }
    }

    pub fn detail(&self) -> Option<&DetailSession> {
        match &self.screen {
            Screen::Detail(session) => Some(session),
            Screen::Overview => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailSession> {
        match &mut self.screen {
            Screen::Detail(session) => Some(session),
            Screen::Overview => None,
        }
    }

    /// Open the selected list on a disconnected copy of its tasks
    pub fn open_selected(&mut self) {
        if let Some(list) = self.selected_list() {
            let session = DetailSession::open(list, self.switch_policy);
            tracing::debug!(list = session.list_title(), "detail opened");
            self.screen = Screen::Detail(session);
        }
    }

    /// Hand the detail copy back to the store and return to the overview
    pub fn save_detail(&mut self) {
        let Screen::Detail(session) = std::mem::replace(&mut self.screen, Screen::Overview) else {
            return;
        };
        let handoff = session.finish();

        if let Err(e) = self
            .store
            .replace_items_by_id(handoff.list_id, handoff.task_items)
        {
            tracing::warn!(error = %e, list = handoff.list_title, "detail save had no target list");
            self.show_alert(
                "Not saved",
                &format!("List \"{}\" no longer exists.", handoff.list_title),
            );
        }
    }

    pub fn start_create_list(&mut self) {
        self.create_form.reset();
        self.ui_mode = UiMode::CreateList;
    }

    pub fn create_form_next_color(&mut self) {
        self.create_form.next_color(self.store.palette());
        self.create_form.select_current_color(self.store.palette());
    }

    pub fn create_form_prev_color(&mut self) {
        self.create_form.prev_color(self.store.palette());
        self.create_form.select_current_color(self.store.palette());
    }

    pub fn submit_create_list(&mut self) {
        match self.create_form.submit(&mut self.store) {
            Ok(title) => {
                // Newest list is first in display order
                self.selected_index = 0;
                self.show_alert("List created", &title);
            }
            Err(e) => {
                tracing::debug!(error = %e, "list creation rejected");
                self.show_alert("Error", &e.to_string());
            }
        }
    }

    pub fn cancel_create_list(&mut self) {
        self.create_form.reset();
        self.ui_mode = UiMode::Normal;
    }

    pub fn start_delete_lists(&mut self) {
        self.delete_selector.open();
        self.ui_mode = UiMode::DeleteLists;
    }

    pub fn toggle_delete_selection(&mut self) {
        let cursor = self.delete_selector.cursor();
        self.delete_selector.toggle(cursor, self.store.len());
    }

    pub fn confirm_delete_lists(&mut self) {
        let indices = self.delete_selector.confirm(self.store.len());
        self.store.delete_lists(&indices);
        self.clamp_selection();
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_delete_lists(&mut self) {
        self.delete_selector.cancel();
        self.ui_mode = UiMode::Normal;
    }

    pub fn show_alert(&mut self, title: &str, message: &str) {
        self.alert = Some(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
        self.ui_mode = UiMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Save an open detail session and wait for the last snapshot to reach disk
    pub fn shutdown(&mut self) {
        self.save_detail();
        self.store.flush();
        let stats = self.store.writer_stats();
        tracing::info!(
            written = stats.written,
            failed = stats.failed,
            coalesced = stats.coalesced,
            "shutting down"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorPalette, Task};
    use crate::persistence::{KeyValueStore, MemoryStore, TASKS_KEY};
    use crate::store::load_lists;
    use std::sync::Arc;

    fn app_with(titles: &[&str]) -> AppState {
        let mut store = ListStore::in_memory(Vec::new(), ColorPalette::default());
        for title in titles {
            store.add_list(title, "tealTwist").unwrap();
        }
        AppState::new(store, SwitchPolicy::Commit)
    }

    #[test]
    fn test_selection_follows_display_order() {
        let mut app = app_with(&["A", "B", "C"]);
        assert_eq!(app.selected_list().unwrap().title, "C");
        app.move_selection_right();
        app.move_selection_right();
        app.move_selection_right();
        assert_eq!(app.selected_list().unwrap().title, "A");
        app.move_selection_left();
        assert_eq!(app.selected_list().unwrap().title, "B");
    }

    #[test]
    fn test_open_edit_save_round_trip() {
        let adapter = Arc::new(MemoryStore::new());
        let store = ListStore::load(adapter.clone(), ColorPalette::default()).unwrap();
        let mut app = AppState::new(store, SwitchPolicy::Commit);
        app.store.add_list("Groceries", "tealTwist").unwrap();

        app.open_selected();
        {
            let session = app.detail_mut().unwrap();
            session.add_new_task();
            for c in "Milk".chars() {
                session.push_char(c);
            }
            session.commit();
            session.toggle_done(0);
        }
        // Store is untouched until save
        assert!(app.store.lists()[0].items.is_empty());

        app.save_detail();
        assert!(app.detail().is_none());
        let items = &app.store.lists()[0].items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Milk");
        assert!(items[0].done);

        app.shutdown();
        assert_eq!(load_lists(adapter.as_ref()).unwrap(), app.store.lists().to_vec());
        assert!(adapter.get(TASKS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_save_after_list_vanished_alerts() {
        let mut app = app_with(&["Groceries"]);
        app.open_selected();
        // Simulate the list disappearing while the detail is open
        app.store.delete_lists(&std::collections::BTreeSet::from([0]));

        app.save_detail();
        assert!(app.detail().is_none());
        assert_eq!(app.ui_mode, UiMode::Alert);
        assert_eq!(app.alert.as_ref().unwrap().title, "Not saved");
    }

    #[test]
    fn test_create_list_flow() {
        let mut app = app_with(&["A"]);
        app.start_create_list();
        for c in "Work".chars() {
            app.create_form.push_char(c);
        }
        app.create_form_next_color();
        app.submit_create_list();

        assert_eq!(app.ui_mode, UiMode::Alert);
        assert_eq!(app.alert.as_ref().unwrap().message, "Work");
        assert_eq!(app.selected_list().unwrap().title, "Work");
        assert_eq!(app.selected_list().unwrap().color, "grayGradient");

        app.dismiss_alert();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_create_list_rejection_alerts() {
        let mut app = app_with(&["A"]);
        app.start_create_list();
        app.create_form.push_char('A');
        app.create_form_next_color();
        app.submit_create_list();

        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, "List name already exists.");
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_delete_lists_by_display_position() {
        let mut app = app_with(&["A", "B", "C"]);
        app.start_delete_lists();
        // Display order is C, B, A
        app.toggle_delete_selection();
        app.delete_selector.move_down(app.store.len());
        app.delete_selector.move_down(app.store.len());
        app.toggle_delete_selection();
        app.confirm_delete_lists();

        let titles: Vec<&str> = app.store.lists().iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["B"]);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_cancel_delete_keeps_lists() {
        let mut app = app_with(&["A", "B"]);
        app.start_delete_lists();
        app.toggle_delete_selection();
        app.cancel_delete_lists();
        assert_eq!(app.store.len(), 2);
        app.start_delete_lists();
        app.confirm_delete_lists();
        assert_eq!(app.store.len(), 2);
    }

    #[test]
    fn test_selection_clamped_after_delete() {
        let mut app = app_with(&["A", "B", "C"]);
        app.move_selection_right();
        app.move_selection_right();
        app.start_delete_lists();
        app.toggle_delete_selection();
        app.confirm_delete_lists();
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.selected_list().unwrap().title, "A");
    }

    #[test]
    fn test_shutdown_saves_open_detail() {
        let mut app = app_with(&["A"]);
        app.open_selected();
        app.detail_mut().unwrap().add_new_task();
        app.detail_mut().unwrap().push_char('x');
        app.shutdown();
        assert_eq!(
            app.store.lists()[0].items,
            vec![Task {
                id: app.store.lists()[0].items[0].id,
                title: "x".to_string(),
                done: false
            }]
        );
    }
}
