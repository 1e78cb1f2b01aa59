use crate::domain::{SwitchPolicy, Task, TodoList};

/// Edit state of a detail session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing { index: usize },
}

/// What the detail screen hands back to the store on save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListHandoff {
    pub list_id: i64,
    pub list_title: String,
    pub task_items: Vec<Task>,
}

/// Working copy of one list's tasks, disconnected from the store until `finish`
#[derive(Debug, Clone)]
pub struct DetailSession {
    list_id: i64,
    list_title: String,
    tasks: Vec<Task>,
    state: EditState,
    buffer: String,
    policy: SwitchPolicy,
    cursor: usize,
}

impl DetailSession {
    pub fn open(list: &TodoList, policy: SwitchPolicy) -> Self {
        Self {
            list_id: list.id,
            list_title: list.title.clone(),
            tasks: list.items.clone(),
            state: EditState::Viewing,
            buffer: String::new(),
            policy,
            cursor: 0,
        }
    }

    pub fn list_id(&self) -> i64 {
        self.list_id
    }

    pub fn list_title(&self) -> &str {
        &self.list_title
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn editing_index(&self) -> Option<usize> {
        match self.state {
            EditState::Editing { index } => Some(index),
            EditState::Viewing => None,
        }
    }

    /// Highlighted row
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.tasks.len() {
            self.cursor += 1;
        }
    }

    /// Start editing task `index`, pre-filling the buffer with its title.
    ///
    /// Leaving another task's edit goes through `commit_or_discard`.
    pub fn begin_edit(&mut self, index: usize) {
        if index >= self.tasks.len() || self.editing_index() == Some(index) {
            return;
        }
        self.commit_or_discard();
        self.buffer = self.tasks[index].title.clone();
        self.state = EditState::Editing { index };
        self.cursor = index;
    }

    /// Write the trimmed buffer to the edited task and return to viewing.
    ///
    /// Empty titles are accepted here. Returns false when nothing was being edited.
    pub fn commit(&mut self) -> bool {
        let EditState::Editing { index } = self.state else {
            return false;
        };
        if let Some(task) = self.tasks.get_mut(index) {
            task.title = self.buffer.trim().to_string();
        }
        self.state = EditState::Viewing;
        self.buffer.clear();
        true
    }

    /// Drop the buffer and return to viewing
    pub fn cancel_edit(&mut self) {
        self.state = EditState::Viewing;
        self.buffer.clear();
    }

    /// Settle a pending edit according to the session's switch policy
    pub fn commit_or_discard(&mut self) {
        if !self.is_editing() {
            return;
        }
        match self.policy {
            SwitchPolicy::Commit => {
                self.commit();
            }
            SwitchPolicy::Discard => {
                if let Some(index) = self.editing_index() {
                    tracing::debug!(index, "pending task title discarded");
                }
                self.cancel_edit();
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.is_editing() {
            self.buffer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.is_editing() {
            self.buffer.pop();
        }
    }

    /// Flip the done flag; independent of edit state
    pub fn toggle_done(&mut self, index: usize) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.toggle();
        }
    }

    /// Remove task `index`, keeping the edit pointed at the same task when possible
    pub fn delete_task(&mut self, index: usize) {
        if index >= self.tasks.len() {
            return;
        }
        self.tasks.remove(index);

        match self.state {
            EditState::Editing { index: edited } if edited == index => self.cancel_edit(),
            EditState::Editing { index: edited } if edited > index => {
                self.state = EditState::Editing { index: edited - 1 };
            }
            _ => {}
        }

        if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len().saturating_sub(1);
        }
    }

    /// Append an empty, unchecked task and start editing it
    pub fn add_new_task(&mut self) {
        self.commit_or_discard();
        let task = Task::blank(&self.tasks);
        self.tasks.push(task);
        let index = self.tasks.len() - 1;
        self.state = EditState::Editing { index };
        self.buffer.clear();
        self.cursor = index;
    }

    /// Save and go home: a pending edit is committed, then the whole task array is handed back
    pub fn finish(mut self) -> ListHandoff {
        self.commit();
        ListHandoff {
            list_id: self.list_id,
            list_title: self.list_title,
            task_items: self.tasks,
        }
    }
}
