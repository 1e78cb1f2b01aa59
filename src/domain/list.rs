use serde::{Deserialize, Serialize};

/// A single completable entry inside a todo list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the owning list, derived from the creation timestamp
    pub id: i64,
    pub title: String,
    pub done: bool,
}

impl Task {
    /// Create an empty, unchecked task with an id that does not collide with `existing`
    pub fn blank(existing: &[Task]) -> Self {
        Self {
            id: fresh_id(existing.iter().map(|t| t.id)),
            title: String::new(),
            done: false,
        }
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// A named, colored, ordered collection of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: i64,
    pub title: String,
    /// Key into the color palette
    pub color: String,
    pub items: Vec<Task>,
}

impl TodoList {
    pub fn new(id: i64, title: String, color: String) -> Self {
        Self {
            id,
            title,
            color,
            items: Vec::new(),
        }
    }

    /// Number of tasks not yet done
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|t| !t.done).count()
    }

    /// Number of tasks checked off
    pub fn completed(&self) -> usize {
        self.items.iter().filter(|t| t.done).count()
    }
}

/// Generate an id from the current time in milliseconds.
///
/// When the clock has not advanced past the largest existing id (two creations
/// in the same millisecond, or a clock that went backwards) the id is bumped to
/// `max + 1`, so ids stay unique within the collection they are created for.
pub fn fresh_id<I>(existing: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let now = chrono::Utc::now().timestamp_millis();
    match existing.into_iter().max() {
        Some(max) if max >= now => max.saturating_add(1),
        _ => now,
    }
}
