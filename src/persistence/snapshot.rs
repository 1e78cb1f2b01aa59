use crate::domain::TodoList;
use std::collections::HashSet;
use thiserror::Error;

/// Storage key holding the JSON array of lists
pub const TASKS_KEY: &str = "tasks";

/// Persisted data that cannot be trusted as a list collection
#[derive(Debug, Error)]
pub enum CorruptStateError {
    #[error("stored lists are not valid JSON of the expected shape")]
    Malformed(#[from] serde_json::Error),
    #[error("stored list at position {index} has an empty title")]
    EmptyListTitle { index: usize },
    #[error("stored list title `{0}` appears more than once")]
    DuplicateListTitle(String),
    #[error("stored list id {0} appears more than once")]
    DuplicateListId(i64),
    #[error("list `{list}` has task id {id} more than once")]
    DuplicateTaskId { list: String, id: i64 },
}

/// Serialize lists as `[{id,title,color,items:[{id,title,done}]}]`
pub fn encode(lists: &[TodoList]) -> Result<String, serde_json::Error> {
    serde_json::to_string(lists)
}

/// Parse and validate a stored blob.
///
/// Serde enforces field types; the checks after it enforce the invariants the
/// store relies on (non-empty unique titles, unique ids).
pub fn decode(blob: &str) -> Result<Vec<TodoList>, CorruptStateError> {
    let lists: Vec<TodoList> = serde_json::from_str(blob)?;
    validate(&lists)?;
    Ok(lists)
}

fn validate(lists: &[TodoList]) -> Result<(), CorruptStateError> {
    let mut titles = HashSet::new();
    let mut list_ids = HashSet::new();

    for (index, list) in lists.iter().enumerate() {
        if list.title.trim().is_empty() {
            return Err(CorruptStateError::EmptyListTitle { index });
        }
        if !titles.insert(list.title.as_str()) {
            return Err(CorruptStateError::DuplicateListTitle(list.title.clone()));
        }
        if !list_ids.insert(list.id) {
            return Err(CorruptStateError::DuplicateListId(list.id));
        }

        let mut task_ids = HashSet::new();
        for task in &list.items {
            if !task_ids.insert(task.id) {
                return Err(CorruptStateError::DuplicateTaskId {
                    list: list.title.clone(),
                    id: task.id,
                });
            }
        }
    }

    Ok(())
}
