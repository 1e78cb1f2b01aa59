pub mod error;

pub use error::{StoreError, ValidationError};

use crate::domain::{fresh_id, ColorPalette, Task, TodoList};
use crate::persistence::{snapshot, KeyValueStore, PersistWriter, WriterStats, TASKS_KEY};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Key the raw blob is copied to when it fails to load, so the reset store does not erase it
pub const CORRUPT_BACKUP_KEY: &str = "tasks-corrupt";

/// One slot of the overview carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplaySlot<'a> {
    /// Padding slot synthesized at each end; never stored
    Spacer,
    List {
        /// Position in creation order
        canonical: usize,
        list: &'a TodoList,
    },
}

/// Canonical in-memory collection of all lists, newest last.
///
/// Every successful mutation queues a full snapshot on the persistence writer.
/// The in-memory state stays authoritative for the session even when writes fail.
pub struct ListStore {
    lists: Vec<TodoList>,
    palette: ColorPalette,
    writer: Option<PersistWriter>,
}

impl ListStore {
    /// Hydrate from `adapter` and start persisting back to it.
    ///
    /// A missing key, unreadable storage or corrupt blob all start an empty
    /// store; only a failure to start the writer thread is returned.
    pub fn load(
        adapter: Arc<dyn KeyValueStore>,
        palette: ColorPalette,
    ) -> Result<Self, StoreError> {
        let lists = hydrate(adapter.as_ref());
        let writer = PersistWriter::spawn(adapter, TASKS_KEY).map_err(StoreError::WriterSpawn)?;
        Ok(Self {
            lists,
            palette,
            writer: Some(writer),
        })
    }

    /// A store that never persists
    pub fn in_memory(lists: Vec<TodoList>, palette: ColorPalette) -> Self {
        Self {
            lists,
            palette,
            writer: None,
        }
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TodoList> {
        self.lists.get(index)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.title == title)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Append a new empty list
    pub fn add_list(&mut self, title: &str, color: &str) -> Result<&TodoList, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.find_by_title(title).is_some() {
            return Err(ValidationError::DuplicateTitle(title.to_string()));
        }
        if color.trim().is_empty() {
            return Err(ValidationError::EmptyColor);
        }
        if !self.palette.contains(color) {
            return Err(ValidationError::UnknownColor(color.to_string()));
        }

        let id = fresh_id(self.lists.iter().map(|l| l.id));
        self.lists
            .push(TodoList::new(id, title.to_string(), color.to_string()));
        tracing::info!(id, title, color, "list created");
        self.persist();

        let index = self.lists.len() - 1;
        Ok(&self.lists[index])
    }

    /// Remove every list whose creation-order position is in `indices`.
    ///
    /// Out-of-range positions are ignored. Returns how many lists were removed.
    pub fn delete_lists(&mut self, indices: &BTreeSet<usize>) -> usize {
        let before = self.lists.len();
        let mut position = 0;
        self.lists.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });

        let removed = before - self.lists.len();
        if removed > 0 {
            tracing::info!(removed, "lists deleted");
            self.persist();
        }
        removed
    }

    /// Replace the items of the list titled `title` wholesale
    pub fn replace_items(&mut self, title: &str, items: Vec<Task>) -> Result<(), StoreError> {
        let list = self
            .lists
            .iter_mut()
            .find(|l| l.title == title)
            .ok_or_else(|| StoreError::ListNotFound {
                title: title.to_string(),
            })?;
        list.items = items;
        tracing::info!(title, count = list.items.len(), "list items replaced");
        self.persist();
        Ok(())
    }

    /// Replace the items of the list with immutable id `id` wholesale
    pub fn replace_items_by_id(&mut self, id: i64, items: Vec<Task>) -> Result<(), StoreError> {
        let list = self
            .lists
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(StoreError::ListIdNotFound { id })?;
        list.items = items;
        tracing::info!(id, count = list.items.len(), "list items replaced");
        self.persist();
        Ok(())
    }

    /// Reverse creation order with a spacer at each end
    pub fn display_slots(&self) -> Vec<DisplaySlot<'_>> {
        let mut slots = Vec::with_capacity(self.lists.len() + 2);
        slots.push(DisplaySlot::Spacer);
        slots.extend(
            self.lists
                .iter()
                .enumerate()
                .rev()
                .map(|(canonical, list)| DisplaySlot::List { canonical, list }),
        );
        slots.push(DisplaySlot::Spacer);
        slots
    }

    /// Lists in display (reverse creation) order, without spacers
    pub fn displayed(&self) -> impl Iterator<Item = &TodoList> {
        self.lists.iter().rev()
    }

    /// Map a position in display order (spacers excluded) to creation order
    pub fn display_to_canonical(&self, display_index: usize) -> Option<usize> {
        display_to_canonical(self.lists.len(), display_index)
    }

    /// Block until queued snapshots are on disk
    pub fn flush(&self) {
        if let Some(writer) = &self.writer {
            writer.flush();
        }
    }

    pub fn writer_stats(&self) -> WriterStats {
        self.writer
            .as_ref()
            .map(PersistWriter::stats)
            .unwrap_or_default()
    }

    fn persist(&self) {
        let Some(writer) = &self.writer else {
            return;
        };
        match snapshot::encode(&self.lists) {
            Ok(blob) => writer.submit(blob),
            Err(e) => tracing::error!(error = %e, "failed to serialize lists"),
        }
    }
}

/// `len - 1 - display_index`, or `None` when out of range
pub fn display_to_canonical(len: usize, display_index: usize) -> Option<usize> {
    (display_index < len).then(|| len - 1 - display_index)
}

/// Strict read of the stored lists; no fallback policy
pub fn load_lists(adapter: &dyn KeyValueStore) -> Result<Vec<TodoList>, StoreError> {
    match adapter.get(TASKS_KEY).map_err(StoreError::Read)? {
        None => Ok(Vec::new()),
        Some(blob) => Ok(snapshot::decode(&blob)?),
    }
}

fn hydrate(adapter: &dyn KeyValueStore) -> Vec<TodoList> {
    let blob = match adapter.get(TASKS_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            tracing::info!("no stored lists; starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored lists; starting empty");
            return Vec::new();
        }
    };

    match snapshot::decode(&blob) {
        Ok(lists) => {
            tracing::info!(count = lists.len(), "lists loaded");
            lists
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored lists are corrupt; starting empty");
            if let Err(e) = adapter.set(CORRUPT_BACKUP_KEY, &blob) {
                tracing::error!(error = %e, "failed to back up corrupt lists");
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use pretty_assertions::assert_eq;

    fn task(id: i64, title: &str, done: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            done,
        }
    }

    fn persisted_store() -> (Arc<MemoryStore>, ListStore) {
        let adapter = Arc::new(MemoryStore::new());
        let store = ListStore::load(adapter.clone(), ColorPalette::default()).unwrap();
        (adapter, store)
    }

    fn stored_lists(adapter: &MemoryStore) -> Vec<TodoList> {
        load_lists(adapter).unwrap()
    }

    fn three_lists() -> ListStore {
        let mut store = ListStore::in_memory(Vec::new(), ColorPalette::default());
        store.add_list("A", "tealTwist").unwrap();
        store.add_list("B", "deepOcean").unwrap();
        store.add_list("C", "vividOrange").unwrap();
        store
    }

    #[test]
    fn test_scenario_duplicate_title() {
        let (adapter, mut store) = persisted_store();
        assert!(store.is_empty());

        let created = store.add_list("Groceries", "tealTwist").unwrap();
        assert_eq!(created.title, "Groceries");
        assert!(created.items.is_empty());

        assert_eq!(
            store.add_list("Groceries", "vividOrange").unwrap_err(),
            ValidationError::DuplicateTitle("Groceries".to_string())
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.lists()[0].color, "tealTwist");

        store.flush();
        assert_eq!(stored_lists(&adapter), store.lists().to_vec());
    }

    #[test]
    fn test_add_list_validation_order() {
        let mut store = ListStore::in_memory(Vec::new(), ColorPalette::default());
        assert_eq!(store.add_list("   ", "").unwrap_err(), ValidationError::EmptyTitle);
        assert_eq!(store.add_list("Work", " ").unwrap_err(), ValidationError::EmptyColor);
        assert_eq!(
            store.add_list("Work", "darkBlue").unwrap_err(),
            ValidationError::UnknownColor("darkBlue".to_string())
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_titles_stay_unique() {
        let mut store = ListStore::in_memory(Vec::new(), ColorPalette::default());
        for title in ["a", "b", "a", "c", "b", "a", " a"] {
            let _ = store.add_list(title, "sunsetGold");
        }
        let titles: Vec<&str> = store.lists().iter().map(|l| l.title.as_str()).collect();
        // Exact-match comparison: " a" is a different title
        assert_eq!(titles, vec!["a", "b", "c", " a"]);
    }

    #[test]
    fn test_list_ids_unique() {
        let store = three_lists();
        let mut ids: Vec<i64> = store.lists().iter().map(|l| l.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_scenario_replace_items_after_detail_edit() {
        let (adapter, mut store) = persisted_store();
        store.add_list("Groceries", "tealTwist").unwrap();
        store
            .replace_items("Groceries", vec![task(1, "Milk", false)])
            .unwrap();

        let mut edited = store.find_by_title("Groceries").unwrap().items.clone();
        edited[0].done = true;
        edited.push(task(2, "Eggs", false));
        store.replace_items("Groceries", edited).unwrap();

        let list = store.find_by_title("Groceries").unwrap();
        assert_eq!(list.items.len(), 2);
        assert!(list.items[0].done);
        assert_eq!(list.items[1], task(2, "Eggs", false));

        store.flush();
        assert_eq!(stored_lists(&adapter), store.lists().to_vec());
    }

    #[test]
    fn test_replace_items_unknown_title_leaves_store_unchanged() {
        let (adapter, mut store) = persisted_store();
        store.add_list("Groceries", "tealTwist").unwrap();
        store.flush();
        let before_blob = adapter.get(TASKS_KEY).unwrap();
        let before = store.lists().to_vec();
        let writes_before = store.writer_stats();

        let err = store
            .replace_items("Errands", vec![task(1, "Mail", false)])
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.lists(), before.as_slice());

        store.flush();
        assert_eq!(adapter.get(TASKS_KEY).unwrap(), before_blob);
        assert_eq!(store.writer_stats(), writes_before);
    }

    #[test]
    fn test_replace_items_by_id() {
        let mut store = three_lists();
        let id = store.lists()[1].id;
        store
            .replace_items_by_id(id, vec![task(9, "x", true)])
            .unwrap();
        assert_eq!(store.lists()[1].items, vec![task(9, "x", true)]);
        assert!(store.lists()[0].items.is_empty());

        let err = store.replace_items_by_id(-5, vec![]).unwrap_err();
        assert!(matches!(err, StoreError::ListIdNotFound { id: -5 }));
    }

    #[test]
    fn test_scenario_delete_middle_list() {
        let mut store = three_lists();
        let removed = store.delete_lists(&BTreeSet::from([1]));
        assert_eq!(removed, 1);
        let titles: Vec<&str> = store.lists().iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let (adapter, mut store) = persisted_store();
        store.add_list("A", "tealTwist").unwrap();
        store.flush();
        let stats = store.writer_stats();

        assert_eq!(store.delete_lists(&BTreeSet::from([1, 7])), 0);
        assert_eq!(store.delete_lists(&BTreeSet::new()), 0);
        assert_eq!(store.len(), 1);

        store.flush();
        assert_eq!(store.writer_stats(), stats);
        assert_eq!(stored_lists(&adapter).len(), 1);
    }

    #[test]
    fn test_delete_all() {
        let mut store = three_lists();
        assert_eq!(store.delete_lists(&BTreeSet::from([0, 1, 2, 3])), 3);
        assert!(store.is_empty());
    }

    #[test]
    fn test_display_slots_reverse_with_spacers() {
        let store = three_lists();
        let slots = store.display_slots();
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0], DisplaySlot::Spacer);
        assert_eq!(slots[4], DisplaySlot::Spacer);

        let order: Vec<(usize, &str)> = slots
            .iter()
            .filter_map(|s| match s {
                DisplaySlot::List { canonical, list } => Some((*canonical, list.title.as_str())),
                DisplaySlot::Spacer => None,
            })
            .collect();
        assert_eq!(order, vec![(2, "C"), (1, "B"), (0, "A")]);

        let empty = ListStore::in_memory(Vec::new(), ColorPalette::default());
        assert_eq!(empty.display_slots(), vec![DisplaySlot::Spacer, DisplaySlot::Spacer]);
    }

    #[test]
    fn test_display_index_mapping() {
        let store = three_lists();
        assert_eq!(store.display_to_canonical(0), Some(2));
        assert_eq!(store.display_to_canonical(2), Some(0));
        assert_eq!(store.display_to_canonical(3), None);
        assert_eq!(display_to_canonical(0, 0), None);
    }

    #[test]
    fn test_round_trip_through_adapter() {
        let (adapter, mut store) = persisted_store();
        store.add_list("Groceries", "tealTwist").unwrap();
        store.add_list("Work", "deepOcean").unwrap();
        store
            .replace_items("Work", vec![task(1, "Ship", false), task(2, "Review", true)])
            .unwrap();
        store.delete_lists(&BTreeSet::from([0]));
        store.add_list("Home", "crimsonFade").unwrap();
        store.flush();

        let reloaded = ListStore::load(adapter.clone(), ColorPalette::default()).unwrap();
        assert_eq!(reloaded.lists(), store.lists());
    }

    #[test]
    fn test_scenario_corrupt_blob_loads_empty() {
        let blob = r#"[{"id":1,"title":"Trip","col"#;
        let adapter = Arc::new(MemoryStore::with_value(TASKS_KEY, blob));

        let store = ListStore::load(adapter.clone(), ColorPalette::default()).unwrap();
        assert!(store.is_empty());
        assert!(matches!(
            load_lists(adapter.as_ref()),
            Err(StoreError::CorruptState(_))
        ));
        // The unreadable blob is kept aside
        assert_eq!(
            adapter.get(CORRUPT_BACKUP_KEY).unwrap().as_deref(),
            Some(blob)
        );
    }

    #[test]
    fn test_unreadable_storage_loads_empty() {
        let adapter = Arc::new(MemoryStore::with_value(TASKS_KEY, "[]"));
        adapter.fail_reads(true);

        let store = ListStore::load(adapter.clone(), ColorPalette::default()).unwrap();
        assert!(store.is_empty());
        assert!(matches!(load_lists(adapter.as_ref()), Err(StoreError::Read(_))));
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let (adapter, mut store) = persisted_store();
        adapter.fail_writes(true);

        store.add_list("Groceries", "tealTwist").unwrap();
        store.flush();

        assert_eq!(store.len(), 1);
        assert_eq!(store.writer_stats().failed, 1);
        assert_eq!(adapter.get(TASKS_KEY).unwrap(), None);

        adapter.fail_writes(false);
        store.add_list("Work", "deepOcean").unwrap();
        store.flush();
        assert_eq!(stored_lists(&adapter).len(), 2);
    }

    #[test]
    fn test_in_memory_store_never_writes() {
        let mut store = three_lists();
        store.delete_lists(&BTreeSet::from([0]));
        store.flush();
        assert_eq!(store.writer_stats(), WriterStats::default());
    }
}
