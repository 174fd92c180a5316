use crate::domain::{format_task, Filter, Priority, Todo};
use crate::persistence::{KeyValueStore, TODOS_KEY};
use anyhow::{Context, Result};
use std::rc::Rc;
use tracing::{debug, warn};

/// Owns the ordered task collection and mirrors it into the key-value store
/// after every mutation.
pub struct TodoStore {
    todos: Vec<Todo>,
    kv: Rc<dyn KeyValueStore>,
}

impl TodoStore {
    /// Load the collection from storage. A missing value, a read failure and
    /// a parse failure all start from an empty collection.
    pub fn load(kv: Rc<dyn KeyValueStore>) -> Self {
        let todos = match kv.get(TODOS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Stored todos are unreadable, starting empty: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read stored todos, starting empty: {}", e);
                Vec::new()
            }
        };

        debug!(count = todos.len(), "Loaded todos");
        Self { todos, kv }
    }

    /// The whole collection, in order
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Append a new task. Validation of the text is the caller's job.
    pub fn add_todo(&mut self, task: &str, due_date: &str, priority: Option<Priority>) -> Result<Todo> {
        let todo = Todo::new(task, due_date, priority.unwrap_or_default());
        self.todos.push(todo.clone());
        debug!(id = %todo.id, "Added todo");
        self.save()?;
        Ok(todo)
    }

    /// Overwrite the text and (optionally) the priority of a task in place.
    /// Due date and status are left alone.
    pub fn edit_todo(&mut self, id: &str, updated_task: &str, updated_priority: Option<Priority>) -> Result<Option<Todo>> {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        todo.task = format_task(updated_task);
        if let Some(priority) = updated_priority {
            todo.priority = priority;
        }
        let updated = todo.clone();

        debug!(id, "Edited todo");
        self.save()?;
        Ok(Some(updated))
    }

    /// Remove every task with the given id. Always writes.
    pub fn delete_todo(&mut self, id: &str) -> Result<()> {
        self.todos.retain(|t| t.id != id);
        debug!(id, "Deleted todo");
        self.save()
    }

    /// Flip the completed flag; returns the new value, or `None` if the id is unknown
    pub fn toggle_todo_status(&mut self, id: &str) -> Result<Option<bool>> {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        todo.completed = !todo.completed;
        let completed = todo.completed;

        debug!(id, completed, "Toggled todo");
        self.save()?;
        Ok(Some(completed))
    }

    /// Empty the collection. Only writes when there was something to clear.
    pub fn clear_all_todos(&mut self) -> Result<()> {
        if self.todos.is_empty() {
            return Ok(());
        }

        self.todos.clear();
        debug!("Cleared all todos");
        self.save()
    }

    /// Tasks matching a filter key ("all", "pending", "completed").
    /// Unknown keys give an empty list.
    pub fn filter_todos(&self, key: &str) -> Vec<&Todo> {
        match Filter::parse(key) {
            Some(filter) => self.filter(filter),
            None => Vec::new(),
        }
    }

    fn filter(&self, filter: Filter) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|t| filter.matches(t.completed))
            .collect()
    }

    /// Apply a new order for a subset of the collection (the rows currently on
    /// screen). The slots those tasks occupy are refilled in the new order;
    /// every other task keeps its position.
    pub fn reorder_visible(&mut self, new_order: &[String]) -> Result<()> {
        let is_moved = |todo: &Todo| new_order.contains(&todo.id);

        let mut moved: Vec<Todo> = Vec::with_capacity(new_order.len());
        for id in new_order {
            if let Some(todo) = self.todos.iter().find(|t| &t.id == id) {
                if !moved.iter().any(|m| m.id == todo.id) {
                    moved.push(todo.clone());
                }
            }
        }

        let mut replacements = moved.into_iter();
        let mut reordered = Vec::with_capacity(self.todos.len());
        for todo in self.todos.drain(..) {
            if is_moved(&todo) {
                // Slots and replacements have the same count, since both are
                // the tasks whose ids appear in `new_order`.
                reordered.push(replacements.next().unwrap_or(todo));
            } else {
                reordered.push(todo);
            }
        }
        self.todos = reordered;

        debug!(moved = new_order.len(), "Reordered todos");
        self.save()
    }

    /// Serialize the collection and write it under the todos key
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.todos).context("Failed to serialize todos")?;
        self.kv
            .set(TODOS_KEY, &json)
            .context("Failed to save todos")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{FileKv, MemoryKv};
    use pretty_assertions::assert_eq;

    fn create_test_store() -> (TodoStore, MemoryKv) {
        let kv = MemoryKv::default();
        let store = TodoStore::load(Rc::new(kv.clone()));
        (store, kv)
    }

    fn ids(store: &TodoStore) -> Vec<String> {
        store.todos().iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let (store, kv) = create_test_store();
        assert!(store.todos().is_empty());
        assert_eq!(kv.writes(), 0);
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let kv = MemoryKv::with_entry(TODOS_KEY, "{not json");
        let store = TodoStore::load(Rc::new(kv));
        assert!(store.todos().is_empty());
    }

    #[test]
    fn test_add_todo_scenario() {
        let (mut store, kv) = create_test_store();

        let todo = store.add_todo("Buy milk", "", None).unwrap();
        assert_eq!(todo.task, "Buy milk");
        assert_eq!(todo.due_date, "No due date");
        assert_eq!(todo.priority, Priority::Low);
        assert!(!todo.completed);
        assert_eq!(kv.writes(), 1);

        assert_eq!(store.toggle_todo_status(&todo.id).unwrap(), Some(true));
        assert!(store.filter_todos("completed").iter().any(|t| t.id == todo.id));
        assert!(!store.filter_todos("pending").iter().any(|t| t.id == todo.id));

        store.delete_todo(&todo.id).unwrap();
        assert!(store.todos().is_empty());
    }

    #[test]
    fn test_add_long_task_is_truncated() {
        let (mut store, _kv) = create_test_store();
        let text = "0123456789".repeat(4);

        let todo = store.add_todo(&text, "2024-01-01", Some(Priority::High)).unwrap();

        assert_eq!(todo.task, format!("{}...", &text[..30]));
        assert_eq!(todo.task.len(), 33);
        assert_eq!(store.todos()[0].task, todo.task);
        assert_eq!(store.todos()[0].priority, Priority::High);
    }

    #[test]
    fn test_add_then_delete_restores_collection() {
        let (mut store, _kv) = create_test_store();
        store.add_todo("First", "", None).unwrap();
        store.add_todo("Second", "", Some(Priority::Medium)).unwrap();
        let before = store.todos().to_vec();

        let added = store.add_todo("Temporary", "", None).unwrap();
        store.delete_todo(&added.id).unwrap();

        assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn test_delete_unknown_id_still_writes() {
        let (mut store, kv) = create_test_store();
        store.delete_todo("nope").unwrap();
        assert_eq!(kv.writes(), 1);
    }

    #[test]
    fn test_edit_todo_in_place() {
        let (mut store, _kv) = create_test_store();
        let first = store.add_todo("First", "tomorrow", Some(Priority::High)).unwrap();
        let second = store.add_todo("Second", "", None).unwrap();

        let edited = store.edit_todo(&first.id, "First, reworded", None).unwrap().unwrap();

        assert_eq!(edited.task, "First, reworded");
        assert_eq!(edited.priority, Priority::High);
        assert_eq!(edited.due_date, "tomorrow");
        assert_eq!(ids(&store), vec![first.id.clone(), second.id.clone()]);

        let edited = store.edit_todo(&second.id, "Second", Some(Priority::Medium)).unwrap().unwrap();
        assert_eq!(edited.priority, Priority::Medium);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let (mut store, kv) = create_test_store();
        assert!(store.edit_todo("missing", "text", None).unwrap().is_none());
        assert_eq!(kv.writes(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_and_keeps_status() {
        let (mut store, _kv) = create_test_store();
        let todo = store.add_todo("Task", "", None).unwrap();

        store.toggle_todo_status(&todo.id).unwrap();
        assert_eq!(store.todos()[0].status, "pending");
        store.toggle_todo_status(&todo.id).unwrap();

        assert!(!store.todos()[0].completed);
        assert_eq!(store.toggle_todo_status("missing").unwrap(), None);
    }

    #[test]
    fn test_clear_all_writes_only_when_non_empty() {
        let (mut store, kv) = create_test_store();

        store.clear_all_todos().unwrap();
        assert_eq!(kv.writes(), 0);

        store.add_todo("Task", "", None).unwrap();
        store.clear_all_todos().unwrap();
        assert!(store.todos().is_empty());
        assert_eq!(kv.writes(), 2);
    }

    #[test]
    fn test_filter_todos() {
        let (mut store, _kv) = create_test_store();
        let a = store.add_todo("A", "", None).unwrap();
        let b = store.add_todo("B", "", None).unwrap();
        let c = store.add_todo("C", "", None).unwrap();
        store.toggle_todo_status(&b.id).unwrap();

        let all: Vec<&str> = store.filter_todos("all").iter().map(|t| t.id.as_str()).collect();
        let pending: Vec<&str> = store.filter_todos("pending").iter().map(|t| t.id.as_str()).collect();
        let completed: Vec<&str> = store.filter_todos("completed").iter().map(|t| t.id.as_str()).collect();

        assert_eq!(all, vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);
        assert_eq!(pending, vec![a.id.as_str(), c.id.as_str()]);
        assert_eq!(completed, vec![b.id.as_str()]);
        assert!(store.filter_todos("done").is_empty());
        assert!(store.filter_todos("All").is_empty());
    }

    #[test]
    fn test_reorder_full_view() {
        let (mut store, _kv) = create_test_store();
        let a = store.add_todo("A", "", None).unwrap().id;
        let b = store.add_todo("B", "", None).unwrap().id;
        let c = store.add_todo("C", "", None).unwrap().id;

        store.reorder_visible(&[c.clone(), a.clone(), b.clone()]).unwrap();

        assert_eq!(ids(&store), vec![c, a, b]);
    }

    #[test]
    fn test_reorder_filtered_view_keeps_hidden_tasks() {
        let (mut store, kv) = create_test_store();
        let a = store.add_todo("A", "", None).unwrap().id;
        let b = store.add_todo("B", "", None).unwrap().id;
        let c = store.add_todo("C", "", None).unwrap().id;
        let d = store.add_todo("D", "", None).unwrap().id;
        store.toggle_todo_status(&b).unwrap();
        let writes_before = kv.writes();

        // Pending view shows A, C, D; move D to the top of that view.
        store.reorder_visible(&[d.clone(), a.clone(), c.clone()]).unwrap();

        assert_eq!(ids(&store), vec![d, b, a, c]);
        assert_eq!(kv.writes(), writes_before + 1);
    }

    #[test]
    fn test_round_trip_through_storage() {
        let (mut store, kv) = create_test_store();
        store.add_todo("Buy milk", "", None).unwrap();
        let done = store.add_todo("Call mum", "Friday", Some(Priority::High)).unwrap();
        store.toggle_todo_status(&done.id).unwrap();

        let reloaded = TodoStore::load(Rc::new(kv.clone()));

        assert_eq!(reloaded.todos(), store.todos());
    }

    #[test]
    fn test_round_trip_through_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = TodoStore::load(Rc::new(FileKv::new(temp_dir.path())));
        store.add_todo("Persist me", "", Some(Priority::Medium)).unwrap();

        let reloaded = TodoStore::load(Rc::new(FileKv::new(temp_dir.path())));

        assert_eq!(reloaded.todos(), store.todos());
    }

    #[test]
    fn test_failed_write_keeps_mutation_in_memory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = TodoStore::load(Rc::new(FileKv::new(temp_dir.path().join("gone"))));

        assert!(store.add_todo("Unsaved", "", None).is_err());
        assert_eq!(store.todos().len(), 1);
    }
}
