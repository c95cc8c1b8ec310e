use tasko_domain::{Todo, TodoId};

/// The client's copy of the collection, in display order.
///
/// Server responses are reconciled by id, never by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    #[must_use]
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// Puts a freshly created record at the top.
    pub fn prepend(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    /// Replaces the record with the same id, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when no record has that id.
    pub fn merge(&mut self, todo: Todo) -> bool {
        match self.todos.iter_mut().find(|existing| existing.id == todo.id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => false,
        }
    }

    /// Returns the removed record, if any.
    pub fn remove(&mut self, id: TodoId) -> Option<Todo> {
        let position = self.todos.iter().position(|todo| todo.id == id)?;
        Some(self.todos.remove(position))
    }

    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tasko_domain::{NewTodo, Timestamp, Title, TodoPatch};

    fn todo(title: &str) -> Todo {
        Todo::create(
            TodoId::generate(),
            NewTodo::new(Title::new(title).unwrap()),
            Timestamp::now(),
        )
    }

    fn titles(list: &TodoList) -> Vec<&str> {
        list.iter().map(|todo| todo.title.as_str()).collect()
    }

    #[fixture]
    fn list() -> TodoList {
        TodoList::from_todos(vec![todo("c"), todo("b"), todo("a")])
    }

    #[rstest]
    fn prepend_puts_record_first(mut list: TodoList) {
        list.prepend(todo("d"));

        assert_eq!(titles(&list), ["d", "c", "b", "a"]);
    }

    #[rstest]
    fn merge_replaces_in_place(mut list: TodoList) {
        let middle = list.iter().nth(1).unwrap().clone();
        let updated = middle.apply(&TodoPatch::new().completed(true));

        assert!(list.merge(updated.clone()));

        assert_eq!(titles(&list), ["c", "b", "a"]);
        assert_eq!(list.get(middle.id), Some(&updated));
        assert_eq!(list.completed_count(), 1);
    }

    #[rstest]
    fn merge_ignores_unknown_id(mut list: TodoList) {
        let before = list.clone();

        assert!(!list.merge(todo("stranger")));

        assert_eq!(list, before);
    }

    #[rstest]
    fn remove_by_id(mut list: TodoList) {
        let first = list.iter().next().unwrap().id;

        let removed = list.remove(first);

        assert_eq!(removed.map(|todo| todo.title), Some("c".to_string()));
        assert_eq!(titles(&list), ["b", "a"]);
        assert!(list.remove(first).is_none());
    }

    #[rstest]
    fn empty_list() {
        let list = TodoList::new();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.completed_count(), 0);
    }
}
