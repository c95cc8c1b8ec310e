//! View state for the todo board and everything derived from it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use tasko_domain::{Priority, Todo, TodoId};

use crate::list::TodoList;

// =============================================================================
// Filter
// =============================================================================

/// Which records are shown. Purely local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter `{0}` (expected all, active or completed)")]
pub struct UnknownFilter(pub String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(UnknownFilter(value.to_string())),
        }
    }
}

// =============================================================================
// Progress
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// `completed / total` as a whole percentage, halves rounded up.
    pub percent: u8,
}

impl Progress {
    /// `None` when there is nothing to measure.
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let completed = completed.min(total);
        let rounded = (completed * 200 + total) / (total * 2);
        Some(Self {
            completed,
            total,
            percent: u8::try_from(rounded).unwrap_or(100),
        })
    }
}

// =============================================================================
// EditSession
// =============================================================================

/// The one record being renamed inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TodoId,
    pub draft: String,
}

// =============================================================================
// TodoBoard
// =============================================================================

pub const EMPTY_COMPLETED_MESSAGE: &str = "No completed tasks yet.";
pub const EMPTY_MESSAGE: &str = "No tasks here. Add one above.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoBoard {
    pub todos: TodoList,
    pub draft_title: String,
    pub draft_priority: Priority,
    pub filter: Filter,
    pub editing: Option<EditSession>,
    /// Set until the first list call settles, whatever its outcome.
    pub loading: bool,
    /// Set while a create call is in flight.
    pub adding: bool,
}

impl Default for TodoBoard {
    fn default() -> Self {
        Self {
            todos: TodoList::new(),
            draft_title: String::new(),
            draft_priority: Priority::default(),
            filter: Filter::default(),
            editing: None,
            loading: true,
            adding: false,
        }
    }
}

impl TodoBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records passing the active filter, in list order.
    pub fn visible(&self) -> impl Iterator<Item = &Todo> {
        let filter = self.filter;
        self.todos.iter().filter(move |todo| filter.matches(todo))
    }

    /// Id of the `row`-th visible record, counting from 1.
    #[must_use]
    pub fn visible_id(&self, row: usize) -> Option<TodoId> {
        row.checked_sub(1)
            .and_then(|index| self.visible().nth(index))
            .map(|todo| todo.id)
    }

    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        Progress::new(self.todos.completed_count(), self.todos.len())
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.todos.len() - self.todos.completed_count()
    }

    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        match self.filter {
            Filter::Completed => EMPTY_COMPLETED_MESSAGE,
            Filter::All | Filter::Active => EMPTY_MESSAGE,
        }
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Whether `id` is the record currently being edited.
    #[must_use]
    pub fn is_editing_todo(&self, id: TodoId) -> bool {
        self.editing.as_ref().is_some_and(|session| session.id == id)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use tasko_domain::{NewTodo, Timestamp, Title, TodoPatch};

    fn todo(title: &str, completed: bool) -> Todo {
        Todo::create(
            TodoId::generate(),
            NewTodo::new(Title::new(title).unwrap()),
            Timestamp::now(),
        )
        .apply(&TodoPatch::new().completed(completed))
    }

    fn board_with(todos: Vec<Todo>) -> TodoBoard {
        TodoBoard {
            todos: TodoList::from_todos(todos),
            loading: false,
            ..TodoBoard::new()
        }
    }

    fn visible_titles(board: &TodoBoard) -> Vec<&str> {
        board.visible().map(|todo| todo.title.as_str()).collect()
    }

    mod filter {
        use super::*;

        #[rstest]
        #[case("all", Filter::All)]
        #[case("Active", Filter::Active)]
        #[case(" completed ", Filter::Completed)]
        fn parses(#[case] input: &str, #[case] expected: Filter) {
            assert_eq!(input.parse::<Filter>(), Ok(expected));
        }

        #[rstest]
        fn rejects_unknown() {
            assert_eq!(
                "done".parse::<Filter>(),
                Err(UnknownFilter("done".to_string()))
            );
        }

        #[rstest]
        fn visible_follows_filter() {
            let mut board = board_with(vec![
                todo("a", false),
                todo("b", true),
                todo("c", false),
            ]);

            assert_eq!(visible_titles(&board), ["a", "b", "c"]);
            board.filter = Filter::Active;
            assert_eq!(visible_titles(&board), ["a", "c"]);
            board.filter = Filter::Completed;
            assert_eq!(visible_titles(&board), ["b"]);
        }

        #[rstest]
        fn visible_id_counts_from_one_within_filter() {
            let done = todo("b", true);
            let mut board = board_with(vec![todo("a", false), done.clone()]);
            board.filter = Filter::Completed;

            assert_eq!(board.visible_id(1), Some(done.id));
            assert_eq!(board.visible_id(0), None);
            assert_eq!(board.visible_id(2), None);
        }
    }

    mod progress {
        use super::*;

        #[rstest]
        #[case(0, 1, 0)]
        #[case(1, 3, 33)]
        #[case(2, 3, 67)]
        #[case(1, 8, 13)]
        #[case(1, 200, 1)]
        #[case(3, 3, 100)]
        fn percent_rounds_half_up(
            #[case] completed: usize,
            #[case] total: usize,
            #[case] expected: u8,
        ) {
            assert_eq!(Progress::new(completed, total).unwrap().percent, expected);
        }

        #[rstest]
        fn none_when_empty() {
            assert_eq!(board_with(Vec::new()).progress(), None);
        }

        #[rstest]
        fn counts_and_remaining() {
            let board = board_with(vec![todo("a", true), todo("b", false), todo("c", false)]);

            assert_eq!(
                board.progress(),
                Some(Progress {
                    completed: 1,
                    total: 3,
                    percent: 33,
                })
            );
            assert_eq!(board.remaining(), 2);
        }
    }

    #[rstest]
    #[case(Filter::All, EMPTY_MESSAGE)]
    #[case(Filter::Active, EMPTY_MESSAGE)]
    #[case(Filter::Completed, EMPTY_COMPLETED_MESSAGE)]
    fn empty_message_depends_on_filter(#[case] filter: Filter, #[case] expected: &str) {
        let board = TodoBoard {
            filter,
            ..board_with(Vec::new())
        };

        assert_eq!(board.empty_message(), expected);
    }

    #[rstest]
    fn new_board_is_loading_with_medium_draft() {
        let board = TodoBoard::new();

        assert!(board.loading);
        assert!(!board.adding);
        assert_eq!(board.draft_priority, Priority::Medium);
        assert_eq!(board.filter, Filter::All);
        assert!(!board.is_editing());
    }

    proptest! {
        #[test]
        fn active_and_completed_partition_all(flags in proptest::collection::vec(any::<bool>(), 0..32)) {
            let todos: Vec<Todo> = flags
                .iter()
                .enumerate()
                .map(|(index, completed)| todo(&format!("task {index}"), *completed))
                .collect();
            let mut board = board_with(todos);

            let all: Vec<TodoId> = board.visible().map(|todo| todo.id).collect();
            board.filter = Filter::Active;
            let active: Vec<TodoId> = board.visible().map(|todo| todo.id).collect();
            board.filter = Filter::Completed;
            let completed: Vec<TodoId> = board.visible().map(|todo| todo.id).collect();

            prop_assert!(active.iter().all(|id| !completed.contains(id)));
            prop_assert_eq!(active.len() + completed.len(), all.len());
            prop_assert!(all.iter().all(|id| active.contains(id) || completed.contains(id)));
            prop_assert_eq!(completed.len(), board.todos.completed_count());
        }

        #[test]
        fn percent_stays_within_bounds(completed in 0usize..500, extra in 0usize..500) {
            let total = completed + extra;
            if let Some(progress) = Progress::new(completed, total) {
                prop_assert!(progress.percent <= 100);
                prop_assert_eq!(progress.percent == 100, completed * 200 >= total * 199);
            } else {
                prop_assert_eq!(total, 0);
            }
        }
    }
}
