//! Turns user intents into gateway calls and board updates.
//!
//! Every failed call is logged and otherwise ignored: the board keeps its
//! previous contents and only the in-flight flags are reset.

use tasko_domain::{Priority, TodoId};

use crate::board::{EditSession, Filter, TodoBoard};
use crate::command::{Command, CommandError};
use crate::gateway::{TodoChanges, TodoGateway};
use crate::list::TodoList;

// =============================================================================
// BoardController
// =============================================================================

#[derive(Debug)]
pub struct BoardController<G> {
    gateway: G,
    board: TodoBoard,
}

impl<G: TodoGateway> BoardController<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            board: TodoBoard::new(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &TodoBoard {
        &self.board
    }

    /// Replaces the list with the server's.
    pub async fn load(&mut self) {
        match self.gateway.list().await {
            Ok(todos) => {
                tracing::debug!(count = todos.len(), "todos loaded");
                self.board.todos = TodoList::from_todos(todos);
            }
            Err(error) => tracing::error!(%error, "failed to fetch todos"),
        }
        self.board.loading = false;
    }

    /// Creates a todo from the draft. Blank drafts are ignored.
    pub async fn submit(&mut self) {
        self.submit_with(|_| {}).await;
    }

    /// Like [`Self::submit`], calling `in_flight` with the board once the
    /// request is about to go out.
    pub async fn submit_with(&mut self, in_flight: impl FnOnce(&TodoBoard)) {
        let title = self.board.draft_title.trim().to_string();
        if title.is_empty() {
            return;
        }

        self.board.adding = true;
        in_flight(&self.board);
        match self.gateway.create(title, self.board.draft_priority).await {
            Ok(todo) => {
                self.board.todos.prepend(todo);
                self.board.draft_title.clear();
                self.board.draft_priority = Priority::default();
            }
            Err(error) => tracing::error!(%error, "failed to add todo"),
        }
        self.board.adding = false;
    }

    pub async fn toggle(&mut self, id: TodoId) {
        let Some(completed) = self.board.todos.get(id).map(|todo| todo.completed) else {
            return;
        };

        match self
            .gateway
            .update(id, TodoChanges::completed(!completed))
            .await
        {
            Ok(todo) => {
                self.board.todos.merge(todo);
            }
            Err(error) => tracing::error!(%error, %id, "failed to toggle todo"),
        }
    }

    /// Opens the inline editor on `id` with its current title as the draft.
    pub fn begin_edit(&mut self, id: TodoId) {
        if let Some(todo) = self.board.todos.get(id) {
            self.board.editing = Some(EditSession {
                id,
                draft: todo.title.clone(),
            });
        }
    }

    pub fn set_edit_draft(&mut self, draft: impl Into<String>) {
        if let Some(session) = self.board.editing.as_mut() {
            session.draft = draft.into();
        }
    }

    /// Sends the trimmed draft. A blank draft keeps the editor open without
    /// a call; a failed call keeps it open too.
    pub async fn save_edit(&mut self) {
        let Some(session) = self.board.editing.as_ref() else {
            return;
        };
        let id = session.id;
        let title = session.draft.trim().to_string();
        if title.is_empty() {
            return;
        }

        match self.gateway.update(id, TodoChanges::title(title)).await {
            Ok(todo) => {
                self.board.todos.merge(todo);
                self.board.editing = None;
            }
            Err(error) => tracing::error!(%error, %id, "failed to edit todo"),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.board.editing = None;
    }

    pub async fn delete(&mut self, id: TodoId) {
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.board.todos.remove(id);
                if self.board.is_editing_todo(id) {
                    self.board.editing = None;
                }
            }
            Err(error) => tracing::error!(%error, %id, "failed to delete todo"),
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.board.filter = filter;
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.board.draft_priority = priority;
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.board.draft_title = title.into();
    }

    /// Runs one parsed command. `Help` and `Quit` belong to the caller and
    /// do nothing here.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NoSuchRow`] when a row number is outside the
    /// visible list.
    pub async fn execute(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Add(title) => {
                self.set_draft_title(title);
                self.submit().await;
            }
            Command::Priority(priority) => self.set_priority(priority),
            Command::Toggle(row) => {
                let id = self.row_id(row)?;
                self.toggle(id).await;
            }
            Command::Edit(row) => {
                let id = self.row_id(row)?;
                self.begin_edit(id);
            }
            Command::Delete(row) => {
                let id = self.row_id(row)?;
                self.delete(id).await;
            }
            Command::Filter(filter) => self.set_filter(filter),
            Command::Refresh => self.load().await,
            Command::SaveEdit(draft) => {
                if let Some(draft) = draft {
                    self.set_edit_draft(draft);
                }
                self.save_edit().await;
            }
            Command::CancelEdit => self.cancel_edit(),
            Command::Help | Command::Quit => {}
        }
        Ok(())
    }

    fn row_id(&self, row: usize) -> Result<TodoId, CommandError> {
        self.board.visible_id(row).ok_or(CommandError::NoSuchRow(row))
    }
}

// =============================================================================
// Tests
// =============================================================================
