//! Plain-text rendering of a [`TodoBoard`].

use std::fmt::Write;

use tasko_domain::Priority;

use crate::board::{Filter, Progress, TodoBoard};

pub const TITLE: &str = "Tasko";
pub const TAGLINE: &str = "A quiet place to get things done.";
pub const PLACEHOLDER: &str = "What needs to be done?";
pub const LOADING: &str = "Loading...";

const BAR_WIDTH: usize = 24;

/// Draws the whole board.
#[must_use]
pub fn render(board: &TodoBoard) -> String {
    let mut out = String::new();

    out.push_str(TITLE);
    out.push('\n');
    out.push_str(TAGLINE);
    out.push_str("\n\n");

    if let Some(progress) = board.progress() {
        out.push_str(&progress_line(progress));
        out.push_str("\n\n");
    }

    out.push_str(&draft_line(board));
    out.push_str("\n\n");
    out.push_str(&filter_tabs(board.filter));
    out.push_str("\n\n");

    if board.loading {
        out.push_str(LOADING);
        out.push('\n');
    } else if board.visible().next().is_none() {
        out.push_str(board.empty_message());
        out.push('\n');
    } else {
        for (index, todo) in board.visible().enumerate() {
            let mark = if todo.completed { 'x' } else { ' ' };
            let row = index + 1;
            match board.editing.as_ref().filter(|session| session.id == todo.id) {
                Some(session) => {
                    let _ = writeln!(out, "{row:>3}. [{mark}] > {}_", session.draft);
                    out.push_str("        Enter to save, :cancel to discard\n");
                }
                None => {
                    let _ = writeln!(
                        out,
                        "{row:>3}. [{mark}] {}  ({})",
                        todo.title,
                        todo.priority.label()
                    );
                }
            }
        }
    }

    if !board.todos.is_empty() {
        out.push('\n');
        out.push_str(&remaining_line(board.remaining()));
        out.push('\n');
    }

    out
}

/// `2 of 5 completed  [#########---------------]  40%`
#[must_use]
pub fn progress_line(progress: Progress) -> String {
    let filled = (progress.completed * BAR_WIDTH) / progress.total;
    format!(
        "{} of {} completed  [{}{}]  {}%",
        progress.completed,
        progress.total,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.percent
    )
}

fn draft_line(board: &TodoBoard) -> String {
    let draft = if board.draft_title.is_empty() {
        PLACEHOLDER
    } else {
        board.draft_title.as_str()
    };
    let priorities: Vec<String> = Priority::ALL
        .iter()
        .map(|priority| {
            if *priority == board.draft_priority {
                format!("[{}]", priority.label())
            } else {
                priority.label().to_string()
            }
        })
        .collect();
    let action = if board.adding { "Adding..." } else { "Add Task" };

    format!("+ {draft}  {}  <{action}>", priorities.join(" "))
}

fn filter_tabs(active: Filter) -> String {
    Filter::ALL
        .iter()
        .map(|filter| {
            if *filter == active {
                format!("[{}]", filter.label())
            } else {
                format!(" {} ", filter.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `1 task remaining` / `3 tasks remaining`
#[must_use]
pub fn remaining_line(remaining: usize) -> String {
    let noun = if remaining == 1 { "task" } else { "tasks" };
    format!("{remaining} {noun} remaining")
}
