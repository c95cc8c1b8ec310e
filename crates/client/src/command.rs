//! Line-oriented commands for the terminal client.

use thiserror::Error;

use tasko_domain::{Priority, ValidationError};

use crate::board::{Filter, UnknownFilter};

pub const HELP: &str = "\
Commands:
  add <title>        create a task with the selected priority
  priority <level>   select low, medium or high for new tasks
  toggle <n>         mark task n done or not done
  edit <n>           rename task n
  delete <n>         remove task n
  filter <name>      show all, active or completed tasks
  refresh            reload from the server
  help               show this text
  quit               leave
While editing, type the new title and press Enter (Enter alone keeps the
draft); :cancel or Esc discards it.";

const ESCAPE: char = '\u{1b}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Priority(Priority),
    Toggle(usize),
    Edit(usize),
    Delete(usize),
    Filter(Filter),
    Refresh,
    Help,
    Quit,
    /// Accepts the edit, replacing the draft first when a line was typed.
    SaveEdit(Option<String>),
    CancelEdit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("nothing to do")]
    Empty,

    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a row number")]
    InvalidRow(String),

    #[error("there is no task {0}")]
    NoSuchRow(usize),

    #[error(transparent)]
    Priority(#[from] ValidationError),

    #[error(transparent)]
    Filter(#[from] UnknownFilter),
}

impl Command {
    /// Parses one input line. `editing` switches to the inline editor's
    /// grammar, where any text is a new title.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for blank input outside the editor, unknown
    /// verbs, and missing or malformed arguments.
    pub fn parse(line: &str, editing: bool) -> Result<Self, CommandError> {
        if editing {
            return Ok(Self::parse_edit_line(line));
        }

        let line = line.trim();
        let (verb, argument) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "add" | "a" => required("add", argument).map(|title| Self::Add(title.to_string())),
            "priority" | "p" => Ok(Self::Priority(required("priority", argument)?.parse()?)),
            "toggle" | "t" => row(required("toggle", argument)?).map(Self::Toggle),
            "edit" | "e" => row(required("edit", argument)?).map(Self::Edit),
            "delete" | "d" | "rm" => row(required("delete", argument)?).map(Self::Delete),
            "filter" | "f" => Ok(Self::Filter(required("filter", argument)?.parse()?)),
            "refresh" | "r" => Ok(Self::Refresh),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }

    fn parse_edit_line(line: &str) -> Self {
        if line.contains(ESCAPE) || line.trim() == ":cancel" {
            return Self::CancelEdit;
        }
        let text = line.trim_end_matches(['\r', '\n']);
        if text.trim().is_empty() {
            Self::SaveEdit(None)
        } else {
            Self::SaveEdit(Some(text.to_string()))
        }
    }
}

fn required<'a>(verb: &'static str, argument: &'a str) -> Result<&'a str, CommandError> {
    if argument.is_empty() {
        Err(CommandError::MissingArgument(verb))
    } else {
        Ok(argument)
    }
}

fn row(argument: &str) -> Result<usize, CommandError> {
    match argument.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(CommandError::InvalidRow(argument.to_string())),
    }
}
