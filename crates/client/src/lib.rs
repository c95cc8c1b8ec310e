//! Terminal client for the tasko todo service.
//!
//! [`controller::BoardController`] drives a [`board::TodoBoard`] through a
//! [`gateway::TodoGateway`]; [`render::render`] draws it and
//! [`command::Command`] parses what the user types.

pub mod board;
pub mod command;
pub mod config;
pub mod controller;
pub mod gateway;
pub mod list;
pub mod render;

pub use board::{EditSession, Filter, Progress, TodoBoard};
pub use command::{Command, CommandError};
pub use config::ClientConfig;
pub use controller::BoardController;
pub use gateway::{ClientError, HttpTodoGateway, TodoChanges, TodoGateway};
pub use list::TodoList;
pub use render::render;
