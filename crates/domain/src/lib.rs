//! Domain model for the tasko todo service.
//!
//! A single entity, [`Todo`], plus the validated inputs used to create and
//! partially update it. Both the HTTP server and the terminal client share
//! these types so the wire shape has exactly one definition.

pub mod errors;
pub mod timestamp;
pub mod todo;

pub use errors::ValidationError;
pub use timestamp::Timestamp;
pub use todo::{NewTodo, Priority, Title, Todo, TodoId, TodoPatch, sort_newest_first};
