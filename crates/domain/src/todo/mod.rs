mod aggregate;
mod identifier;
mod input;
mod priority;

pub use aggregate::{Todo, sort_newest_first};
pub use identifier::TodoId;
pub use input::{NewTodo, Title, TodoPatch};
pub use priority::Priority;
