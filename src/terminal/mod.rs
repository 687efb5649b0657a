//! Terminal presentation adapter.
//!
//! Turns text lines into engine calls and engine queries into text. Holds no
//! game state of its own.

mod command;
mod render;
mod session;

pub use command::{Command, CommandError};
pub use session::{Flow, Session};
