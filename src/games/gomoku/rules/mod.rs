//! Game rules for gomoku.
//!
//! Pure functions over a [`Board`](super::Board). The engine calls them after
//! each placement; they never mutate anything.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Axis, is_win, line_length, winning_axis};
