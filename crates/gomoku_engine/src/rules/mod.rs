//! Game rules for five-in-a-row.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the typestate engine and the contracts can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Direction, WIN_LENGTH, check_winner_at, run_length};
