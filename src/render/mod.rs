//! Rendering and input adapter.
//!
//! Nothing here owns game rules. The renderer draws a [`Snapshot`], and
//! [`Command`] turns typed input into engine calls.
//!
//! [`Snapshot`]: crate::engine::Snapshot

mod command;
mod text;

pub use command::{apply, Applied, Command, CommandError};
pub use text::{grid_columns, TextRenderer};
