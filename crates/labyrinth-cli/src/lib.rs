//! Labyrinth CLI library.
//!
//! Terminal styling, output formatting, and logging setup shared by the
//! `labyrinth-cli` binary.

pub mod logging;
pub mod output;
pub mod terminal;
