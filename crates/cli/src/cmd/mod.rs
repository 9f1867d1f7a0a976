//! Command implementations

pub mod recolor;
pub mod tiles;
pub mod watch;
