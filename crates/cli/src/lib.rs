//! Shared plumbing for the buildwatch, recolor and tilegen binaries

pub mod cmd;
pub mod logging;
pub mod settings;
pub mod usage;
