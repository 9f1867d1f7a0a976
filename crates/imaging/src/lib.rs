//! Small image tools for Buildwatch
//!
//! This crate provides:
//! - An RGBA canvas with bounds-checked pixel access
//! - Color remapping (replace one exact color with another)
//! - Checkerboard tile sheet generation

pub mod canvas;
pub mod color;
pub mod error;
pub mod remap;
pub mod tiles;

// Re-exports
pub use canvas::{check_dimensions, Canvas, MAX_PIXELS};
pub use color::Color;
pub use error::{ImageError, Result};
pub use remap::{remap, RemapConfig};
pub use tiles::{generate, TileConfig, DEFAULT_COLOR1, DEFAULT_COLOR2};
