//! I/O helpers for maze commands.

pub mod config;
pub mod render;
