//! Filesystem utilities for promptcraft.
//!
//! Atomic writes keep the history file and exported prompts from being left
//! in a partial state by crashes or interruptions.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
