//! Model Arena: a catalog of rated AI models with filtering, card
//! rendering and a rating form.
//!
//! The core (`catalog`, `filter`, `render`, `rating`, `controller`) has no
//! I/O. `shell` and `server` are presentation layers on top of it.

pub mod audio;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod rating;
pub mod render;
pub mod server;
pub mod shell;

pub use error::{ArenaError, Result};
