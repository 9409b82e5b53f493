//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//!
//! Finished uploads are drained in the main loop and applied through
//! `App::handle_upload_response`.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
