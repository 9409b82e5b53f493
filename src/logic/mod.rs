//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - confetti: Celebration particle bursts
//! - errors: Domain error types
//! - file: File type detection and utilities
//! - filter: Current-folder filtering and search matching
//! - folder: Folder name and move validation
//! - formatting: Human-readable sizes and dates
//! - layout: Contents grid sizing and scrolling
//! - navigation: Grid selection calculations
//! - path: Breadcrumb path reconstruction
//! - ui: Theme cycling, tips and effect timers
//! - upload: Upload batch validation and record synthesis

pub mod confetti;
pub mod errors;
pub mod file;
pub mod filter;
pub mod folder;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod path;
pub mod ui;
pub mod upload;
