//! Input/output around the solver: files, rendering, progress and errors

/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG rendering
pub mod image;
/// Structure and word list loading
pub mod loader;
/// Spinner progress reporting
pub mod progress;
/// Text rendering
pub mod render;
