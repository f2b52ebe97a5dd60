// ABOUTME: Library root for dockmon - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod error;
pub mod runtime;
pub mod summary;
pub mod types;
pub mod web;
