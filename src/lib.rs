// ABOUTME: Library root for portside - exposes the client core modules.
// ABOUTME: The CLI binary is in main.rs.

pub mod api;
pub mod config;
pub mod edit;
pub mod error;
pub mod logs;
pub mod output;
pub mod types;
pub mod widget;
