//! Discord integration: client startup, event handlers, slash commands and buttons.

pub mod command;
pub mod component;
pub mod embed;
pub mod handler;
pub mod start;
