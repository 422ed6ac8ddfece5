//! Terminal interface for tweetsmith.

pub mod action;
pub mod app;
pub mod clipboard;
pub mod components;
pub mod event;
pub mod theme;

pub use app::App;
pub use clipboard::{ClipboardWriter, SystemClipboard};
