//! Event layer: terminal input handling

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::{DefaultKeymap, KeyBinding};
