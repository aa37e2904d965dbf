//! Cloud Console TUI
//!
//! Terminal frontend for the cloud console, structured as an Elm
//! Architecture (TEA) loop:
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//!
//! All data comes from the in-memory demo inventory in
//! `cloud-console-core`; nothing is persisted.

mod app;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. Initialize the terminal
    let mut terminal = init_terminal()?;

    // 2. Create the application state
    let mut app = model::App::new();

    // 3. Run the main loop
    let result = app::run(&mut terminal, &mut app);

    // 4. Restore the terminal (on success and failure alike)
    restore_terminal(&mut terminal)?;

    // 5. Surface the loop result
    result
}
