//! Application main loop
//!
//! Draw, poll, translate, update — roughly every 100 ms when idle,
//! immediately on input. The tick counter advances once per iteration and
//! drives the pulsing status dots.

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the main loop until the app asks to quit
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        app.tick = app.tick.wrapping_add(1);

        // 1. Render
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Exit check
        if app.should_quit {
            break;
        }

        // 3. Poll input (100 ms timeout keeps the pulse animation going)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. Translate to a message
            let msg = event::handle_event(event, app);

            // 5. Update state
            update::update(app, msg);
        }
    }

    Ok(())
}
