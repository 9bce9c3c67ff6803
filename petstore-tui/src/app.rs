//! Main loop
//!
//! Each turn renders the model, then waits for whichever comes first: a
//! terminal event or a completed fetch. The resulting message goes through
//! the update layer, and any fetches it asks for are spawned before the next
//! render, so a pending load never blocks input.

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use petstore_core::FetchOutcome;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::FetchService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run until the user quits
pub async fn run(
    terminal: &mut Term,
    app: &mut App,
    fetches: &FetchService,
    mut outcomes: UnboundedReceiver<FetchOutcome>,
) -> Result<()> {
    let mut events = EventStream::new();
    fetches.spawn(update::start(app));

    loop {
        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        let msg = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(event) => event::handle_event(event?, app),
                None => AppMessage::Quit,
            },
            Some(outcome) = outcomes.recv() => AppMessage::Fetched(outcome),
        };

        fetches.spawn(update::update(app, msg));
    }

    update::stop(app);
    Ok(())
}
