use std::io;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;

use crate::client::CycleOutcome;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Cycle(CycleOutcome),
    /// Terminal input failed or ended; no further keys will arrive.
    InputClosed,
}

/// Merges terminal input and finished fetch cycles into one queue.
pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();

        let task = tokio::spawn(forward_input(EventStream::new(), tx.clone()));

        Self { tx, rx, _task: task }
    }

    /// Sender for producers outside the input task, such as the scheduler.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards key and resize events until the stream fails or ends, then sends
/// `InputClosed` so the consumer can shut down.
async fn forward_input<S>(mut reader: S, tx: mpsc::UnboundedSender<Event>)
where
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
    while let Some(maybe_event) = reader.next().await {
        let evt = match maybe_event {
            Ok(evt) => evt,
            Err(err) => {
                tracing::error!("terminal input failed: {err}");
                break;
            }
        };
        let mapped = match evt {
            CrosstermEvent::Key(key) => Some(Event::Key(key)),
            CrosstermEvent::Resize(_, _) => Some(Event::Resize),
            _ => None,
        };
        if let Some(e) = mapped
            && tx.send(e).is_err()
        {
            return;
        }
    }
    let _ = tx.send(Event::InputClosed);
}
