//! Browser history abstraction
//!
//! The address bar is modelled as a stack of paths with a cursor. `push`
//! behaves like `history.pushState` (no event); `back`/`forward` behave like
//! the browser buttons and notify every subscriber with a `PopState` event.

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Identifier of a history listener
pub type ListenerId = u64;

/// Event delivered to history listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    /// The current entry changed through back/forward navigation
    PopState { path: String },
}

/// Live registration of a history listener.
///
/// Dropping the subscription closes its channel; the history prunes closed
/// listeners on the next notification.
#[derive(Debug)]
pub struct HistorySubscription {
    id: ListenerId,
    receiver: UnboundedReceiver<HistoryEvent>,
}

impl HistorySubscription {
    pub fn new(id: ListenerId, receiver: UnboundedReceiver<HistoryEvent>) -> Self {
        Self { id, receiver }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Next queued event, without waiting
    pub fn try_next(&mut self) -> Option<HistoryEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next event
    pub async fn next(&mut self) -> Option<HistoryEvent> {
        self.receiver.recv().await
    }
}

/// Browser history surface consumed by the navigator
pub trait BrowserHistory {
    /// Current address-bar path
    fn location(&self) -> String;

    /// Push a new entry and make it current. Does not notify listeners.
    fn push(&mut self, path: &str);

    /// Move to the previous entry, notifying listeners if it moved
    fn back(&mut self);

    /// Move to the next entry, notifying listeners if it moved
    fn forward(&mut self);

    /// Register a listener for `PopState` events
    fn subscribe(&mut self) -> HistorySubscription;

    /// Deregister a listener
    fn unsubscribe(&mut self, id: ListenerId);

    /// Number of registered listeners
    fn listener_count(&self) -> usize;
}

/// In-memory history used by the terminal client and by tests
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    listeners: Vec<(ListenerId, UnboundedSender<HistoryEvent>)>,
    next_listener_id: ListenerId,
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial_path`
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_path.into()],
            cursor: 0,
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn notify(&mut self) {
        let event = HistoryEvent::PopState {
            path: self.entries[self.cursor].clone(),
        };
        self.listeners
            .retain(|(_, sender)| sender.send(event.clone()).is_ok());
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl BrowserHistory for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn back(&mut self) {
        if self.can_go_back() {
            self.cursor -= 1;
            self.notify();
        }
    }

    fn forward(&mut self) {
        if self.can_go_forward() {
            self.cursor += 1;
            self.notify();
        }
    }

    fn subscribe(&mut self) -> HistorySubscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, sender));
        HistorySubscription::new(id, receiver)
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
