use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::cart::Cart;
use crate::relay::roster::Roster;

const CHANGE_BUFFER: usize = 64;

/// Shared relay state: the roster plus a "something changed" signal that
/// every connection listens on.
#[derive(Clone)]
pub struct RelayState {
    roster: Arc<Mutex<Roster>>,
    changes: broadcast::Sender<()>,
}

impl RelayState {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        Self {
            roster: Arc::new(Mutex::new(Roster::new())),
            changes,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.changes.subscribe()
    }

    pub fn join(&self, id: Uuid) {
        self.roster.lock().join(id);
        self.notify();
    }

    pub fn update(&self, id: Uuid, cart: Cart) {
        if self.roster.lock().update(id, cart) {
            self.notify();
        }
    }

    pub fn leave(&self, id: Uuid) {
        self.roster.lock().leave(id);
        self.notify();
    }

    pub fn others(&self, id: Uuid) -> Vec<Cart> {
        self.roster.lock().others(id)
    }

    pub fn shoppers(&self) -> usize {
        self.roster.lock().len()
    }

    fn notify(&self) {
        // No receivers just means nobody is connected.
        let _ = self.changes.send(());
    }
}

impl Default for RelayState {
    fn default() -> Self {
        Self::new()
    }
}
