//! Scoped keyboard subscriptions.
//!
//! Components that react to a global key (Escape) subscribe while mounted and hold a
//! [`KeySubscription`]. Dropping the guard releases the registration, so repeated
//! mount/unmount cycles never leave stale or duplicate listeners behind.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::trace;

#[derive(Debug, Default)]
pub struct KeyListenerRegistry {
    next_id: Cell<u64>,
    active: RefCell<Vec<(u64, KeyCode)>>,
}

impl KeyListenerRegistry {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn subscribe(self: &Rc<Self>, key: KeyCode) -> KeySubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.active.borrow_mut().push((id, key));
        trace!(id, ?key, "key listener attached");

        KeySubscription { id, key, registry: Rc::clone(self) }
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.active.borrow().len()
    }

    fn is_active(&self, id: u64) -> bool {
        self.active.borrow().iter().any(|(active_id, _)| *active_id == id)
    }

    fn release(&self, id: u64) {
        self.active.borrow_mut().retain(|(active_id, _)| *active_id != id);
        trace!(id, "key listener detached");
    }
}

/// Live registration for one key; released on drop
#[derive(Debug)]
pub struct KeySubscription {
    id: u64,
    key: KeyCode,
    registry: Rc<KeyListenerRegistry>,
}

impl KeySubscription {
    /// Whether a key press should reach this subscriber
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.kind != KeyEventKind::Release
            && event.code == self.key
            && self.registry.is_active(self.id)
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}
