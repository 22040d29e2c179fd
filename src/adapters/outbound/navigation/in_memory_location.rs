use crate::ports::outbound::{HashChangeSource, HashListener, ListenerId};
use std::cell::{Cell, RefCell};

/// InMemoryLocation adapter holding a location hash and its listeners
///
/// Stands in for a browser location: `set_hash` updates the fragment and
/// notifies listeners synchronously, like a `hashchange` event.
#[derive(Default)]
pub struct InMemoryLocation {
    hash: RefCell<String>,
    listeners: RefCell<Vec<(ListenerId, HashListener)>>,
    next_id: Cell<u64>,
}

impl InMemoryLocation {
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: RefCell::new(normalize(hash.into())),
            ..Default::default()
        }
    }

    /// Changes the hash and notifies listeners when it actually changed
    pub fn set_hash(&self, hash: impl Into<String>) {
        let hash = normalize(hash.into());
        if *self.hash.borrow() == hash {
            return;
        }
        *self.hash.borrow_mut() = hash.clone();

        // snapshot so listeners may add or remove listeners
        let listeners: Vec<HashListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&hash);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// `"plugin-ntia"` -> `"#plugin-ntia"`; empty stays empty
fn normalize(hash: String) -> String {
    let trimmed = hash.trim();
    if trimmed.is_empty() || trimmed == "#" {
        String::new()
    } else if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{}", trimmed)
    }
}

impl HashChangeSource for InMemoryLocation {
    fn current_hash(&self) -> String {
        self.hash.borrow().clone()
    }

    fn add_listener(&self, listener: HashListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }
}
