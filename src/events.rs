//! In-process event listener registry
//!
//! The native side reports notification lifecycle events (`trigger`, `click`,
//! `clear`, `cancel`, ...) back through the bridge's callback path; this
//! registry fans each event out to the listeners the application registered.
//!
//! Listeners are kept per event name in insertion order, which is also the
//! invocation order on dispatch. Duplicate registrations are allowed;
//! unregistration removes the first entry matching by reference identity.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::debug;

/// A registered event listener
pub type Listener = Arc<dyn Fn(&Value) + Send + Sync>;

/// Registry mapping event names to ordered listener lists
pub struct EventRegistry {
    listeners: RwLock<HashMap<String, Vec<Listener>>>,
}

impl EventRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
        }
    }

    /// Register a listener for the given event
    ///
    /// Appends to the event's list, creating it if absent. The same listener
    /// may be registered more than once and will then be invoked once per
    /// registration.
    pub fn on(&self, event: &str, listener: Listener) {
        let mut map = self.listeners.write().unwrap();
        map.entry(event.to_string()).or_default().push(listener);
    }

    /// Unregister a listener from the given event
    ///
    /// Removes the first entry whose listener is the same allocation as the
    /// one supplied (reference identity, not behavioral equality), then stops.
    /// No-op if the event has no listeners or none match.
    pub fn un(&self, event: &str, listener: &Listener) {
        let mut map = self.listeners.write().unwrap();

        let Some(list) = map.get_mut(event) else {
            return;
        };

        if let Some(pos) = list.iter().position(|l| Arc::ptr_eq(l, listener)) {
            list.remove(pos);
        }
    }

    /// Dispatch an event payload to every listener registered for it
    ///
    /// Iterates over a snapshot of the listener list taken before the first
    /// invocation, so a listener registering or unregistering listeners
    /// mid-dispatch never skips or double-invokes anyone in this round; such
    /// mutations take effect from the next dispatch.
    pub fn emit(&self, event: &str, payload: &Value) {
        let snapshot: Vec<Listener> = {
            let map = self.listeners.read().unwrap();
            match map.get(event) {
                Some(list) => list.clone(),
                None => return,
            }
        };

        debug!(
            "Dispatching event '{}' to {} listener(s)",
            event,
            snapshot.len()
        );

        for listener in snapshot {
            listener(payload);
        }
    }

    /// Number of listeners currently registered for an event
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .read()
            .unwrap()
            .get(event)
            .map(|l| l.len())
            .unwrap_or(0)
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}
