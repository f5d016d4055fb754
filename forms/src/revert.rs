//! Pending revert handles keyed per form instance.
//!
//! A handle is whatever keeps the deferred revert alive; in the browser it is a
//! `gloo_timers` `Timeout`, which cancels itself when dropped. Scheduling a
//! second revert for the same form drops the first handle, so only the latest
//! success ever reverts. The submit label captured by the first success is kept
//! because by the second one the control already shows the acknowledgment.

#[cfg(test)]
#[path = "revert_test.rs"]
mod revert_test;

use std::collections::HashMap;
use std::hash::Hash;

struct Pending<H> {
    original_label: Option<String>,
    _handle: H,
}

pub struct PendingReverts<K, H> {
    slots: HashMap<K, Pending<H>>,
}

impl<K, H> Default for PendingReverts<K, H> {
    fn default() -> Self {
        Self { slots: HashMap::new() }
    }
}

impl<K: Eq + Hash, H> PendingReverts<K, H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` as the pending revert for `key`, cancelling any earlier one.
    ///
    /// Returns the label the revert should restore.
    pub fn schedule(&mut self, key: K, original_label: Option<String>, handle: H) -> Option<String> {
        let original_label = match self.slots.remove(&key) {
            Some(previous) => previous.original_label,
            None => original_label,
        };
        let label = original_label.clone();
        self.slots.insert(key, Pending { original_label, _handle: handle });
        label
    }

    /// Remove the pending revert for `key` once it has fired and return the
    /// label it should restore.
    pub fn fire(&mut self, key: &K) -> Option<String> {
        self.slots.remove(key).and_then(|pending| pending.original_label)
    }

    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
