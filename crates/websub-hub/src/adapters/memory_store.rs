//! In-memory subscriber store.
//!
//! Lives for the life of the process. Reads clone the record out so the
//! lock is never held across an outbound request.

use parking_lot::Mutex;

use crate::domain::CommittedSubscriber;
use crate::ports::SubscriberStore;

/// Single-slot store guarded by a mutex
#[derive(Debug, Default)]
pub struct InMemorySubscriberStore {
    slot: Mutex<Option<CommittedSubscriber>>,
}

impl InMemorySubscriberStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubscriberStore for InMemorySubscriberStore {
    fn get(&self) -> Option<CommittedSubscriber> {
        self.slot.lock().clone()
    }

    fn set(&self, subscriber: CommittedSubscriber) {
        *self.slot.lock() = Some(subscriber);
    }
}
