//! Change notifications for live task lists.
//!
//! [`TaskWatch`] is a broadcast hub the service publishes into after every
//! successful write. Dashboard streams hold a [`TaskSubscription`] scoped to
//! one owner; dropping the subscription releases it. Consumers re-read the
//! full list on every wakeup, so a lagged receiver just resnapshots.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

const DEFAULT_CAPACITY: usize = 16;

/// A change to some owner's task list.
#[derive(Clone, Debug)]
pub struct TaskChange {
    pub owner: String,
}

/// Broadcast hub for task-list changes.
#[derive(Clone)]
pub struct TaskWatch {
    tx: broadcast::Sender<TaskChange>,
}

impl TaskWatch {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a change to the given owner's list.
    ///
    /// A send with no live subscribers is not an error.
    pub fn notify(&self, owner: &str) {
        let _ = self.tx.send(TaskChange {
            owner: owner.to_string(),
        });
    }

    /// Subscribe to changes for one owner.
    pub fn subscribe(&self, owner: &str) -> TaskSubscription {
        TaskSubscription {
            owner: owner.to_string(),
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for TaskWatch {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// A scoped subscription to one owner's task-list changes.
///
/// Held by exactly one consumer; dropped on disconnect, which releases the
/// underlying receiver.
pub struct TaskSubscription {
    owner: String,
    rx: broadcast::Receiver<TaskChange>,
}

impl TaskSubscription {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Wait until this owner's list changes.
    ///
    /// Other owners' events are skipped. Returns `false` once the hub has
    /// been dropped and no further changes can arrive.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.rx.recv().await {
                Ok(change) if change.owner == self.owner => return true,
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(owner = %self.owner, skipped, "Subscription lagged");
                    return true;
                }
                Err(RecvError::Closed) => return false,
            }
        }
    }
}
