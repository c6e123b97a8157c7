//! Fire-and-forget writes for the interactive UI.
//!
//! [`SaveQueue`] implements [`KeyValueStorage`] by forwarding every write to
//! an unbounded channel; a background task drains the channel and applies
//! the writes to the real backend off the event loop. Reads go straight to
//! the backend. When several writes for the same key are waiting, only the
//! newest one is written.

use crate::traits::KeyValueStorage;
use kanban_core::{KanbanError, KanbanResult};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug)]
enum PendingWrite {
    Set { key: String, value: String },
    Remove { key: String },
}

impl PendingWrite {
    fn key(&self) -> &str {
        match self {
            PendingWrite::Set { key, .. } | PendingWrite::Remove { key } => key,
        }
    }
}

pub struct SaveQueue {
    inner: Arc<dyn KeyValueStorage>,
    tx: Mutex<Option<mpsc::UnboundedSender<PendingWrite>>>,
}

/// Handle to the background task spawned by [`SaveQueue::spawn`].
pub struct SaveWorker {
    handle: JoinHandle<()>,
}

impl SaveQueue {
    /// Start the save worker on the current tokio runtime.
    pub fn spawn(inner: Arc<dyn KeyValueStorage>) -> (Arc<Self>, SaveWorker) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_worker(inner.clone(), rx));
        let queue = Arc::new(Self {
            inner,
            tx: Mutex::new(Some(tx)),
        });
        (queue, SaveWorker { handle })
    }

    /// Stop accepting writes. The worker finishes what is already queued
    /// and exits.
    pub fn close(&self) {
        if self.tx.lock().take().is_some() {
            tracing::debug!("Save queue closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.tx.lock().is_some()
    }

    fn enqueue(&self, write: PendingWrite) -> KanbanResult<()> {
        let guard = self.tx.lock();
        let tx = guard
            .as_ref()
            .ok_or_else(|| KanbanError::Storage("save queue is closed".to_string()))?;
        tx.send(write)
            .map_err(|_| KanbanError::Storage("save worker has stopped".to_string()))?;
        tracing::debug!("Write queued for background save");
        Ok(())
    }
}

impl KeyValueStorage for SaveQueue {
    fn get_item(&self, key: &str) -> KanbanResult<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> KanbanResult<()> {
        self.enqueue(PendingWrite::Set {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    fn remove_item(&self, key: &str) -> KanbanResult<()> {
        self.enqueue(PendingWrite::Remove {
            key: key.to_string(),
        })
    }
}

impl SaveWorker {
    /// Wait for the worker to drain the queue. Call after [`SaveQueue::close`].
    pub async fn finish(self) {
        if let Err(e) = self.handle.await {
            tracing::error!("Save worker panicked: {}", e);
        }
    }
}

async fn run_worker(inner: Arc<dyn KeyValueStorage>, mut rx: mpsc::UnboundedReceiver<PendingWrite>) {
    while let Some(first) = rx.recv().await {
        let mut latest: HashMap<String, PendingWrite> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        let mut push = |write: PendingWrite| {
            let key = write.key().to_string();
            if !latest.contains_key(&key) {
                order.push(key.clone());
            }
            latest.insert(key, write);
        };

        push(first);
        while let Ok(next) = rx.try_recv() {
            push(next);
        }

        for key in order {
            let Some(write) = latest.remove(&key) else {
                continue;
            };
            let storage = inner.clone();
            let result = tokio::task::spawn_blocking(move || match write {
                PendingWrite::Set { key, value } => storage.set_item(&key, &value),
                PendingWrite::Remove { key } => storage.remove_item(&key),
            })
            .await;

            match result {
                Ok(Ok(())) => tracing::debug!("Background save of '{}' complete", key),
                Ok(Err(e)) => tracing::error!("Background save of '{}' failed: {}", key, e),
                Err(e) => tracing::error!("Background save of '{}' aborted: {}", key, e),
            }
        }
    }
    tracing::debug!("Save worker exiting");
}
