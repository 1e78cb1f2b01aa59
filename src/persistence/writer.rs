//! Single-writer persistence queue.
//!
//! Every store mutation submits a full serialized snapshot. One background
//! thread owns all writes: before each write it drains the channel and keeps
//! only the newest snapshot, so at most one write is in flight and the last
//! submitted snapshot is the last one written.

use crate::persistence::adapter::KeyValueStore;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

enum Command {
    Persist(String),
    Flush(Sender<()>),
}

#[derive(Debug, Default)]
struct Counters {
    written: AtomicU64,
    failed: AtomicU64,
    coalesced: AtomicU64,
}

/// Point-in-time copy of writer counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterStats {
    /// Snapshots successfully written
    pub written: u64,
    /// Write attempts that failed (not retried)
    pub failed: u64,
    /// Snapshots superseded before they were written
    pub coalesced: u64,
}

pub struct PersistWriter {
    tx: Option<Sender<Command>>,
    handle: Option<JoinHandle<()>>,
    counters: Arc<Counters>,
}

impl PersistWriter {
    /// Start the writer thread for `key` on `adapter`
    pub fn spawn(adapter: Arc<dyn KeyValueStore>, key: &str) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let counters = Arc::new(Counters::default());
        let key = key.to_string();

        let handle = thread::Builder::new()
            .name("todolists-writer".to_owned())
            .spawn({
                let counters = counters.clone();
                move || run_worker(rx, adapter.as_ref(), &key, &counters)
            })?;

        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
            counters,
        })
    }

    /// Queue a snapshot; never waits for I/O
    pub fn submit(&self, snapshot: String) {
        if let Some(tx) = &self.tx {
            if tx.send(Command::Persist(snapshot)).is_err() {
                tracing::error!("persistence writer is gone; snapshot dropped");
            }
        }
    }

    /// Block until every snapshot submitted before this call has been written or has failed
    pub fn flush(&self) {
        let Some(tx) = &self.tx else {
            return;
        };
        let (ack_tx, ack_rx) = mpsc::channel();
        if tx.send(Command::Flush(ack_tx)).is_ok() {
            // An Err here means the worker exited, which also means nothing is pending
            let _ = ack_rx.recv();
        }
    }

    pub fn stats(&self) -> WriterStats {
        WriterStats {
            written: self.counters.written.load(Ordering::SeqCst),
            failed: self.counters.failed.load(Ordering::SeqCst),
            coalesced: self.counters.coalesced.load(Ordering::SeqCst),
        }
    }
}

impl Drop for PersistWriter {
    fn drop(&mut self) {
        // Closing the channel lets the worker finish what is queued and exit
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("persistence writer thread panicked");
            }
        }
    }
}

fn run_worker(rx: Receiver<Command>, adapter: &dyn KeyValueStore, key: &str, counters: &Counters) {
    let mut acks: Vec<Sender<()>> = Vec::new();

    while let Ok(first) = rx.recv() {
        let mut latest: Option<String> = None;

        let mut take = |cmd: Command, latest: &mut Option<String>| match cmd {
            Command::Persist(snapshot) => {
                if latest.replace(snapshot).is_some() {
                    counters.coalesced.fetch_add(1, Ordering::SeqCst);
                }
            }
            Command::Flush(ack) => acks.push(ack),
        };

        take(first, &mut latest);
        while let Ok(next) = rx.try_recv() {
            take(next, &mut latest);
        }

        if let Some(snapshot) = latest {
            match adapter.set(key, &snapshot) {
                Ok(()) => {
                    counters.written.fetch_add(1, Ordering::SeqCst);
                    tracing::debug!(key, bytes = snapshot.len(), "snapshot written");
                }
                Err(e) => {
                    counters.failed.fetch_add(1, Ordering::SeqCst);
                    tracing::error!(key, error = %e, "failed to persist snapshot");
                }
            }
        }

        for ack in acks.drain(..) {
            let _ = ack.send(());
        }
    }
}
