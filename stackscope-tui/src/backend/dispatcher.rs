//! Async fetch dispatch
//!
//! The main loop is synchronous; every cloud call runs as a task on the
//! tokio runtime and its result travels back to the loop as an
//! [`AppMessage::Loaded`] over a plain mpsc channel. Each dispatch gets
//! a fresh monotonically increasing request ID so the update layer can
//! tell a current completion from a superseded one.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::message::{AppMessage, LoadPayload, RequestId};

pub struct Dispatcher {
    handle: Handle,
    tx: Sender<AppMessage>,
    next_request: AtomicU64,
}

impl Dispatcher {
    pub fn new(handle: Handle, tx: Sender<AppMessage>) -> Self {
        Self {
            handle,
            tx,
            next_request: AtomicU64::new(0),
        }
    }

    /// Spawns a fetch and returns the request ID its completion will carry.
    pub fn dispatch<F>(&self, fut: F) -> RequestId
    where
        F: Future<Output = LoadPayload> + Send + 'static,
    {
        let request = self.next_request.fetch_add(1, Ordering::Relaxed) + 1;
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let payload = fut.await;
            // A send error means the receiver is gone and we are shutting down.
            let _ = tx.send(AppMessage::Loaded { request, payload });
        });
        request
    }

    /// Like [`dispatch`](Self::dispatch) but sleeps first. Used for
    /// debounced live search: every keystroke dispatches a delayed fetch
    /// and only the newest request ID survives the staleness check.
    pub fn dispatch_after<F>(&self, delay: Duration, fut: F) -> RequestId
    where
        F: Future<Output = LoadPayload> + Send + 'static,
    {
        self.dispatch(async move {
            tokio::time::sleep(delay).await;
            fut.await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn dispatch_delivers_completion_with_its_request_id() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(runtime.handle().clone(), tx);

        let first = dispatcher.dispatch(async { LoadPayload::Shell(Ok("one".into())) });
        let second = dispatcher.dispatch(async { LoadPayload::Shell(Ok("two".into())) });
        assert!(second > first);

        let mut seen = Vec::new();
        for _ in 0..2 {
            match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
                AppMessage::Loaded { request, .. } => seen.push(request),
                _ => panic!("unexpected message"),
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![first, second]);
    }
}
