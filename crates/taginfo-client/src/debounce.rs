//! Leading-edge debouncer shared by every debounced request, whatever its URL.
//!
//! The gate is either idle or cooling down:
//!
//! - **idle**: the call runs immediately and starts a cool-down of one
//!   window.
//! - **cooling**: the call takes the single pending slot and pushes the
//!   deadline out by one window. Whoever held the slot before is dropped and
//!   resolves to [`Error::Superseded`].
//! - **deadline reached**: the pending call (the trailing call of the burst),
//!   if any, runs and the gate goes idle again.
//!
//! Dropped calls are permanent; nothing is queued or retried.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde_json::Value;
use taginfo_core::{Error, Result, TransportError};
use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::Transport;

/// Default quiet window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

struct Pending {
    url: String,
    reply: oneshot::Sender<Result<Value, TransportError>>,
}

#[derive(Default)]
struct Gate {
    /// `Some` while cooling down.
    deadline: Option<Instant>,
    pending: Option<Pending>,
}

pub struct Debouncer {
    window: Duration,
    gate: Arc<Mutex<Gate>>,
    transport: Arc<dyn Transport>,
}

impl Debouncer {
    pub fn new(window: Duration, transport: Arc<dyn Transport>) -> Self {
        Self {
            window,
            gate: Arc::new(Mutex::new(Gate::default())),
            transport,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// True while a burst is in progress.
    pub fn is_cooling(&self) -> bool {
        lock(&self.gate).deadline.is_some()
    }

    /// Fetch `url` through the gate.
    ///
    /// Resolves with the body for the leading and trailing calls of a burst
    /// and with [`Error::Superseded`] for every call in between.
    pub async fn call(&self, url: &str) -> Result<Value> {
        let waiting = {
            let mut gate = lock(&self.gate);
            let cooling = gate.deadline.is_some();
            gate.deadline = Some(Instant::now() + self.window);

            if cooling {
                let (reply, rx) = oneshot::channel();
                let replaced = gate.pending.replace(Pending {
                    url: url.to_string(),
                    reply,
                });
                if let Some(dropped) = replaced {
                    tracing::debug!(url = %dropped.url, "debounce: dropped");
                }
                Some(rx)
            } else {
                None
            }
        };

        let Some(rx) = waiting else {
            tokio::spawn(cool_down(self.gate.clone(), self.transport.clone()));
            tracing::debug!(url, "debounce: leading call");
            return self.transport.fetch_json(url).await.map_err(Error::from);
        };

        tracing::debug!(url, "debounce: pending");
        match rx.await {
            Ok(result) => result.map_err(Error::from),
            Err(_) => Err(Error::Superseded {
                url: url.to_string(),
            }),
        }
    }
}

/// Sleep until the (possibly extended) deadline, then run the trailing call.
async fn cool_down(gate: Arc<Mutex<Gate>>, transport: Arc<dyn Transport>) {
    loop {
        let Some(deadline) = lock(&gate).deadline else {
            return;
        };
        tokio::time::sleep_until(deadline).await;

        let pending = {
            let mut state = lock(&gate);
            match state.deadline {
                Some(d) if d > Instant::now() => continue,
                _ => {}
            }
            state.deadline = None;
            state.pending.take()
        };

        if let Some(pending) = pending {
            tracing::debug!(url = %pending.url, "debounce: trailing call");
            let result = transport.fetch_json(&pending.url).await;
            // The caller may have given up; nothing to do then.
            let _ = pending.reply.send(result);
        }
        return;
    }
}

fn lock(gate: &Mutex<Gate>) -> MutexGuard<'_, Gate> {
    gate.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
