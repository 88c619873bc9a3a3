//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token passed through command handlers.
//! - Define the `Cancelled` error used to signal Ctrl+C through `anyhow::Result`.
//! - Provide `cancellable!` for racing a client call against the token.
//!
//! Does NOT handle:
//! - Installing signal handlers (done in `main()`).
//!
//! Invariants:
//! - Once cancelled, token remains cancelled forever.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    /// True if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// Creates the `notified()` future before checking the flag so a cancel
    /// landing in between is not missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<Cancelled>())
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

/// Await `$fut`, or bail out of the enclosing function with [`Cancelled`]
/// once `$cancel` fires.
///
/// Evaluates to the future's output, so `cancellable!(client.list_dashboards(), cancel)?`
/// reads like a plain `.await?`.
macro_rules! cancellable {
    ($fut:expr, $cancel:expr) => {
        tokio::select! {
            res = $fut => res,
            _ = $cancel.cancelled() => {
                return Err($crate::cancellation::Cancelled.into());
            }
        }
    };
}
