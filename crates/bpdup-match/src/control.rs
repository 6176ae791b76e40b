//! Cooperative cancellation and progress reporting for matching runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag a caller sets to stop a run between batches.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Progress of a pair enumeration, reported after every batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Outer-loop rows fully evaluated.
    pub rows_done: usize,
    pub rows_total: usize,
    /// Candidate pairs found so far.
    pub pairs_found: usize,
}

/// Progress callback. Called on the thread driving the enumeration.
pub type ProgressFn = dyn Fn(Progress) + Send + Sync;

/// Optional hooks observed by a [`PairStream`](crate::PairStream).
#[derive(Clone, Copy, Default)]
pub struct RunControl<'a> {
    pub cancel: Option<&'a CancellationToken>,
    pub progress: Option<&'a (dyn Fn(Progress) + Send + Sync + 'a)>,
}

impl<'a> RunControl<'a> {
    #[must_use]
    pub fn with_cancellation(mut self, token: &'a CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a (dyn Fn(Progress) + Send + Sync + 'a)) -> Self {
        self.progress = Some(progress);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(CancellationToken::is_cancelled)
    }

    pub(crate) fn report(&self, progress: Progress) {
        if let Some(callback) = self.progress {
            callback(progress);
        }
    }
}
