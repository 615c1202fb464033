//! Operation-scoped cancellation and deadline token.
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Instant,
};

use crate::body::error::BodyError;

/// Cancellation and deadline token threaded through blocking operations.
///
/// Cloning shares the underlying token: a [`cancel`][Context::cancel] on any
/// clone is observed by all of them. [`with_deadline`][Context::with_deadline]
/// derives a child context that is also cancelled once any ancestor is.
#[derive(Clone)]
pub struct Context {
    shared: Arc<Shared>,
}

struct Shared {
    cancelled: AtomicBool,
    deadline: Option<Instant>,
    parent: Option<Context>,
}

impl Context {
    /// Create a root context with no deadline.
    pub fn new() -> Context {
        Self {
            shared: Arc::new(Shared {
                cancelled: AtomicBool::new(false),
                deadline: None,
                parent: None,
            }),
        }
    }

    /// Derive a child context cancelled once `deadline` has passed.
    pub fn with_deadline(&self, deadline: Instant) -> Context {
        Self {
            shared: Arc::new(Shared {
                cancelled: AtomicBool::new(false),
                deadline: Some(deadline),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Cancel this context and all contexts derived from it.
    pub fn cancel(&self) {
        self.shared.cancelled.store(true, Ordering::Release);
    }

    /// Returns this context's own deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.shared.deadline
    }

    /// Returns `true` once cancelled, past its deadline, or any ancestor is.
    pub fn is_cancelled(&self) -> bool {
        let mut current = self;
        loop {
            if current.shared.cancelled.load(Ordering::Acquire) {
                return true;
            }
            if matches!(current.shared.deadline, Some(deadline) if Instant::now() >= deadline) {
                return true;
            }
            match &current.shared.parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Errors with [`BodyError::Cancelled`] once [`is_cancelled`][Context::is_cancelled].
    pub fn ensure_not_cancelled(&self) -> Result<(), BodyError> {
        if self.is_cancelled() {
            Err(BodyError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("cancelled", &self.is_cancelled())
            .field("deadline", &self.shared.deadline)
            .finish()
    }
}
