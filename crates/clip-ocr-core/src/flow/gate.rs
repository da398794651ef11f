use crate::{CoreError, CoreResult};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Exclusive access to the gated value for one invocation.
pub type InvocationPermit<T> = OwnedMutexGuard<T>;

/// Single-slot gate: at most one invocation holds the flow at a time.
///
/// Presses that arrive while the slot is taken are rejected, not queued.
#[derive(Debug)]
pub struct InvocationGate<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> InvocationGate<T> {
    /// Gate guarding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(value)),
        }
    }

    /// Take the slot, or fail with [`CoreError::InvocationInFlight`].
    #[track_caller]
    pub fn try_acquire(&self) -> CoreResult<InvocationPermit<T>> {
        Arc::clone(&self.inner)
            .try_lock_owned()
            .map_err(|_| CoreError::InvocationInFlight {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Whether an invocation currently holds the slot.
    pub fn is_busy(&self) -> bool {
        self.inner.try_lock().is_err()
    }
}

impl<T> Clone for InvocationGate<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
