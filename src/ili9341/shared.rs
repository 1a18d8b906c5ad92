//! Display handle shared between threads

use std::sync::{Arc, Mutex, PoisonError};

/// A driver behind a mutex.
///
/// Every [`SharedDisplay::with`] call holds the lock for the whole closure,
/// so drawing, rotation and the scratch buffer are never used by two
/// threads at once.
pub struct SharedDisplay<D> {
    inner: Arc<Mutex<D>>,
}

impl<D> SharedDisplay<D> {
    /// Wrap `display`
    pub fn new(display: D) -> Self {
        SharedDisplay {
            inner: Arc::new(Mutex::new(display)),
        }
    }

    /// Run `f` with exclusive access to the display.
    ///
    /// A panic in another holder does not lock the display out: the panel
    /// state is only ever a half drawn frame, which the next redraw replaces.
    pub fn with<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        let mut display = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut display)
    }
}

impl<D> Clone for SharedDisplay<D> {
    fn clone(&self) -> Self {
        SharedDisplay {
            inner: Arc::clone(&self.inner),
        }
    }
}
