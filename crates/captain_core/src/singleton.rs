//! Lifecycle-scoped one-time initialization holder.
//!
//! # Responsibility
//! - Own zero or one value of `T` and publish it exactly once.
//! - Report to each caller whether it performed the construction.
//!
//! # Invariants
//! - The check-create-publish sequence is atomic with respect to all callers.
//! - `Initialized` is terminal; there is no reset.
//! - `Acquisition::Created` is reported to at most one caller per holder.
//! - A failed fallible construction publishes nothing and leaves the holder
//!   `Uninitialized`; the next caller retries.

use once_cell::sync::OnceCell;

/// Holder lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderState {
    /// No value has been published yet.
    Uninitialized,
    /// A value has been published and will be returned to every caller.
    Initialized,
}

/// Outcome of one acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquisition {
    /// This call ran the initializer and published the value.
    Created,
    /// The value already existed (or another caller published it first).
    Reused,
}

/// One-time initialized, process-shareable slot.
///
/// Backed by [`OnceCell`], so only the first access pays for
/// synchronization; later reads are a single atomic load.
#[derive(Debug)]
pub struct Singleton<T> {
    cell: OnceCell<T>,
}

impl<T> Singleton<T> {
    /// Creates an empty holder. Usable in `static` position.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the published value without initializing.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn state(&self) -> HolderState {
        if self.cell.get().is_some() {
            HolderState::Initialized
        } else {
            HolderState::Uninitialized
        }
    }

    /// Returns the shared value, constructing it with `init` on first access.
    ///
    /// Concurrent first callers block until the winner publishes; `init`
    /// runs at most once.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.acquire(init).0
    }

    /// Like [`Singleton::get_or_init`], also reporting whether this call
    /// constructed the value.
    pub fn acquire<F>(&self, init: F) -> (&T, Acquisition)
    where
        F: FnOnce() -> T,
    {
        let mut outcome = Acquisition::Reused;
        let value = self.cell.get_or_init(|| {
            outcome = Acquisition::Created;
            init()
        });
        (value, outcome)
    }

    /// Fallible variant of [`Singleton::acquire`].
    ///
    /// # Errors
    /// - Returns the initializer's error unchanged. Nothing is published and
    ///   a later call will run its own initializer.
    pub fn try_acquire<F, E>(&self, init: F) -> Result<(&T, Acquisition), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut outcome = Acquisition::Reused;
        let value = self.cell.get_or_try_init(|| {
            let value = init()?;
            outcome = Acquisition::Created;
            Ok(value)
        })?;
        Ok((value, outcome))
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}
