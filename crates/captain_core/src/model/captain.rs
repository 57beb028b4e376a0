//! Team captain: the one instance shared by the whole process.
//!
//! # Responsibility
//! - Elect the captain lazily on first request.
//! - Hand every later caller the same captain.
//!
//! # Invariants
//! - `Captain` has no public constructor and is neither `Clone` nor `Default`.
//! - Equality is identity: two `&Captain` are equal only if they point at
//!   the same object.
//!
//! Outside this module a captain cannot be built by hand:
//!
//! ```compile_fail
//! let captain = captain_core::Captain { id: uuid::Uuid::nil() };
//! ```
//!
//! nor duplicated:
//!
//! ```compile_fail
//! let copy: captain_core::Captain = captain_core::Captain::get().clone();
//! ```

use crate::singleton::{Acquisition, HolderState, Singleton};
use log::{debug, info};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static CAPTAIN: Singleton<Captain> = Singleton::new();

/// Human-readable line shown when the captain is elected.
pub const ELECTED_MESSAGE: &str = "New captain is elected for your team.";
/// Human-readable line shown when the existing captain is handed out.
pub const REUSED_MESSAGE: &str = "You already have a captain for your team. Send them for the toss.";

/// The elected team captain.
#[derive(Debug)]
pub struct Captain {
    id: Uuid,
}

impl Captain {
    fn elect() -> Self {
        Self { id: Uuid::new_v4() }
    }

    /// Returns the team captain, electing one on first call.
    pub fn get() -> &'static Captain {
        Self::acquire().0
    }

    /// Returns the team captain together with whether this call elected it.
    pub fn acquire() -> (&'static Captain, Acquisition) {
        let (captain, outcome) = CAPTAIN.acquire(Self::elect);
        match outcome {
            Acquisition::Created => info!(
                "event=captain_elected module=captain status=ok id={}",
                captain.id
            ),
            Acquisition::Reused => debug!(
                "event=captain_reused module=captain status=ok id={}",
                captain.id
            ),
        }
        (captain, outcome)
    }

    /// Returns whether a captain has been elected yet. Never elects one.
    pub fn is_elected() -> bool {
        CAPTAIN.state() == HolderState::Initialized
    }

    /// Election id, stable for the lifetime of the process.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns whether `other` is this very captain (pointer identity).
    pub fn is_same(&self, other: &Captain) -> bool {
        std::ptr::eq(self, other)
    }
}

impl PartialEq for Captain {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Captain {}

impl Display for Captain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "captain#{}", self.id)
    }
}

/// Returns the status line for one acquisition outcome.
pub fn status_message(outcome: Acquisition) -> &'static str {
    match outcome {
        Acquisition::Created => ELECTED_MESSAGE,
        Acquisition::Reused => REUSED_MESSAGE,
    }
}

/// Free-function form of [`Captain::get`].
pub fn get_captain() -> &'static Captain {
    Captain::get()
}

#[cfg(test)]
mod tests {
    use super::{get_captain, status_message, Captain, ELECTED_MESSAGE, REUSED_MESSAGE};
    use crate::singleton::Acquisition;

    #[test]
    fn repeated_calls_return_same_captain() {
        let first = Captain::get();
        let second = get_captain();

        assert!(Captain::is_elected());
        assert!(first.is_same(second));
        assert_eq!(first, second);
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn acquire_after_election_reports_reuse() {
        let elected = Captain::get();
        let (captain, outcome) = Captain::acquire();

        assert_eq!(outcome, Acquisition::Reused);
        assert!(std::ptr::eq(elected, captain));
    }

    #[test]
    fn display_includes_election_id() {
        let captain = Captain::get();
        assert_eq!(captain.to_string(), format!("captain#{}", captain.id()));
        assert!(!captain.id().is_nil());
    }

    #[test]
    fn status_message_matches_outcome() {
        assert_eq!(status_message(Acquisition::Created), ELECTED_MESSAGE);
        assert_eq!(status_message(Acquisition::Reused), REUSED_MESSAGE);
    }
}
