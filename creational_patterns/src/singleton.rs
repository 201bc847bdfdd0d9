//! Single-instance ownership in place of a global singleton.
//!
//! The classic rendition hides one mutable instance behind a static
//! accessor that everyone calls. Here the one [`GameMaster`] is
//! constructed by whoever owns the session and lent to collaborators by
//! reference; ownership enforces the single instance, and the instance id
//! makes "we all talked to the same master" checkable without any global.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a game master instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MasterId(pub Uuid);

impl MasterId {
    /// Create a new random master ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MasterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MasterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The one game master of a session.
///
/// Constructed exactly once per session; everything that needs it gets a
/// reference. There is no static accessor, so a second session simply
/// owns a second master with a distinct [`MasterId`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMaster {
    id: MasterId,
    session_name: String,
    turn: u64,
}

impl GameMaster {
    /// Open a session.
    pub fn new(session_name: impl Into<String>) -> Self {
        Self {
            id: MasterId::new(),
            session_name: session_name.into(),
            turn: 0,
        }
    }

    /// Identity of this master instance.
    pub fn id(&self) -> MasterId {
        self.id
    }

    /// Name of the session this master runs.
    pub fn session_name(&self) -> &str {
        &self.session_name
    }

    /// Turns played so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Advance the session by one turn and return the new turn number.
    pub fn advance_turn(&mut self) -> u64 {
        self.turn += 1;
        self.turn
    }
}

/// A collaborator that remembers which master introduced it to the game.
///
/// The master is injected at join time, never looked up; that is the
/// whole point of the redesign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adventurer {
    name: String,
    master: MasterId,
}

impl Adventurer {
    /// Join the session run by `master`.
    pub fn join(name: impl Into<String>, master: &GameMaster) -> Self {
        Self {
            name: name.into(),
            master: master.id(),
        }
    }

    /// The adventurer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Which master this adventurer answers to.
    pub fn master_id(&self) -> MasterId {
        self.master
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_borrowers_see_the_same_instance() {
        let master = GameMaster::new("Midgard Run");

        let knight = Adventurer::join("Knight", &master);
        let wizard = Adventurer::join("Wizard", &master);

        assert_eq!(knight.name(), "Knight");
        assert_eq!(knight.master_id(), wizard.master_id());
        assert_eq!(knight.master_id(), master.id());
    }

    #[test]
    fn test_separate_sessions_own_separate_masters() {
        let first = GameMaster::new("Run A");
        let second = GameMaster::new("Run B");

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_turns_advance_through_the_single_instance() {
        let mut master = GameMaster::new("Midgard Run");

        assert_eq!(master.session_name(), "Midgard Run");
        assert_eq!(master.turn(), 0);
        assert_eq!(master.advance_turn(), 1);
        assert_eq!(master.advance_turn(), 2);
    }
}
