//! Proxy pattern: a stand-in that defers building the real dungeon until
//! the first visitor arrives.

use serde::{Deserialize, Serialize};

/// A fully built dungeon instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    name: String,
}

impl Dungeon {
    /// Build the dungeon now. Expensive in spirit, immediate in effect.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Tour the dungeon.
    pub fn show(&self) -> String {
        format!("Dungeon {}", self.name)
    }
}

/// Virtual proxy holding a dungeon's name until someone actually enters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonProxy {
    name: String,
    built: Option<Dungeon>,
}

impl DungeonProxy {
    /// A proxy for a dungeon that does not exist yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            built: None,
        }
    }

    /// Whether the real dungeon has been built.
    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    /// Tour the dungeon.
    ///
    /// The first visit triggers the deferred build and says so; every
    /// later visit passes straight through to the built dungeon.
    pub fn show(&mut self) -> String {
        match &self.built {
            Some(dungeon) => dungeon.show(),
            None => {
                let dungeon = Dungeon::new(self.name.clone());
                let tour = format!("Building {}", dungeon.show());
                self.built = Some(dungeon);
                tour
            }
        }
    }
}
