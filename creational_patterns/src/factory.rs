//! Factory pattern: one spawn point stamping every entity kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors from data-driven spawning.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    /// The requested kind names nothing the factory can stamp.
    #[error("unknown entity kind {0:?}")]
    UnknownKind(String),
}

/// Unique identifier for spawned entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of kinds the factory knows how to stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Hero,
    Monster,
    Boss,
}

impl EntityKind {
    fn blurb(&self) -> &'static str {
        match self {
            EntityKind::Hero => "Current character",
            EntityKind::Monster => "Regular enemy",
            EntityKind::Boss => "Epic enemy",
        }
    }
}

impl FromStr for EntityKind {
    type Err = SpawnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(EntityKind::Hero),
            "monster" => Ok(EntityKind::Monster),
            "boss" => Ok(EntityKind::Boss),
            other => Err(SpawnError::UnknownKind(other.to_string())),
        }
    }
}

/// A spawned game entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    description: String,
}

impl Entity {
    /// What this entity says about itself.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Stamps entities by kind; the caller never names a concrete constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityFactory;

impl EntityFactory {
    pub fn new() -> Self {
        Self
    }

    /// Spawn a fresh entity of the given kind.
    pub fn create_entity(&self, kind: EntityKind) -> Entity {
        Entity {
            id: EntityId::new(),
            kind,
            description: kind.blurb().to_string(),
        }
    }

    /// Spawn from a kind name, for data-driven callers.
    ///
    /// Unknown names fail with [`SpawnError::UnknownKind`]; nothing is
    /// spawned in that case.
    pub fn create_named(&self, kind: &str) -> Result<Entity, SpawnError> {
        Ok(self.create_entity(kind.parse()?))
    }
}
