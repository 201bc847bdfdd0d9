//! Builder pattern: a workshop assembling monsters part by part.
//!
//! The workshop owns the assembly sequence; blueprints only know how to
//! shape each part. Swapping the blueprint mid-session changes what the
//! next build produces, never how building works.

use serde::{Deserialize, Serialize};

/// A monster assembled from blueprint parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    head: String,
    body: String,
}

impl Monster {
    /// Full description, parts in assembly order.
    pub fn describe(&self) -> String {
        format!("{} set on {}", self.head, self.body)
    }
}

/// Per-species part steps the workshop sequences.
pub trait MonsterBlueprint {
    fn build_head(&self) -> String;
    fn build_body(&self) -> String;
}

/// Shambling dead flesh.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZombieBlueprint;

impl MonsterBlueprint for ZombieBlueprint {
    fn build_head(&self) -> String {
        "a lolling head".to_string()
    }

    fn build_body(&self) -> String {
        "a dirty and rotten body".to_string()
    }
}

/// Bleached bones held together by spite.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkeletonBlueprint;

impl MonsterBlueprint for SkeletonBlueprint {
    fn build_head(&self) -> String {
        "a grinning skull".to_string()
    }

    fn build_body(&self) -> String {
        "a rack of bleached bones".to_string()
    }
}

/// Director: builds monsters from whichever blueprint it currently holds.
pub struct MonsterWorkshop {
    blueprint: Box<dyn MonsterBlueprint>,
}

impl MonsterWorkshop {
    /// Open a workshop around an initial blueprint.
    pub fn new(blueprint: Box<dyn MonsterBlueprint>) -> Self {
        Self { blueprint }
    }

    /// Swap the blueprint; later builds use the new one.
    pub fn set_blueprint(&mut self, blueprint: Box<dyn MonsterBlueprint>) {
        self.blueprint = blueprint;
    }

    /// Run the part steps in order and assemble the result.
    pub fn build_monster(&self) -> Monster {
        Monster {
            head: self.blueprint.build_head(),
            body: self.blueprint.build_body(),
        }
    }
}
