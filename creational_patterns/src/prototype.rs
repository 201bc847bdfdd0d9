//! Prototype pattern: spawning by cloning fully configured masters.
//!
//! The registry owns one master per key; every spawn is a [`Clone`] of
//! the master, so spawns are independent of each other and of the master
//! they came from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A mob: either a registry-owned master or a spawned clone of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mob {
    pub name: String,
    pub level: u32,
    description: String,
}

impl Mob {
    pub fn new(name: impl Into<String>, level: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            description: description.into(),
        }
    }

    /// One-line description of the mob.
    pub fn describe(&self) -> String {
        format!("{} (level {}): {}", self.name, self.level, self.description)
    }
}

/// Registry of master mobs, keyed by species name.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrototypeRegistry {
    masters: HashMap<String, Mob>,
}

impl PrototypeRegistry {
    /// A registry seeded with the stock masters.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register("zombie", Mob::new("Zombie", 3, "dirty and rotten flesh"));
        registry.register("skeleton", Mob::new("Skeleton", 5, "a skull over marching bones"));
        registry
    }

    /// Register (or replace) a master under a key.
    pub fn register(&mut self, key: impl Into<String>, master: Mob) {
        self.masters.insert(key.into(), master);
    }

    /// Clone the master registered under `key`.
    pub fn spawn(&self, key: &str) -> Option<Mob> {
        self.masters.get(key).cloned()
    }

    /// Number of registered masters.
    pub fn master_count(&self) -> usize {
        self.masters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_masters_are_registered() {
        let registry = PrototypeRegistry::new();

        let zombie = registry.spawn("zombie").unwrap();
        let skeleton = registry.spawn("skeleton").unwrap();

        assert!(zombie.describe().contains("dirty and rotten"));
        assert!(skeleton.describe().contains("skull"));
    }

    #[test]
    fn test_unknown_key_spawns_nothing() {
        let registry = PrototypeRegistry::new();

        assert!(registry.spawn("dragon").is_none());
    }

    #[test]
    fn test_spawns_are_independent_of_the_master() {
        let registry = PrototypeRegistry::new();

        let mut spawn = registry.spawn("zombie").unwrap();
        spawn.level = 99;
        spawn.name = "Zombie Lord".to_string();

        // The master is untouched by what happens to its clones.
        let fresh = registry.spawn("zombie").unwrap();
        assert_eq!(fresh.level, 3);
        assert_eq!(fresh.name, "Zombie");
    }

    #[test]
    fn test_custom_masters_can_be_registered() {
        let mut registry = PrototypeRegistry::new();
        registry.register("poring", Mob::new("Poring", 1, "a bouncing pink blob"));

        let poring = registry.spawn("poring").unwrap();

        assert_eq!(poring.level, 1);
        assert_eq!(registry.master_count(), 3);
    }
}
