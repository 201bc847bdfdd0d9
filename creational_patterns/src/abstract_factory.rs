//! Abstract factory: element-themed families of related monsters.
//!
//! One factory per element; products stamped by the same factory always
//! share that element, so a caller holding any [`MonsterFamilyFactory`]
//! gets a consistent family without naming concrete types.

use serde::{Deserialize, Serialize};

/// A monster belonging to an element-themed family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMonster {
    family: String,
    name: String,
}

impl FamilyMonster {
    fn stamped(element: &str, family: &str) -> Self {
        Self {
            family: family.to_string(),
            name: format!("{} {}", element, family),
        }
    }

    /// Which product family this monster belongs to.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Full name, element included.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A factory stamping every product of one elemental family.
pub trait MonsterFamilyFactory {
    /// The element stamped onto every product of this factory.
    fn element(&self) -> &'static str;

    /// The family's elemental.
    fn elemental(&self) -> FamilyMonster {
        FamilyMonster::stamped(self.element(), "elemental")
    }

    /// The family's poring.
    fn poring(&self) -> FamilyMonster {
        FamilyMonster::stamped(self.element(), "poring")
    }
}

/// Stamps the ice family.
#[derive(Debug, Clone, Copy, Default)]
pub struct IceMonsterFactory;

impl MonsterFamilyFactory for IceMonsterFactory {
    fn element(&self) -> &'static str {
        "Ice"
    }
}

/// Stamps the fire family.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireMonsterFactory;

impl MonsterFamilyFactory for FireMonsterFactory {
    fn element(&self) -> &'static str {
        "Fire"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ice_factory_stamps_the_ice_family() {
        let factory = IceMonsterFactory;

        let elemental = factory.elemental();
        assert_eq!(elemental.family(), "elemental");
        assert_eq!(elemental.name(), "Ice elemental");

        let poring = factory.poring();
        assert_eq!(poring.family(), "poring");
        assert_eq!(poring.name(), "Ice poring");
    }

    #[test]
    fn test_fire_factory_stamps_the_fire_family() {
        let factory = FireMonsterFactory;

        assert_eq!(factory.elemental().name(), "Fire elemental");
        assert_eq!(factory.poring().name(), "Fire poring");
    }

    #[test]
    fn test_any_factory_yields_a_consistent_family() {
        let factories: Vec<Box<dyn MonsterFamilyFactory>> =
            vec![Box::new(IceMonsterFactory), Box::new(FireMonsterFactory)];

        for factory in &factories {
            let elemental = factory.elemental();
            let poring = factory.poring();

            // Both products carry the factory's element.
            assert!(elemental.name().starts_with(factory.element()));
            assert!(poring.name().starts_with(factory.element()));
        }
    }
}
