//! Template pattern: map loading with a fixed assembly order.
//!
//! [`MapRecipe::load`] owns the sequence (terrain, then weather, then
//! inhabitants); biome recipes only fill in the parts.

/// A loaded map, assembled by a [`MapRecipe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMap {
    terrain: String,
    weather: String,
    inhabitants: String,
}

impl GameMap {
    /// One-line tour of the map, parts in load order.
    pub fn describe(&self) -> String {
        format!(
            "{}, battered by {}, crawling with {}",
            self.terrain, self.weather, self.inhabitants
        )
    }
}

/// Per-biome hooks plus the template method that sequences them.
pub trait MapRecipe {
    fn terrain(&self) -> String;
    fn weather(&self) -> String;
    fn inhabitants(&self) -> String;

    /// Template method. The hook order is fixed here and is not a
    /// per-biome decision; recipes implement the hooks only.
    fn load(&self) -> GameMap {
        GameMap {
            terrain: self.terrain(),
            weather: self.weather(),
            inhabitants: self.inhabitants(),
        }
    }
}

/// Frozen biome.
#[derive(Debug, Clone, Copy, Default)]
pub struct IceMapRecipe;

impl MapRecipe for IceMapRecipe {
    fn terrain(&self) -> String {
        "glacier fields".to_string()
    }

    fn weather(&self) -> String {
        "an endless ice storm".to_string()
    }

    fn inhabitants(&self) -> String {
        "ice poring swarms".to_string()
    }
}

/// Volcanic biome.
#[derive(Debug, Clone, Copy, Default)]
pub struct LavaMapRecipe;

impl MapRecipe for LavaMapRecipe {
    fn terrain(&self) -> String {
        "basalt flows".to_string()
    }

    fn weather(&self) -> String {
        "ashfall from a constant eruption".to_string()
    }

    fn inhabitants(&self) -> String {
        "lava poring swarms".to_string()
    }
}
