//! Facade pattern: one casting surface over subsystems the caller never
//! sees.
//!
//! Attunement, catalysts, and incantations each have their own little
//! API; the facade sequences them so a spell is always one call.

/// Tunes the caster to a school of magic.
#[derive(Debug, Clone, Copy, Default)]
struct Attunement;

impl Attunement {
    fn focus(&self, school: &str) -> String {
        format!("focus {} attunement", school)
    }
}

/// Burns reagents.
#[derive(Debug, Clone, Copy, Default)]
struct Catalyst;

impl Catalyst {
    fn consume(&self, reagent: &str) -> String {
        format!("consume {}", reagent)
    }
}

/// Speaks the words.
#[derive(Debug, Clone, Copy, Default)]
struct Incantation;

impl Incantation {
    fn recite(&self, words: &str) -> String {
        words.to_string()
    }
}

/// The one surface callers see. Subsystems stay private to this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpellFacade {
    attunement: Attunement,
    catalyst: Catalyst,
    incantation: Incantation,
}

impl SpellFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorcery: a volley of soul arrows.
    pub fn soul_arrow(&self) -> String {
        [
            self.attunement.focus("sorcery"),
            self.catalyst.consume("a soul shard"),
            self.incantation.recite("Soul arrows streak out"),
        ]
        .join(", ")
    }

    /// Pyromancy: a slow bloom of flame.
    pub fn fireball(&self) -> String {
        [
            self.attunement.focus("pyromancy"),
            self.catalyst.consume("a fire seed"),
            self.incantation.recite("a bloom of fire damage erupts"),
        ]
        .join(", ")
    }

    /// Miracle: mend what is broken.
    pub fn heal(&self) -> String {
        [
            self.attunement.focus("faith"),
            self.catalyst.consume("a holy talisman"),
            self.incantation.recite("cast a miracle of mending"),
        ]
        .join(", ")
    }
}
