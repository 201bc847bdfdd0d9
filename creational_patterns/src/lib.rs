//! # Creational Patterns
//!
//! The Spawning Grounds: five small studies in how game objects come to
//! exist.
//!
//! - **Single-instance ownership** (`singleton`): one [`GameMaster`] per
//!   session, owned by the composition root and lent by reference, in
//!   place of a process-wide global.
//! - **Factory** (`factory`): an [`EntityFactory`] stamping heroes,
//!   monsters, and bosses from a closed kind set.
//! - **Builder** (`builder`): a [`MonsterWorkshop`] directing swappable
//!   blueprints through the part-by-part assembly of a monster.
//! - **Prototype** (`prototype`): a [`PrototypeRegistry`] cloning fully
//!   configured master mobs on demand.
//! - **Abstract factory** (`abstract_factory`): element-themed factories
//!   stamping whole families of related monsters.
//!
//! Modules are deliberately independent of one another; each carries its
//! own small cast of types.

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod prototype;
pub mod singleton;

pub use abstract_factory::*;
pub use builder::*;
pub use factory::*;
pub use prototype::*;
pub use singleton::*;
