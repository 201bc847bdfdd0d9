//! # Structural Patterns
//!
//! The Armory: three small studies in wrapping game objects without
//! changing them.
//!
//! - **Adapter** (`adapter`): raw monsters with incompatible native
//!   vocabularies adapted to one [`Combatant`] interface, then promoted
//!   by rank wrappers.
//! - **Proxy** (`proxy`): a [`DungeonProxy`] that defers building the
//!   real dungeon until the first visitor shows up.
//! - **Facade** (`facade`): a [`SpellFacade`] fronting casting subsystems
//!   the caller never sees.
//!
//! Modules are deliberately independent of one another; each carries its
//! own small cast of types.

pub mod adapter;
pub mod facade;
pub mod proxy;

pub use adapter::*;
pub use facade::*;
pub use proxy::*;
