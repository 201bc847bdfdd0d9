//! # Behavioral Patterns
//!
//! The "Portal Network" crate - behavioral pattern studies for Grimoire,
//! each rendered as a small, self-contained game example:
//!
//! - **state**: a city portal that answers warp requests according to the
//!   city it currently points at
//! - **strategy**: monster move sets with swappable execution routines
//! - **template**: map loading with a fixed step order and per-biome hooks
//! - **mediator**: a two-headed dragon routing breath requests to whichever
//!   head owns the element
//! - **memento**: save points captured as opaque, restorable snapshots
//!
//! Modules do not depend on one another; each can be read on its own.

pub mod mediator;
pub mod memento;
pub mod state;
pub mod strategy;
pub mod template;

pub use mediator::*;
pub use memento::*;
pub use state::*;
pub use strategy::*;
pub use template::*;
