//! Memento pattern: save points that capture run progress as opaque
//! snapshots and rewind to them later.
//!
//! Snapshots are plain in-memory values. The payload is serialized JSON,
//! but holders can neither inspect nor edit it; only a [`SavePoint`] can
//! turn a snapshot back into progress.

use serde::{Deserialize, Serialize};

/// Errors from capturing or restoring snapshots.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot payload could not be encoded or decoded.
    #[error("snapshot payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// An opaque capture of a save point's progress.
#[derive(Debug, Clone)]
pub struct Snapshot {
    payload: String,
}

/// Originator: a run's mutable progress through the dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePoint {
    floor: u32,
    gold: u64,
}

impl SavePoint {
    /// A fresh run: first floor, empty purse.
    pub fn new() -> Self {
        Self { floor: 1, gold: 0 }
    }

    /// Current dungeon floor.
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Gold carried so far.
    pub fn gold(&self) -> u64 {
        self.gold
    }

    /// Descend one floor.
    pub fn descend(&mut self) {
        self.floor += 1;
    }

    /// Pick up gold.
    pub fn collect_gold(&mut self, amount: u64) {
        self.gold += amount;
    }

    /// Capture the current progress.
    pub fn save(&self) -> Result<Snapshot, SnapshotError> {
        Ok(Snapshot {
            payload: serde_json::to_string(self)?,
        })
    }

    /// Rewind to previously captured progress.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        *self = serde_json::from_str(&snapshot.payload)?;
        Ok(())
    }
}

impl Default for SavePoint {
    fn default() -> Self {
        Self::new()
    }
}
