//! Strategy pattern: a monster move set whose execution routine is
//! chosen at construction and swappable without touching the set itself.
//!
//! Routines are plain function pointers over the move-set name, so
//! renaming a set is visible through every later execution.

/// An execution routine: formats a combat report around a move-set name.
pub type AttackRoutine = fn(&str) -> String;

/// Stock routine A.
pub fn execution_a(name: &str) -> String {
    format!("{} from execution A", name)
}

/// Stock routine B.
pub fn execution_b(name: &str) -> String {
    format!("{} from execution B", name)
}

/// A named move set with an optional injected execution routine.
#[derive(Debug, Clone)]
pub struct MoveSet {
    /// Display name woven into routine output. Public and mutable: sets
    /// get renamed mid-fight and the routines must pick the new name up.
    pub name: String,
    routine: Option<AttackRoutine>,
}

impl MoveSet {
    /// A bare move set with no routine attached.
    pub fn new() -> Self {
        Self {
            name: "MoveSet".to_string(),
            routine: None,
        }
    }

    /// Attach an execution routine.
    pub fn with_routine(mut self, routine: AttackRoutine) -> Self {
        self.routine = Some(routine);
        self
    }

    /// Run the move set.
    ///
    /// With a routine attached, the routine is applied to the current
    /// name; without one, the reply is the bare name.
    pub fn execute(&self) -> String {
        match self.routine {
            Some(routine) => routine(&self.name),
            None => self.name.clone(),
        }
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::new()
    }
}
