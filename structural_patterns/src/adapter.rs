//! Adapter pattern: raw monsters speak their own vocabularies; adapters
//! translate them onto the one interface encounter code understands.
//!
//! Rank wrappers stack on top of any adapted monster: a mini-boss passes
//! the adaptee's numbers through, a boss promotes them.

/// The combat interface encounter code speaks.
pub trait Combatant {
    /// Damage dealt per strike.
    fn attack(&self) -> u32;

    /// Hit points.
    fn life(&self) -> u32;
}

/// A raw skeleton, all bone-themed methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skeleton;

impl Skeleton {
    /// Native damage: a swing of the bone club.
    pub fn bone_strike(&self) -> u32 {
        20
    }

    /// Native durability: how long the bones hold together.
    pub fn bone_count(&self) -> u32 {
        1000
    }
}

/// A raw beast, all hide-and-claw methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct Beast;

impl Beast {
    /// Native damage: a full claw swipe.
    pub fn claw_swipe(&self) -> u32 {
        100
    }

    /// Native durability: thickness of the hide.
    pub fn hide_thickness(&self) -> u32 {
        2500
    }
}

/// Adapts a [`Skeleton`] to the [`Combatant`] interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkeletonAdapter {
    inner: Skeleton,
}

impl SkeletonAdapter {
    pub fn new(inner: Skeleton) -> Self {
        Self { inner }
    }
}

impl Combatant for SkeletonAdapter {
    fn attack(&self) -> u32 {
        self.inner.bone_strike()
    }

    fn life(&self) -> u32 {
        self.inner.bone_count()
    }
}

/// Adapts a [`Beast`] to the [`Combatant`] interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeastAdapter {
    inner: Beast,
}

impl BeastAdapter {
    pub fn new(inner: Beast) -> Self {
        Self { inner }
    }
}

impl Combatant for BeastAdapter {
    fn attack(&self) -> u32 {
        self.inner.claw_swipe()
    }

    fn life(&self) -> u32 {
        self.inner.hide_thickness()
    }
}

/// Mini-boss rank: the adapted monster's numbers pass through unchanged.
pub struct MiniBoss {
    adaptee: Box<dyn Combatant>,
}

impl MiniBoss {
    pub fn new(adaptee: Box<dyn Combatant>) -> Self {
        Self { adaptee }
    }

    /// Swap in a different adapted monster.
    pub fn set_adapter(&mut self, adaptee: Box<dyn Combatant>) {
        self.adaptee = adaptee;
    }
}

impl Combatant for MiniBoss {
    fn attack(&self) -> u32 {
        self.adaptee.attack()
    }

    fn life(&self) -> u32 {
        self.adaptee.life()
    }
}

/// Boss rank: promotion multiplies attack by 2.5 and life by 10.
pub struct Boss {
    adaptee: Box<dyn Combatant>,
}

impl Boss {
    pub fn new(adaptee: Box<dyn Combatant>) -> Self {
        Self { adaptee }
    }

    /// Swap in a different adapted monster.
    pub fn set_adapter(&mut self, adaptee: Box<dyn Combatant>) {
        self.adaptee = adaptee;
    }
}

impl Combatant for Boss {
    fn attack(&self) -> u32 {
        // x2.5 in integer arithmetic; every stock adaptee's attack is even.
        self.adaptee.attack() * 5 / 2
    }

    fn life(&self) -> u32 {
        self.adaptee.life() * 10
    }
}
