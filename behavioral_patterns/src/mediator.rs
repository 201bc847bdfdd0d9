//! Mediator pattern: a two-headed dragon whose heads never talk to each
//! other directly.
//!
//! Each head innately breathes one element. Asking a head for the other
//! element goes through the dragon, which routes the request to the
//! sibling head. From the outside both heads appear to command both
//! elements.

/// The breath elements the dragon commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreathElement {
    Ice,
    Fire,
}

impl BreathElement {
    /// Breath name as reported to the caller.
    pub fn name(&self) -> &'static str {
        match self {
            BreathElement::Ice => "Ice",
            BreathElement::Fire => "Fire",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadSide {
    Left,
    Right,
}

impl HeadSide {
    fn other(self) -> HeadSide {
        match self {
            HeadSide::Left => HeadSide::Right,
            HeadSide::Right => HeadSide::Left,
        }
    }
}

/// One head. Knows only its own innate element; siblings are reached
/// through the dragon.
#[derive(Debug, Clone, Copy)]
struct DragonHead {
    innate: BreathElement,
}

impl DragonHead {
    fn breathe(&self) -> &'static str {
        self.innate.name()
    }
}

/// The mediator: owns both heads and routes cross-head breath requests.
#[derive(Debug, Clone)]
pub struct TwoHeadDragon {
    left: DragonHead,
    right: DragonHead,
}

impl TwoHeadDragon {
    /// Hatch a dragon: ice on the left, fire on the right.
    pub fn new() -> Self {
        Self {
            left: DragonHead {
                innate: BreathElement::Ice,
            },
            right: DragonHead {
                innate: BreathElement::Fire,
            },
        }
    }

    /// View of the left head.
    pub fn left_head(&self) -> HeadView<'_> {
        HeadView {
            dragon: self,
            side: HeadSide::Left,
        }
    }

    /// View of the right head.
    pub fn right_head(&self) -> HeadView<'_> {
        HeadView {
            dragon: self,
            side: HeadSide::Right,
        }
    }

    fn head(&self, side: HeadSide) -> &DragonHead {
        match side {
            HeadSide::Left => &self.left,
            HeadSide::Right => &self.right,
        }
    }

    /// Route a breath request from one head to its sibling.
    fn sibling_breath(&self, asker: HeadSide) -> &'static str {
        self.head(asker.other()).breathe()
    }
}

impl Default for TwoHeadDragon {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrow-view of a single head, handed out by the dragon.
#[derive(Debug, Clone, Copy)]
pub struct HeadView<'a> {
    dragon: &'a TwoHeadDragon,
    side: HeadSide,
}

impl HeadView<'_> {
    /// The element this head breathes without help.
    pub fn innate_element(&self) -> BreathElement {
        self.dragon.head(self.side).innate
    }

    /// Ice breath, produced locally or fetched from the sibling.
    pub fn ice_breath(&self) -> &'static str {
        self.breath(BreathElement::Ice)
    }

    /// Fire breath, produced locally or fetched from the sibling.
    pub fn fire_breath(&self) -> &'static str {
        self.breath(BreathElement::Fire)
    }

    fn breath(&self, element: BreathElement) -> &'static str {
        let own = self.dragon.head(self.side);
        if own.innate == element {
            own.breathe()
        } else {
            self.dragon.sibling_breath(self.side)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_heads_command_both_elements() {
        let dragon = TwoHeadDragon::new();
        let left = dragon.left_head();
        let right = dragon.right_head();

        assert_eq!(left.ice_breath(), "Ice");
        assert_eq!(left.fire_breath(), "Fire");
        assert_eq!(right.ice_breath(), "Ice");
        assert_eq!(right.fire_breath(), "Fire");
    }

    #[test]
    fn test_heads_have_distinct_innate_elements() {
        let dragon = TwoHeadDragon::new();

        assert_eq!(dragon.left_head().innate_element(), BreathElement::Ice);
        assert_eq!(dragon.right_head().innate_element(), BreathElement::Fire);
    }

    #[test]
    fn test_cross_element_requests_go_through_the_sibling() {
        let dragon = TwoHeadDragon::new();
        let left = dragon.left_head();

        // The left head cannot innately produce fire, yet the answer
        // matches the right head's own breath exactly.
        assert_ne!(left.innate_element(), BreathElement::Fire);
        assert_eq!(left.fire_breath(), dragon.right_head().fire_breath());
    }
}
