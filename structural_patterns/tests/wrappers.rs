//! Integration tests for the wrapper-side structural modules: adapted
//! combatants under rank wrappers, lazily built dungeons, and the spell
//! facade.

use structural_patterns::{
    Beast, BeastAdapter, Boss, Combatant, DungeonProxy, MiniBoss, Skeleton, SkeletonAdapter,
    SpellFacade,
};

/// Adapt both raw monsters, run them through both ranks, and check every
/// promoted number.
#[test]
fn test_ranks_over_adapted_monsters() {
    let mut mini_boss = MiniBoss::new(Box::new(SkeletonAdapter::new(Skeleton)));
    let mut boss = Boss::new(Box::new(SkeletonAdapter::new(Skeleton)));

    // Mini-boss rank: pass-through.
    assert_eq!(mini_boss.attack(), 20);
    assert_eq!(mini_boss.life(), 1000);

    mini_boss.set_adapter(Box::new(BeastAdapter::new(Beast)));
    assert_eq!(mini_boss.attack(), 100);
    assert_eq!(mini_boss.life(), 2500);

    // Boss rank: x2.5 attack, x10 life.
    assert_eq!(boss.attack(), 50);
    assert_eq!(boss.life(), 10000);

    boss.set_adapter(Box::new(BeastAdapter::new(Beast)));
    assert_eq!(boss.attack(), 250);
    assert_eq!(boss.life(), 25000);
}

/// Two proxies defer and build independently of each other.
#[test]
fn test_proxies_build_their_dungeons_once() {
    let mut instance_1 = DungeonProxy::new("Instance 1");
    let mut instance_2 = DungeonProxy::new("Instance 2");

    // First visits build.
    assert!(instance_1.show().contains("Building"));
    assert!(instance_2.show().contains("Building"));

    // Later visits pass through to the built dungeons.
    assert_eq!(instance_1.show(), "Dungeon Instance 1");
    assert_eq!(instance_2.show(), "Dungeon Instance 2");
    assert!(instance_1.is_built());
    assert!(instance_2.is_built());
}

/// Every spell is a single facade call hiding the whole casting sequence.
#[test]
fn test_facade_casts_complete_spells() {
    let spells = SpellFacade::new();

    let sorcery = spells.soul_arrow();
    let pyromancy = spells.fireball();
    let miracle = spells.heal();

    assert!(sorcery.contains("Soul arrows"), "got: {}", sorcery);
    assert!(pyromancy.contains("fire damage"), "got: {}", pyromancy);
    assert!(miracle.contains("cast a miracle"), "got: {}", miracle);

    // The subsystems ran: each casting names its attunement and reagent.
    assert!(sorcery.contains("attunement"));
    assert!(sorcery.contains("consume"));
}
