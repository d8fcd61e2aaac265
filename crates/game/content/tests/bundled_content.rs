use std::path::PathBuf;

use rogue_content::ContentFactory;
use rogue_core::{
    ActorSnapshot, Attribute, EntityId, Env, ItemId, ItemOracle, PcgRng, TablesOracle, resolve,
};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn shipped_content_loads_and_validates() {
    let bundle = ContentFactory::new(data_dir())
        .load_all()
        .expect("shipped content should be valid");

    assert_eq!(bundle.items.len(), 9);
    assert_eq!(bundle.tables.tags().len(), 5);
    assert_eq!(bundle.tables.tags().name(rogue_core::TagId(0)), Some("fire"));

    let sword = bundle.items.definition(ItemId(1)).unwrap();
    assert_eq!(sword.name, "Ember Sword");
    assert_eq!(sword.attribute(Attribute::BaseDamage), 10);
}

#[test]
fn shipped_content_resolves_fire_pair() {
    let bundle = ContentFactory::new(data_dir()).load_all().unwrap();
    let env = Env::with_all(&bundle.items, &bundle.tables, &PcgRng);

    // Ember Sword + Fire Wand: (10 + 10) × 1.5
    let attacker = ActorSnapshot::bare(EntityId::PLAYER, 40).with_items([ItemId(1), ItemId(2)]);
    let defender = ActorSnapshot::bare(EntityId(1), 40);

    let result = resolve(&attacker, &defender, None, &env).unwrap();
    assert_eq!(result.damage, 30);
    assert_eq!(result.synergy_names(), vec!["fire"]);
}

#[test]
fn shipped_content_resolves_in_declaration_order() {
    let bundle = ContentFactory::new(data_dir()).load_all().unwrap();
    let env = Env::with_all(&bundle.items, &bundle.tables, &PcgRng);

    // Iron Dagger listed first, but "fire" is declared before "blade"
    let attacker = ActorSnapshot::bare(EntityId::PLAYER, 40)
        .with_items([ItemId(3), ItemId(1), ItemId(7)]);
    let defender = ActorSnapshot::bare(EntityId(1), 100).with_items([ItemId(5)]);

    let result = resolve(&attacker, &defender, None, &env).unwrap();
    assert_eq!(result.synergy_names(), vec!["fire", "blade"]);
    // base 18, (18 + 4) × 1.5 = 33, armor 8 / 2 = 4
    assert_eq!(result.breakdown.after_synergies, 33);
    assert_eq!(result.damage, 29);
}
