use std::collections::HashSet;

use menu_combo_maker_rs::models::{Catalog, Category, Item};
use menu_combo_maker_rs::selector::{CALORIE_TOLERANCE, ComboSelector, Policy, SelectorConfig};

fn diverse(catalog: Catalog, seed: u64) -> ComboSelector {
    ComboSelector::new(
        catalog,
        SelectorConfig {
            policy: Policy::Diverse,
            seed: Some(seed),
            ..Default::default()
        },
    )
}

fn varied_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new("Burger", Category::Main, 650.0, "savory", 0.92),
        Item::new("Tacos", Category::Main, 645.0, "spicy", 0.88),
        Item::new("Pasta", Category::Main, 655.0, "savory", 0.75),
        Item::new("Curry", Category::Main, 900.0, "spicy", 0.81),
        Item::new("Fries", Category::Side, 350.0, "salty", 0.8),
        Item::new("Rice", Category::Side, 348.0, "neutral", 0.6),
        Item::new("Slaw", Category::Side, 352.0, "fresh", 0.55),
        Item::new("Cola", Category::Drink, 150.0, "sweet", 0.7),
        Item::new("Lemonade", Category::Drink, 148.0, "sweet", 0.65),
        Item::new("Iced Tea", Category::Drink, 152.0, "bitter", 0.5),
    ])
    .unwrap()
}

#[test]
fn test_batches_are_calorie_matched_and_distinct() {
    for seed in 0..25 {
        let mut selector = diverse(varied_catalog(), seed);

        for _ in 0..6 {
            let combos = selector.generate_combos().unwrap();
            assert!(!combos.is_empty());
            assert!(combos.len() <= 3);

            let target = combos[0].total_calories();
            for combo in &combos[1..] {
                assert!(
                    (combo.total_calories() - target).abs() <= CALORIE_TOLERANCE,
                    "seed {}: {} kcal vs target {}",
                    seed,
                    combo.total_calories(),
                    target
                );
            }

            let mains: HashSet<&str> = combos.iter().map(|c| c.main.name.as_str()).collect();
            let sides: HashSet<&str> = combos.iter().map(|c| c.side.name.as_str()).collect();
            let drinks: HashSet<&str> = combos.iter().map(|c| c.drink.name.as_str()).collect();
            assert_eq!(mains.len(), combos.len());
            assert_eq!(sides.len(), combos.len());
            assert_eq!(drinks.len(), combos.len());
        }
    }
}

#[test]
fn test_single_combo_catalog_resets_and_reemits() {
    let catalog = Catalog::new(vec![
        Item::new("A", Category::Main, 400.0, "savory", 0.95),
        Item::new("B", Category::Side, 200.0, "savory", 0.5),
        Item::new("C", Category::Drink, 150.0, "savory", 0.5),
    ])
    .unwrap();
    let mut selector = diverse(catalog, 1);

    let first = selector.generate_combos().unwrap();
    assert_eq!(first.len(), 1);
    assert!(selector.tracker().is_exhausted(1));

    let second = selector.generate_combos().unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].key(), first[0].key());
}

#[test]
fn test_end_to_end_reasoning() {
    let catalog = Catalog::new(vec![
        Item::new("A", Category::Main, 400.0, "savory", 0.95),
        Item::new("B", Category::Side, 200.0, "savory", 0.5),
        Item::new("C", Category::Drink, 150.0, "savory", 0.5),
    ])
    .unwrap();
    let mut selector = diverse(catalog, 2);

    let combos = selector.generate_combos().unwrap();
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].total_calories(), 750.0);
    assert_eq!(
        combos[0].remark,
        "unified savory profile, popular choice, satisfying portion"
    );
}

#[test]
fn test_short_batch_when_nothing_matches() {
    // The other main is 800 kcal away, so only the base combo fits.
    let catalog = Catalog::new(vec![
        Item::new("Light", Category::Main, 100.0, "fresh", 0.5),
        Item::new("Heavy", Category::Main, 900.0, "savory", 0.5),
        Item::new("S1", Category::Side, 50.0, "fresh", 0.5),
        Item::new("S2", Category::Side, 50.0, "fresh", 0.5),
        Item::new("D1", Category::Drink, 0.0, "neutral", 0.5),
        Item::new("D2", Category::Drink, 0.0, "neutral", 0.5),
    ])
    .unwrap();
    let mut selector = diverse(catalog, 8);

    let combos = selector.generate_combos().unwrap();
    assert_eq!(combos.len(), 1);
}

#[test]
fn test_covers_cross_product_before_reset() {
    let catalog = Catalog::new(vec![
        Item::new("M1", Category::Main, 500.0, "savory", 0.5),
        Item::new("M2", Category::Main, 500.0, "savory", 0.5),
        Item::new("S1", Category::Side, 200.0, "salty", 0.5),
        Item::new("D1", Category::Drink, 100.0, "sweet", 0.5),
    ])
    .unwrap();
    let mut selector = diverse(catalog, 4);

    // Only one side and drink: each batch holds a single combo.
    let first = selector.generate_combos().unwrap();
    let second = selector.generate_combos().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_ne!(first[0].key(), second[0].key());

    let third = selector.generate_combos().unwrap();
    assert_eq!(third.len(), 1);
    assert_eq!(selector.tracker().used_len(), 1);
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = diverse(varied_catalog(), 77);
    let mut b = diverse(varied_catalog(), 77);

    for _ in 0..5 {
        let left: Vec<_> = a.generate_combos().unwrap().iter().map(|c| c.key()).collect();
        let right: Vec<_> = b.generate_combos().unwrap().iter().map(|c| c.key()).collect();
        assert_eq!(left, right);
    }
}
