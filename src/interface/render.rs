use crate::models::{Catalog, Combo, Item};
use crate::selector::RemarkStyle;

/// Print one batch of combos the way the local run shows them.
pub fn display_combos(combos: &[Combo], style: RemarkStyle) {
    if combos.is_empty() {
        println!("No new combos to offer (every combination has been served).");
        return;
    }

    let label = match style {
        RemarkStyle::Sentence => "Remark",
        RemarkStyle::TagList => "Reasoning",
    };

    for (i, combo) in combos.iter().enumerate() {
        println!();
        println!("Combo {}:", i + 1);
        println!("  Main : {}", combo.main.name);
        println!("  Side : {}", combo.side.name);
        println!("  Drink: {}", combo.drink.name);
        println!("  Total: {:.0} kcal", combo.total_calories());
        println!("  {}: {}", label, combo.remark);
    }
    println!();
}

/// Print every catalog bucket with item details.
pub fn display_catalog(catalog: &Catalog) {
    display_item_list(catalog.mains(), "Mains");
    display_item_list(catalog.sides(), "Sides");
    display_item_list(catalog.drinks(), "Drinks");

    println!(
        "{} items, {} possible combos",
        catalog.len(),
        catalog.cross_product_size()
    );
}

/// Print a simple list of items with their details.
pub fn display_item_list(items: &[Item], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for item in items {
        println!(
            "  {:<width$}  {:>5.0} cal  {:<10}  {:>3.0}% popular",
            item.name,
            item.calories,
            item.taste_profile,
            item.popularity_percent(),
            width = max_name_len
        );
    }

    println!();
}
