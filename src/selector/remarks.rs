use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Item, calorie_total};
use crate::selector::constants::*;

/// How a combo's remark text is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RemarkStyle {
    /// One sentence picked at random from a small template set.
    Sentence,
    /// Up to three short comma-joined reasons.
    #[value(name = "tags")]
    TagList,
}

/// Meal size derived from a combo's total calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    Hearty,
    Satisfying,
    Light,
}

impl MealType {
    pub fn from_calories(total: f64) -> Self {
        if total > HEARTY_CALORIES {
            MealType::Hearty
        } else if total > SATISFYING_CALORIES {
            MealType::Satisfying
        } else {
            MealType::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Hearty => "hearty",
            MealType::Satisfying => "satisfying",
            MealType::Light => "light",
        }
    }

    /// Tag-list phrase for this meal size.
    pub fn phrase(&self) -> &'static str {
        match self {
            MealType::Hearty => "hearty meal",
            MealType::Satisfying => "satisfying portion",
            MealType::Light => "light option",
        }
    }
}

/// Number of sentence templates to choose from.
const SENTENCE_TEMPLATES: usize = 5;

/// Distinct taste profiles in main, side, drink order of first appearance.
pub fn distinct_profiles<'a>(main: &'a Item, side: &'a Item, drink: &'a Item) -> Vec<&'a str> {
    let mut profiles: Vec<&str> = Vec::with_capacity(3);
    for item in [main, side, drink] {
        if !profiles.contains(&item.taste_profile.as_str()) {
            profiles.push(&item.taste_profile);
        }
    }
    profiles
}

/// True when all three items share one taste profile.
pub fn has_synergy(main: &Item, side: &Item, drink: &Item) -> bool {
    main.taste_profile == side.taste_profile && side.taste_profile == drink.taste_profile
}

/// Build the remark for a triple in the requested style.
pub fn compose_remark<R: Rng + ?Sized>(
    style: RemarkStyle,
    main: &Item,
    side: &Item,
    drink: &Item,
    rng: &mut R,
) -> String {
    match style {
        RemarkStyle::Sentence => compose_sentence(main, side, drink, rng),
        RemarkStyle::TagList => compose_reasoning(main, side, drink),
    }
}

/// Pick one of the sentence templates uniformly at random.
pub fn compose_sentence<R: Rng + ?Sized>(
    main: &Item,
    side: &Item,
    drink: &Item,
    rng: &mut R,
) -> String {
    let total = calorie_total(main, side, drink);
    let meal = MealType::from_calories(total).as_str();

    match rng.gen_range(0..SENTENCE_TEMPLATES) {
        0 => {
            let synergy = if has_synergy(main, side, drink) {
                format!(" with a consistent {} profile", main.taste_profile)
            } else {
                String::new()
            };
            format!(
                "A {} meal featuring {} with {}, perfectly paired with {}{}.",
                meal, main.name, side.name, drink.name, synergy
            )
        }
        1 => format!(
            "Enjoy our {} (popularity: {:.0}%) with {}, complemented by {}.",
            main.name,
            main.popularity_percent(),
            side.name,
            drink.name
        ),
        2 => format!(
            "Today's special: {} served with {} and {} - a {} combination.",
            main.name, side.name, drink.name, meal
        ),
        3 => format!(
            "A {} combination of {}, {}, and {} (Total: {:.0} kcal).",
            meal, main.name, side.name, drink.name, total
        ),
        _ => format!(
            "Try our {} with {} and {} - a customer favorite!",
            main.name, side.name, drink.name
        ),
    }
}

/// Build the ordered reason list and join the first three.
pub fn compose_reasoning(main: &Item, side: &Item, drink: &Item) -> String {
    reasons(main, side, drink)
        .into_iter()
        .take(MAX_REASONS)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every reason phrase for a triple, before truncation.
pub fn reasons(main: &Item, side: &Item, drink: &Item) -> Vec<String> {
    let total = calorie_total(main, side, drink);
    let profiles = distinct_profiles(main, side, drink);
    let mut reasons = Vec::new();

    if profiles.len() == 1 {
        reasons.push(format!("unified {} profile", profiles[0]));
    } else {
        reasons.push(format!("complementary {} flavors", profiles.join(", ")));
    }

    if main.popularity_score >= POPULAR_THRESHOLD {
        reasons.push("popular choice".to_string());
    }

    if profiles.contains(&SPICY_PROFILE) {
        reasons.push("spicy kick".to_string());
    } else if profiles.contains(&SWEET_PROFILE) {
        reasons.push("sweet notes".to_string());
    }

    reasons.push(MealType::from_calories(total).phrase().to_string());

    if reasons.len() < MAX_REASONS {
        if total > HEARTY_CALORIES {
            reasons.push("high-energy meal".to_string());
        } else if total < LOW_CALORIE_CALORIES {
            reasons.push("low-calorie choice".to_string());
        }
        if profiles.len() > 1 {
            reasons.push("great flavor combination".to_string());
        }
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn item(name: &str, category: Category, cal: f64, taste: &str, pop: f64) -> Item {
        Item::new(name, category, cal, taste, pop)
    }

    #[test]
    fn test_meal_type_thresholds() {
        assert_eq!(MealType::from_calories(1001.0), MealType::Hearty);
        assert_eq!(MealType::from_calories(1000.0), MealType::Satisfying);
        assert_eq!(MealType::from_calories(701.0), MealType::Satisfying);
        assert_eq!(MealType::from_calories(700.0), MealType::Light);
        assert_eq!(MealType::from_calories(0.0), MealType::Light);
    }

    #[test]
    fn test_distinct_profiles_keep_first_appearance() {
        let main = item("A", Category::Main, 400.0, "spicy", 0.5);
        let side = item("B", Category::Side, 200.0, "savory", 0.5);
        let drink = item("C", Category::Drink, 100.0, "spicy", 0.5);
        assert_eq!(distinct_profiles(&main, &side, &drink), vec!["spicy", "savory"]);
        assert!(!has_synergy(&main, &side, &drink));
    }

    #[test]
    fn test_spicy_wins_over_sweet() {
        let main = item("A", Category::Main, 400.0, "sweet", 0.5);
        let side = item("B", Category::Side, 200.0, "spicy", 0.5);
        let drink = item("C", Category::Drink, 100.0, "sweet", 0.5);
        let all = reasons(&main, &side, &drink);
        assert!(all.contains(&"spicy kick".to_string()));
        assert!(!all.contains(&"sweet notes".to_string()));
    }

    #[test]
    fn test_sentence_uses_item_names() {
        let main = item("Burger", Category::Main, 650.0, "savory", 0.9);
        let side = item("Fries", Category::Side, 350.0, "savory", 0.8);
        let drink = item("Cola", Category::Drink, 150.0, "sweet", 0.7);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let sentence = compose_sentence(&main, &side, &drink, &mut rng);
            assert!(sentence.contains("Burger"));
            assert!(sentence.contains("Fries"));
            assert!(sentence.contains("Cola"));
        }
    }

    #[test]
    fn test_sentence_is_reproducible_with_seed() {
        let main = item("Burger", Category::Main, 650.0, "savory", 0.9);
        let side = item("Fries", Category::Side, 350.0, "savory", 0.8);
        let drink = item("Cola", Category::Drink, 150.0, "sweet", 0.7);

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                compose_sentence(&main, &side, &drink, &mut a),
                compose_sentence(&main, &side, &drink, &mut b)
            );
        }
    }
}
