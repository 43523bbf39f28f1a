use serde::{Deserialize, Serialize};

/// Menu category an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Side,
    Drink,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Side => "side",
            Category::Drink => "drink",
        }
    }

    /// Parse a raw category value, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "main" => Some(Category::Main),
            "side" => Some(Category::Side),
            "drink" => Some(Category::Drink),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single menu item.
///
/// Popularity is a 0..1 score; only a main's popularity feeds into remarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: Category,
    pub calories: f64,
    pub taste_profile: String,
    pub popularity_score: f64,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        calories: f64,
        taste_profile: impl Into<String>,
        popularity_score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            calories,
            taste_profile: taste_profile.into(),
            popularity_score,
        }
    }

    /// Popularity as a whole percentage, for display.
    #[inline]
    pub fn popularity_percent(&self) -> f64 {
        self.popularity_score * 100.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} cal, {}, popularity {:.2}",
            self.name, self.category, self.calories, self.taste_profile, self.popularity_score
        )
    }
}
