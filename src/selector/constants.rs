/// Combos produced per call to the selector.
pub const BATCH_SIZE: usize = 3;

/// Maximum calorie gap between a diverse batch's first combo and the rest.
pub const CALORIE_TOLERANCE: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal type thresholds (total calories, exclusive)
// ─────────────────────────────────────────────────────────────────────────────

/// Above this a combo is a hearty meal.
pub const HEARTY_CALORIES: f64 = 1000.0;

/// Above this (and not hearty) a combo is a satisfying meal.
pub const SATISFYING_CALORIES: f64 = 700.0;

/// Below this a combo earns the low-calorie fallback tag.
pub const LOW_CALORIE_CALORIES: f64 = 600.0;

/// Main popularity at or above this is tagged as a popular choice.
pub const POPULAR_THRESHOLD: f64 = 0.9;

/// Number of phrases kept in a tag-list remark.
pub const MAX_REASONS: usize = 3;

/// Taste profiles with their own tag, in priority order.
pub const SPICY_PROFILE: &str = "spicy";
pub const SWEET_PROFILE: &str = "sweet";
