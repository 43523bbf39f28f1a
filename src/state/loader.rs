use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{MenuError, Result};
use crate::models::{Catalog, Category, Item};

/// One raw row of the catalog CSV.
///
/// Numeric columns are read as text so bad values surface as a row error.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    item_name: Option<String>,
    category: Option<String>,
    calories: Option<String>,
    taste_profile: Option<String>,
    popularity_score: Option<String>,
}

/// Load a catalog from a CSV file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = read_catalog(file)?;
    info!(
        path = %path.display(),
        mains = catalog.mains().len(),
        sides = catalog.sides().len(),
        drinks = catalog.drinks().len(),
        "loaded menu catalog"
    );
    Ok(catalog)
}

/// Parse catalog CSV from any reader.
///
/// Rows with an unknown category are skipped and logged. Missing fields,
/// non-numeric calories or popularity, and popularity outside 0..1 fail the
/// whole load.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut row = csv::StringRecord::new();
    let mut items = Vec::new();
    let mut dropped = 0usize;

    while rdr.read_record(&mut row)? {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let record: ItemRecord = row.deserialize(Some(&headers))?;

        let category_raw = required(record.category, "category", line)?;
        let Some(category) = Category::parse(&category_raw) else {
            warn!(line, category = %category_raw, "dropping row with unrecognized category");
            dropped += 1;
            continue;
        };

        let name = required(record.item_name, "item_name", line)?;
        let calories = number(record.calories, "calories", line)?;
        let taste_profile = required(record.taste_profile, "taste_profile", line)?;
        let popularity_score = number(record.popularity_score, "popularity_score", line)?;
        if !(0.0..=1.0).contains(&popularity_score) {
            return Err(MenuError::MalformedRow {
                line,
                reason: format!("popularity_score must be within 0..1: {}", popularity_score),
            });
        }

        let item = Item::new(name, category, calories, taste_profile, popularity_score);
        debug!(line, item = %item.debug_string(), "parsed catalog row");
        items.push(item);
    }

    if dropped > 0 {
        warn!(dropped, "rows skipped while loading catalog");
    }

    Catalog::new(items)
}

fn required(value: Option<String>, field: &str, line: u64) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(MenuError::MalformedRow {
            line,
            reason: format!("missing {}", field),
        }),
    }
}

fn number(value: Option<String>, field: &str, line: u64) -> Result<f64> {
    let raw = required(value, field, line)?;
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MenuError::MalformedRow {
            line,
            reason: format!("{} is not a number: {}", field, raw),
        })
}
