use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use super::{random_token, shape};

/// Shown when a record carries no usable image field.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=Plant";

/// A catalog record normalized to the fixed schema the storefront renders.
/// Never mutated after normalization; the whole list is replaced per load.
#[derive(Debug, Clone, Serialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    /// Original source record, kept for traceability only.
    pub raw: Value,
}

impl Plant {
    /// Candidate paths under which the API has been seen nesting the
    /// plant array, tried in order. The empty path is the payload root.
    pub const ARRAY_PATHS: &'static [&'static str] =
        &["data.plants", "plants", "data", "data.data", ""];

    /// Normalize one raw catalog record. Null or non-object records are
    /// dropped rather than passed through.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        if !raw.is_object() {
            return None;
        }

        let id = shape::first_string(raw, &["id", "_id", "plant_id", "plantId"])
            .unwrap_or_else(random_token);
        let name = shape::first_string(raw, &["name", "plant_name", "common_name", "title"])
            .unwrap_or_else(|| "Unknown Plant".to_string());
        let image = shape::first_string(raw, &["image", "img", "images.0", "picture", "photo"])
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
        let description =
            shape::first_string(raw, &["description", "short_description", "about", "details"])
                .unwrap_or_default();
        let category = shape::first_string(raw, &["category", "category_name", "cat"])
            .unwrap_or_else(|| "General".to_string());
        let price = shape::first_number(raw, &["price", "cost"])
            .map(|p| p.max(0.0))
            .unwrap_or_else(|| synthesize_price(&id));

        Some(Self {
            id,
            name,
            image,
            description,
            category,
            price,
            raw: raw.clone(),
        })
    }
}

/// The API frequently omits prices. Derive one from the digits of the id
/// so repeated loads of the same record price it consistently; ids without
/// digits get a random seed instead.
fn synthesize_price(id: &str) -> f64 {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).take(15).collect();
    let seed = digits
        .parse::<u64>()
        .unwrap_or_else(|_| rand::thread_rng().gen_range(0..900));
    ((seed % 900 + 200) as f64).max(150.0)
}
