use serde::Serialize;
use serde_json::Value;

use super::{random_token, shape};

/// Sentinel id for the synthetic "all plants" category entry. Distinct
/// from every real category id the API hands out.
pub const ALL_CATEGORIES_ID: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    /// Candidate paths under which the API has been seen nesting the
    /// category array, tried in order.
    pub const ARRAY_PATHS: &'static [&'static str] =
        &["data.categories", "categories", "data", ""];

    /// The synthetic entry that requests the unfiltered plant list.
    pub fn all() -> Self {
        Self {
            id: ALL_CATEGORIES_ID.to_string(),
            name: "All Trees".to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORIES_ID
    }

    /// Normalize one raw category record. Every category must end up
    /// clickable, so a missing id falls back to a random token.
    pub fn from_raw(raw: &Value) -> Self {
        let id = shape::first_string(
            raw,
            &["id", "category_id", "_id", "categoryId", "cat_id", "slug", "name"],
        )
        .unwrap_or_else(random_token);
        let name = shape::first_string(
            raw,
            &["name", "category", "title", "category_name", "display_name"],
        )
        .unwrap_or_else(|| "Unnamed".to_string());

        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_alternate_id_and_name_spellings() {
        let cat = Category::from_raw(&json!({"category_id": 3, "category_name": "Ferns"}));
        assert_eq!(cat.id, "3");
        assert_eq!(cat.name, "Ferns");

        let cat = Category::from_raw(&json!({"slug": "succulents", "title": "Succulents"}));
        assert_eq!(cat.id, "succulents");
        assert_eq!(cat.name, "Succulents");
    }

    #[test]
    fn empty_record_gets_fallback_id_and_name() {
        let a = Category::from_raw(&json!({}));
        let b = Category::from_raw(&json!({}));
        assert_eq!(a.name, "Unnamed");
        assert!(!a.id.is_empty());
        // Fallback ids are random tokens, so two records stay distinct.
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn sentinel_is_distinct_from_normalized_categories() {
        let all = Category::all();
        assert!(all.is_all());
        assert!(!Category::from_raw(&json!({"id": "indoor"})).is_all());
    }
}
