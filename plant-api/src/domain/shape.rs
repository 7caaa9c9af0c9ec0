//! Best-effort shape bridging for the catalog API.
//!
//! The upstream payloads drift between endpoints: the record array may sit
//! under a `data` wrapper, a pluralized key, or be the root value itself,
//! and individual records spell their fields several different ways. These
//! helpers absorb that drift without ever erroring.

use serde_json::Value;

/// Walk a dot-separated path into a JSON value. Numeric segments index
/// into arrays (`images.0`). The empty path is the value itself.
fn walk<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Locate the record array inside an arbitrarily shaped payload.
///
/// Tries each candidate path in order and takes the first one that is
/// already an array. When no path matches but the payload is an object,
/// its values are flattened one level with nulls dropped. Anything else
/// (a failed fetch, a scalar, null) yields an empty list.
pub fn locate_array(raw: Option<&Value>, paths: &[&str]) -> Vec<Value> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    for path in paths {
        if let Some(Value::Array(items)) = walk(raw, path) {
            return items.clone();
        }
    }

    if let Value::Object(map) = raw {
        return map
            .values()
            .flat_map(|v| match v {
                Value::Array(items) => items.clone(),
                other => vec![other.clone()],
            })
            .filter(|v| !v.is_null())
            .collect();
    }

    Vec::new()
}

/// First candidate path holding a string, taken in order. Numbers are
/// accepted and rendered in their display form, since the API flips ids
/// between the two.
pub fn first_string(record: &Value, paths: &[&str]) -> Option<String> {
    paths.iter().find_map(|path| match walk(record, path)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// First candidate path holding a number, taken in order. Numeric strings
/// are parsed.
pub fn first_number(record: &Value, paths: &[&str]) -> Option<f64> {
    paths.iter().find_map(|path| match walk(record, path)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PLANT_PATHS: &[&str] = &["data.plants", "plants", "data", "data.data", ""];

    #[test]
    fn locates_array_under_each_known_shape() {
        let expected = json!([{"id": 1}, {"id": 2}]);

        for payload in [
            json!({"data": {"plants": [{"id": 1}, {"id": 2}]}}),
            json!({"plants": [{"id": 1}, {"id": 2}]}),
            json!({"data": [{"id": 1}, {"id": 2}]}),
            json!([{"id": 1}, {"id": 2}]),
        ] {
            let located = locate_array(Some(&payload), PLANT_PATHS);
            assert_eq!(Value::Array(located), expected, "payload: {payload}");
        }
    }

    #[test]
    fn degenerate_payloads_yield_empty() {
        for payload in [json!(null), json!(42), json!("nope"), json!({})] {
            assert!(locate_array(Some(&payload), PLANT_PATHS).is_empty());
        }
        assert!(locate_array(None, PLANT_PATHS).is_empty());
    }

    #[test]
    fn object_fallback_flattens_values_and_drops_nulls() {
        let payload = json!({
            "featured": [{"id": 1}],
            "seasonal": [{"id": 2}, null],
            "note": null
        });
        let located = locate_array(Some(&payload), PLANT_PATHS);
        assert_eq!(located.len(), 2);
        assert!(located.iter().all(|v| v.is_object()));
    }

    #[test]
    fn first_string_takes_earliest_candidate_and_coerces_numbers() {
        let record = json!({"plant_id": 7, "name": "Fern"});
        assert_eq!(
            first_string(&record, &["id", "_id", "plant_id"]),
            Some("7".to_string())
        );
        assert_eq!(first_string(&record, &["title", "name"]), Some("Fern".into()));
        assert_eq!(first_string(&record, &["missing"]), None);
    }

    #[test]
    fn first_string_walks_indexed_paths() {
        let record = json!({"images": ["a.jpg", "b.jpg"]});
        assert_eq!(
            first_string(&record, &["image", "images.0"]),
            Some("a.jpg".to_string())
        );
    }

    #[test]
    fn first_number_parses_numeric_strings() {
        let record = json!({"price": "300"});
        assert_eq!(first_number(&record, &["price", "cost"]), Some(300.0));

        let record = json!({"cost": 149.5});
        assert_eq!(first_number(&record, &["price", "cost"]), Some(149.5));

        let record = json!({"price": "not a price"});
        assert_eq!(first_number(&record, &["price"]), None);
    }
}
