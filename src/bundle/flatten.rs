//! Flattening of nested locale documents into dotted key maps.

use std::collections::HashMap;

use serde_json::Value;

/// Flatten a nested locale document into a dot-separated key map.
///
/// Namespaces become key prefixes, array elements use `[index]` notation,
/// and non-string scalar leaves are stringified.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use rte_locale::bundle::flatten_value;
///
/// let doc = json!({
///     "common": {
///         "ok": "Akcepti",
///         "cancel": "Rezigni"
///     }
/// });
///
/// let flat = flatten_value(&doc, ".");
/// assert_eq!(flat.get("common.ok"), Some(&"Akcepti".to_string()));
/// ```
#[must_use]
pub fn flatten_value(value: &Value, separator: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_into(value, separator, None, &mut result);
    result
}

fn flatten_into(
    value: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_into(child, separator, Some(&full_key), result);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_into(child, separator, Some(&full_key), result);
            }
        }
        Value::String(text) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), text.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), value.to_string());
            }
        }
    }
}

/// Checks if `child_key` lies below `parent_key` in the key hierarchy.
///
/// Supports both separator-based (`table.cell`) and array notation
/// (`items[0]`) children.
#[must_use]
pub fn is_child_key(child_key: &str, parent_key: &str, separator: &str) -> bool {
    let Some(remainder) = child_key.strip_prefix(parent_key) else {
        return false;
    };

    !remainder.is_empty() && (remainder.starts_with(separator) || remainder.starts_with('['))
}
