//! Pure extraction primitives over the raw response tree. Only the paths the
//! domain model consumes are given structure; everything else stays opaque
//! `serde_json::Value` so upstream schema drift does not break decoding.

use serde_json::Value;

pub mod dispatch;
pub mod duration;
pub mod paging;
pub mod text;
pub mod thumbs;

/// String lookup via JSON pointer, e.g. `/ownerText/runs/0/text`.
pub(crate) fn str_at<'a>(node: &'a Value, pointer: &str) -> Option<&'a str> {
    node.pointer(pointer).and_then(Value::as_str)
}

/// Integer lookup that accepts either a JSON number or a numeric string; the
/// upstream payload uses both interchangeably for counts.
pub(crate) fn u64_at(node: &Value, pointer: &str) -> Option<u64> {
    match node.pointer(pointer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn bool_at(node: &Value, pointer: &str) -> Option<bool> {
    node.pointer(pointer).and_then(Value::as_bool)
}

/// Pulls the digits out of a display label like `"1,204 videos"`.
pub(crate) fn digits(label: &str) -> Option<u64> {
    let cleaned: String = label.chars().filter(char::is_ascii_digit).collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Depth-first search for the first object holding `key`, returning the value
/// under it. Several upstream fields (continuation tokens in particular) move
/// around between payload families, so their extraction cannot hard-code a
/// full path.
pub(crate) fn find_key<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => {
            if let Some(found) = map.get(key) {
                return Some(found);
            }
            map.values().find_map(|child| find_key(child, key))
        }
        Value::Array(items) => items.iter().find_map(|child| find_key(child, key)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn u64_at_accepts_numbers_and_numeric_strings() {
        let node = json!({"a": 7, "b": "42", "c": "  13 ", "d": "x"});
        assert_eq!(u64_at(&node, "/a"), Some(7));
        assert_eq!(u64_at(&node, "/b"), Some(42));
        assert_eq!(u64_at(&node, "/c"), Some(13));
        assert_eq!(u64_at(&node, "/d"), None);
        assert_eq!(u64_at(&node, "/missing"), None);
    }

    #[test]
    fn digits_strips_separators() {
        assert_eq!(digits("1,204 videos"), Some(1204));
        assert_eq!(digits("No videos"), None);
    }

    #[test]
    fn find_key_reaches_nested_objects_and_arrays() {
        let node = json!({
            "outer": [{"skip": 1}, {"inner": {"token": "CAUQAA"}}]
        });
        let found = find_key(&node, "token").and_then(Value::as_str);
        assert_eq!(found, Some("CAUQAA"));
        assert!(find_key(&node, "absent").is_none());
    }
}
