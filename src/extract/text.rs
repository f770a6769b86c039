use serde_json::Value;

/// Flattens an upstream text node into one string. The node is either a bare
/// string, a `{"simpleText": …}` shortcut, or `{"runs": [{"text": …}, …]}`
/// where each run may carry a navigation endpoint we do not care about. Runs
/// concatenate in order with no inserted separator; upstream puts any needed
/// whitespace inside the fragments themselves. Absent or unrecognized input
/// yields an empty string.
pub fn flatten(node: Option<&Value>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    if let Some(text) = node.as_str() {
        return text.to_owned();
    }
    if let Some(text) = node.get("simpleText").and_then(Value::as_str) {
        return text.to_owned();
    }
    match node.get("runs").and_then(Value::as_array) {
        Some(runs) => runs
            .iter()
            .filter_map(|run| run.get("text").and_then(Value::as_str))
            .collect(),
        None => String::new(),
    }
}
