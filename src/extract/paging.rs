use serde_json::Value;

use super::{find_key, u64_at};

/// Paging metadata pulled from wherever the payload happened to put it.
/// Absent pieces default to empty / zero; an incomplete chip bar never fails
/// the response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paging {
    pub next_page_token: String,
    pub prev_page_token: String,
    pub total_results: u64,
    pub results_per_page: u64,
}

pub fn extract(root: &Value) -> Paging {
    Paging {
        next_page_token: forward_token(root).unwrap_or_default(),
        prev_page_token: backward_token(root).unwrap_or_default(),
        total_results: u64_at(root, "/estimatedResults")
            .or_else(|| find_key(root, "totalResults").and_then(as_count))
            .unwrap_or(0),
        results_per_page: find_key(root, "resultsPerPage")
            .and_then(as_count)
            .unwrap_or(0),
    }
}

fn forward_token(root: &Value) -> Option<String> {
    // Current payloads nest the token under continuationCommand; older ones
    // used nextContinuationData. Either way the depth varies by family.
    find_key(root, "continuationCommand")
        .and_then(|cmd| cmd.get("token"))
        .or_else(|| {
            find_key(root, "nextContinuationData").and_then(|data| data.get("continuation"))
        })
        .and_then(Value::as_str)
        .map(str::to_owned)
}

fn backward_token(root: &Value) -> Option<String> {
    find_key(root, "prevContinuationData")
        .and_then(|data| data.get("continuation"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
