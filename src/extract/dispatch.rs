use serde_json::Value;

/// The three result shapes a list payload can carry, identified by which
/// renderer marker is present on the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Video,
    Channel,
    Playlist,
}

/// Marker priority is fixed: a node carrying more than one marker (an
/// upstream defect) still resolves deterministically to the first match.
const MARKERS: [(&str, Variant); 3] = [
    ("videoRenderer", Variant::Video),
    ("channelRenderer", Variant::Channel),
    ("playlistRenderer", Variant::Playlist),
];

/// Routes one result node to its extractor, returning the inner renderer
/// object. Nodes matching no marker are filler the upstream interleaves into
/// result lists (correction prompts, ads); they are skipped with a debug log,
/// never an error.
pub fn dispatch(node: &Value) -> Option<(Variant, &Value)> {
    for (marker, variant) in MARKERS {
        if let Some(inner) = node.get(marker) {
            return Some((variant, inner));
        }
    }
    let keys: Vec<&String> = node
        .as_object()
        .map(|map| map.keys().collect())
        .unwrap_or_default();
    tracing::debug!(?keys, "skipping result node with no renderer marker");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn routes_each_marker_to_its_variant() {
        let video = json!({"videoRenderer": {"videoId": "a"}});
        let channel = json!({"channelRenderer": {"channelId": "b"}});
        let playlist = json!({"playlistRenderer": {"playlistId": "c"}});
        assert_eq!(dispatch(&video).unwrap().0, Variant::Video);
        assert_eq!(dispatch(&channel).unwrap().0, Variant::Channel);
        assert_eq!(dispatch(&playlist).unwrap().0, Variant::Playlist);
    }

    #[test]
    fn filler_nodes_are_dropped_not_fatal() {
        let filler = json!({"didYouMeanRenderer": {"correctedQuery": {"runs": []}}});
        assert!(dispatch(&filler).is_none());
        assert!(dispatch(&json!("not even an object")).is_none());
    }

    #[test]
    fn double_marked_node_resolves_to_first_in_priority_order() {
        let defective = json!({
            "playlistRenderer": {"playlistId": "c"},
            "videoRenderer": {"videoId": "a"}
        });
        let (variant, inner) = dispatch(&defective).unwrap();
        assert_eq!(variant, Variant::Video);
        assert_eq!(inner["videoId"], "a");
    }
}
