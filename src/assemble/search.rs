use serde_json::Value;

use super::nonempty;
use crate::extract::dispatch::{self, Variant};
use crate::extract::thumbs::{self, SizeProfile};
use crate::extract::{duration, find_key, paging, str_at, text};
use crate::model::{
    Duration, LiveBroadcastContent, PageInfo, ResourceId, SearchListResponse, SearchResult,
};

/// Upstream caps its approximate hit count; anything beyond this is noise.
const TOTAL_RESULTS_CAP: u64 = 1_000_000;

/// Assembles one page of search results. `None` means the payload carries no
/// results container at all; a page whose every node is filler still
/// assembles, just with an empty item list.
pub fn page(root: &Value) -> Option<SearchListResponse> {
    let candidates = candidate_nodes(root)?;

    let mut items = Vec::new();
    for node in candidates {
        let Some((variant, inner)) = dispatch::dispatch(node) else {
            continue;
        };
        match result(variant, inner) {
            Some(item) => items.push(item),
            None => tracing::debug!(?variant, "dropping result node missing its id"),
        }
    }

    let paging = paging::extract(root);
    let results_per_page = if paging.results_per_page != 0 {
        paging.results_per_page
    } else {
        items.len() as u64
    };

    Some(SearchListResponse {
        kind: "youtube#searchListResponse".to_owned(),
        next_page_token: (!paging.next_page_token.is_empty()).then_some(paging.next_page_token),
        region_code: find_key(root, "countryCode")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        page_info: PageInfo {
            total_results: paging.total_results.min(TOTAL_RESULTS_CAP),
            results_per_page,
        },
        items,
    })
}

fn candidate_nodes(root: &Value) -> Option<Vec<&Value>> {
    let sections = root
        .pointer(
            "/contents/twoColumnSearchResultsRenderer/primaryContents/sectionListRenderer/contents",
        )
        .and_then(Value::as_array)
        .or_else(|| {
            root.get("onResponseReceivedCommands")?
                .as_array()?
                .iter()
                .find_map(|command| {
                    command
                        .pointer("/appendContinuationItemsAction/continuationItems")
                        .and_then(Value::as_array)
                })
        })?;

    let mut nodes = Vec::new();
    for section in sections {
        if let Some(contents) = section
            .pointer("/itemSectionRenderer/contents")
            .and_then(Value::as_array)
        {
            nodes.extend(contents.iter());
        }
    }
    Some(nodes)
}

/// Maps one dispatched renderer to a `SearchResult`. A renderer without its
/// identifying id is malformed and dropped.
pub fn result(variant: Variant, node: &Value) -> Option<SearchResult> {
    match variant {
        Variant::Video => {
            let id = node.get("videoId").and_then(Value::as_str)?;
            Some(SearchResult {
                id: ResourceId::Video(id.to_owned()),
                title: text::flatten(node.get("title")),
                description: text::flatten(node.get("descriptionSnippet")),
                thumbnails: thumbs::select(
                    thumbs::candidates(node.get("thumbnail")),
                    SizeProfile::Video,
                ),
                channel_id: str_at(
                    node,
                    "/ownerText/runs/0/navigationEndpoint/browseEndpoint/browseId",
                )
                .map(str::to_owned),
                channel_title: nonempty(text::flatten(node.get("ownerText"))),
                live_broadcast_content: live_state(node),
                // The result tile carries its length only as a display label.
                duration: duration::from_label(&text::flatten(node.get("lengthText"))),
            })
        }
        Variant::Channel => {
            let id = node.get("channelId").and_then(Value::as_str)?;
            let title = text::flatten(node.get("title"));
            Some(SearchResult {
                id: ResourceId::Channel(id.to_owned()),
                title: title.clone(),
                description: text::flatten(node.get("descriptionSnippet")),
                thumbnails: thumbs::select(
                    thumbs::candidates(node.get("thumbnail")),
                    SizeProfile::Channel,
                ),
                channel_id: Some(id.to_owned()),
                channel_title: nonempty(title),
                live_broadcast_content: LiveBroadcastContent::None,
                duration: Duration::default(),
            })
        }
        Variant::Playlist => {
            let id = node.get("playlistId").and_then(Value::as_str)?;
            let thumbnail_node = node
                .pointer("/thumbnails/0")
                .or_else(|| node.get("thumbnail"));
            Some(SearchResult {
                id: ResourceId::Playlist(id.to_owned()),
                title: text::flatten(node.get("title")),
                description: String::new(),
                thumbnails: thumbs::select(
                    thumbs::candidates(thumbnail_node),
                    SizeProfile::Video,
                ),
                channel_id: str_at(
                    node,
                    "/shortBylineText/runs/0/navigationEndpoint/browseEndpoint/browseId",
                )
                .map(str::to_owned),
                channel_title: nonempty(text::flatten(node.get("shortBylineText"))),
                live_broadcast_content: LiveBroadcastContent::None,
                duration: Duration::default(),
            })
        }
    }
}

fn live_state(node: &Value) -> LiveBroadcastContent {
    if let Some(overlays) = node.get("thumbnailOverlays").and_then(Value::as_array) {
        for overlay in overlays {
            match str_at(overlay, "/thumbnailOverlayTimeStatusRenderer/style") {
                Some("LIVE") => return LiveBroadcastContent::Live,
                Some("UPCOMING") => return LiveBroadcastContent::Upcoming,
                _ => {}
            }
        }
    }
    let live_badge = node
        .get("badges")
        .and_then(Value::as_array)
        .is_some_and(|badges| {
            badges.iter().any(|badge| {
                str_at(badge, "/metadataBadgeRenderer/style")
                    == Some("BADGE_STYLE_TYPE_LIVE_NOW")
            })
        });
    if live_badge {
        LiveBroadcastContent::Live
    } else {
        LiveBroadcastContent::None
    }
}
