use serde_json::Value;

use super::nonempty;
use crate::extract::thumbs::{self, SizeProfile};
use crate::extract::{digits, find_key, str_at, text, u64_at};
use crate::model::{
    Playlist, PlaylistItem, PlaylistItemContentDetails, PrivacyStatus, ResourceId,
};

/// Assembles a `Playlist` from a single-playlist payload. A payload without
/// a playlist header (deleted or never existed) yields `None`.
pub fn playlist(root: &Value) -> Option<Playlist> {
    let header = root.pointer("/header/playlistHeaderRenderer")?;
    let id = header.get("playlistId").and_then(Value::as_str)?.to_owned();

    let privacy_status = match str_at(header, "/privacy") {
        Some("UNLISTED") => PrivacyStatus::Unlisted,
        Some("PRIVATE") => PrivacyStatus::Private,
        _ => PrivacyStatus::Public,
    };

    Some(Playlist {
        kind: "youtube#playlist".to_owned(),
        id,
        channel_id: str_at(header, "/ownerEndpoint/browseEndpoint/browseId")
            .unwrap_or_default()
            .to_owned(),
        channel_title: text::flatten(header.get("ownerText")),
        title: text::flatten(header.get("title")),
        description: text::flatten(header.get("descriptionText")),
        thumbnails: thumbs::select(
            thumbs::candidates(root.pointer("/microformat/microformatDataRenderer/thumbnail")),
            SizeProfile::Video,
        ),
        privacy_status,
        item_count: digits(&text::flatten(header.get("numVideosText"))).unwrap_or(0),
    })
}

/// Normalizes one page of playlist members, in playlist order. Continuation
/// markers and filler nodes are skipped; the page token itself is the
/// pagination extractor's job.
pub fn items(root: &Value, playlist_id: &str) -> Vec<PlaylistItem> {
    let Some(contents) = page_contents(root) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    // Slots count every member renderer, dropped ones included, so a drop
    // does not shift the fallback position of the members after it.
    let mut slot: u64 = 0;
    for node in contents {
        let Some(renderer) = node.get("playlistVideoRenderer") else {
            if node.get("continuationItemRenderer").is_none() {
                tracing::debug!("skipping playlist node with no video renderer");
            }
            continue;
        };
        match item(renderer, playlist_id, slot) {
            Some(item) => out.push(item),
            None => tracing::debug!("dropping playlist member missing its video id"),
        }
        slot += 1;
    }
    out
}

fn page_contents(root: &Value) -> Option<&Vec<Value>> {
    find_key(root, "playlistVideoListRenderer")
        .and_then(|renderer| renderer.get("contents"))
        .or_else(|| {
            find_key(root, "appendContinuationItemsAction")
                .and_then(|action| action.get("continuationItems"))
        })
        .and_then(Value::as_array)
}

fn item(renderer: &Value, playlist_id: &str, fallback_position: u64) -> Option<PlaylistItem> {
    let video_id = renderer.get("videoId").and_then(Value::as_str)?.to_owned();
    // The payload's index label is one-based; the model's position is
    // zero-based.
    let position = u64_at(renderer, "/index/simpleText")
        .map(|index| index.saturating_sub(1))
        .unwrap_or(fallback_position);

    Some(PlaylistItem {
        kind: "youtube#playlistItem".to_owned(),
        // The internal API exposes no per-item identity, so membership keys
        // the synthesized id.
        id: format!("{playlist_id}:{video_id}"),
        playlist_id: playlist_id.to_owned(),
        position,
        title: text::flatten(renderer.get("title")),
        channel_id: str_at(
            renderer,
            "/shortBylineText/runs/0/navigationEndpoint/browseEndpoint/browseId",
        )
        .map(str::to_owned),
        channel_title: nonempty(text::flatten(renderer.get("shortBylineText"))),
        thumbnails: thumbs::select(
            thumbs::candidates(renderer.get("thumbnail")),
            SizeProfile::Video,
        ),
        resource_id: ResourceId::Video(video_id.clone()),
        content_details: PlaylistItemContentDetails { video_id },
    })
}
