use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{Value, json};

use crate::model::{LiveBroadcastContent, ResourceId};
use crate::{Client, Error, Fetch, Request, SearchKind, SearchOptions};

/// Scripted transport: hands out canned payloads in order and records every
/// request it was asked for.
struct StubTransport {
    responses: Mutex<VecDeque<Vec<u8>>>,
    log: Mutex<Vec<Request>>,
}

impl StubTransport {
    fn new(payloads: Vec<Value>) -> Self {
        Self::raw(
            payloads
                .into_iter()
                .map(|payload| serde_json::to_vec(&payload).unwrap())
                .collect(),
        )
    }

    fn raw(bodies: Vec<Vec<u8>>) -> Self {
        Self {
            responses: Mutex::new(bodies.into()),
            log: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<Request> {
        self.log.lock().unwrap().clone()
    }
}

impl Fetch for StubTransport {
    async fn fetch(&self, request: Request) -> anyhow::Result<Vec<u8>> {
        self.log.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("stub transport ran out of payloads"))
    }
}

fn client_with(payloads: Vec<Value>) -> Client<StubTransport> {
    Client::with_transport(StubTransport::new(payloads))
}

fn player_payload() -> Value {
    json!({
        "playabilityStatus": {"status": "OK", "playableInEmbed": true},
        "videoDetails": {
            "videoId": "abc123",
            "title": {"runs": [{"text": "Hello "}, {"text": "World"}]},
            "shortDescription": "first line",
            "channelId": "UCowner",
            "author": "Some Channel",
            "viewCount": "1024",
            "lengthSeconds": "3723",
            "keywords": ["one", "two"]
        },
        "microformat": {"playerMicroformatRenderer": {
            "publishDate": "2024-03-01T12:30:00-08:00",
            "category": "Education",
            "isFamilySafe": true,
            "embed": {"iframeUrl": "https://www.youtube.com/embed/abc123", "width": 1280, "height": 720}
        }}
    })
}

fn video_node(id: &str) -> Value {
    json!({"videoRenderer": {
        "videoId": id,
        "title": {"runs": [{"text": "Video "}, {"text": id}]},
        "ownerText": {"runs": [{
            "text": "Some Channel",
            "navigationEndpoint": {"browseEndpoint": {"browseId": "UCowner"}}
        }]}
    }})
}

fn search_payload(nodes: Vec<Value>, token: Option<&str>) -> Value {
    let mut sections = vec![json!({"itemSectionRenderer": {"contents": nodes}})];
    if let Some(token) = token {
        sections.push(json!({"continuationItemRenderer": {"continuationEndpoint": {
            "continuationCommand": {"token": token}
        }}}));
    }
    json!({
        "estimatedResults": "1234",
        "contents": {"twoColumnSearchResultsRenderer": {"primaryContents": {
            "sectionListRenderer": {"contents": sections}
        }}}
    })
}

fn playlist_member(video_id: &str, index: u64) -> Value {
    json!({"playlistVideoRenderer": {
        "videoId": video_id,
        "index": {"simpleText": index.to_string()},
        "title": {"runs": [{"text": format!("Video {video_id}")}]}
    }})
}

fn playlist_payload(members: Vec<Value>, token: Option<&str>) -> Value {
    let mut contents = members;
    if let Some(token) = token {
        contents.push(json!({"continuationItemRenderer": {"continuationEndpoint": {
            "continuationCommand": {"token": token}
        }}}));
    }
    json!({
        "header": {"playlistHeaderRenderer": {
            "playlistId": "PL123",
            "title": {"simpleText": "Mix"},
            "ownerText": {"runs": [{"text": "Some Channel"}]},
            "ownerEndpoint": {"browseEndpoint": {"browseId": "UCowner"}},
            "privacy": "PUBLIC",
            "numVideosText": {"runs": [{"text": "3 videos"}]}
        }},
        "contents": {"playlistVideoListRenderer": {"contents": contents}}
    })
}

fn continuation_payload(members: Vec<Value>) -> Value {
    json!({"onResponseReceivedActions": [{
        "appendContinuationItemsAction": {"continuationItems": members}
    }]})
}

#[tokio::test]
async fn video_lookup_flattens_title_runs_and_omits_live_block() {
    let client = client_with(vec![player_payload()]);
    let video = client.video("abc123").await.unwrap().unwrap();

    assert_eq!(video.id, "abc123");
    assert_eq!(video.title, "Hello World");
    assert_eq!(video.live_streaming_details, None);
    assert_eq!(video.live_broadcast_content, LiveBroadcastContent::None);
    assert_eq!(video.channel_title, "Some Channel");
    assert_eq!(video.view_count, 1024);
    assert_eq!(video.content_details.duration.hours, 1);
    assert!(video.published_at.is_some());
    assert!(video.player.unwrap().embed_html.contains("embed/abc123"));
}

#[tokio::test]
async fn deleted_video_is_an_empty_result_not_an_error() {
    let payload = json!({"playabilityStatus": {"status": "ERROR", "reason": "Video unavailable"}});
    let client = client_with(vec![payload]);
    assert!(client.video("gone").await.unwrap().is_none());
}

#[tokio::test]
async fn undecodable_payload_surfaces_as_decode_failure() {
    let client = Client::with_transport(StubTransport::raw(vec![b"<html>nope</html>".to_vec()]));
    match client.video("abc123").await {
        Err(Error::Decode(_)) => {}
        other => panic!("expected decode failure, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_stays_distinct_from_empty_result() {
    let client = Client::with_transport(StubTransport::raw(Vec::new()));
    match client.video("abc123").await {
        Err(Error::Transport(_)) => {}
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn mixed_search_page_keeps_valid_items_in_relative_order() {
    let payload = search_payload(
        vec![
            video_node("vid1"),
            json!({"didYouMeanRenderer": {"correctedQuery": {"runs": [{"text": "x"}]}}}),
            json!({"playlistRenderer": {"playlistId": "PL9", "title": {"simpleText": "A playlist"}}}),
        ],
        Some("CAUQAA"),
    );
    let client = client_with(vec![payload]);
    let page = client.search("hello", SearchKind::Video).await.unwrap().unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, ResourceId::Video("vid1".into()));
    assert_eq!(page.items[0].id.kind(), "youtube#video");
    assert_eq!(page.items[1].id, ResourceId::Playlist("PL9".into()));
    assert_eq!(page.items[1].id.kind(), "youtube#playlist");
    assert_eq!(page.page_info.total_results, 1234);
}

#[tokio::test]
async fn continuation_token_is_passed_back_opaquely() {
    let first = search_payload(vec![video_node("vid1")], Some("CAUQAA"));
    let second = search_payload(vec![video_node("vid2")], None);
    let transport = StubTransport::new(vec![first, second]);
    let client = Client::with_transport(transport);

    let page = client.search("hello", SearchKind::Video).await.unwrap().unwrap();
    let token = page.next_page_token.unwrap();
    assert_eq!(token, "CAUQAA");

    let next = client
        .search_with(SearchOptions {
            page_token: Some(token.clone()),
            ..SearchOptions::default()
        })
        .await
        .unwrap();
    assert_eq!(next.items[0].id, ResourceId::Video("vid2".into()));
    assert!(next.next_page_token.is_none());

    let requests = client_requests(&client);
    assert_eq!(
        requests[1],
        Request::Search {
            query: None,
            kind: None,
            page_token: Some("CAUQAA".into()),
        }
    );
}

#[tokio::test]
async fn normalizing_the_same_payload_twice_is_idempotent() {
    let client = client_with(vec![player_payload(), player_payload()]);
    let first = client.video("abc123").await.unwrap();
    let second = client.video("abc123").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn playlist_items_follow_continuations_in_order() {
    let lookup = playlist_payload(vec![], None);
    let page_one = playlist_payload(
        vec![playlist_member("aaa", 1), playlist_member("bbb", 2)],
        Some("PAGE2"),
    );
    let page_two = continuation_payload(vec![playlist_member("ccc", 3)]);
    let client = client_with(vec![lookup, page_one, page_two]);

    let playlist = client.playlist("PL123").await.unwrap().unwrap();
    assert_eq!(playlist.title, "Mix");
    assert_eq!(playlist.item_count, 3);

    let items = playlist.items(&client).await.unwrap();
    assert_eq!(items.len(), 3);
    let positions: Vec<u64> = items.iter().map(|item| item.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
    for item in &items {
        assert_eq!(item.resource_id.id(), item.content_details.video_id);
        assert_eq!(item.resource_id.kind(), "youtube#video");
        assert_eq!(item.playlist_id, "PL123");
    }

    let requests = client_requests(&client);
    assert_eq!(
        requests[2],
        Request::PlaylistItems {
            playlist_id: "PL123".into(),
            page_token: Some("PAGE2".into()),
        }
    );
}

#[tokio::test]
async fn missing_playlist_is_an_empty_result() {
    let payload = json!({"alerts": [{"alertRenderer": {"type": "ERROR", "text": {"simpleText": "not found"}}}]});
    let client = client_with(vec![payload]);
    assert!(client.playlist("PLgone").await.unwrap().is_none());
}

fn client_requests(client: &Client<StubTransport>) -> Vec<Request> {
    client.transport().requests()
}
