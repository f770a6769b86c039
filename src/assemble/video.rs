use serde_json::Value;

use super::parse_timestamp;
use crate::extract::{bool_at, duration, str_at, text, u64_at};
use crate::model::{
    AudioStream, ContentDetails, Definition, Dimension, FileDetails, LiveBroadcastContent,
    LiveStreamingDetails, Player, PrivacyStatus, Projection, RegionRestriction, Status, Video,
    VideoStream,
};

/// Assembles a `Video` from a single-video payload. `None` means the
/// resource does not exist (or the payload carries no usable identity) —
/// distinct from a transport or decode failure.
pub fn video(root: &Value) -> Option<Video> {
    if str_at(root, "/playabilityStatus/status") == Some("ERROR") {
        return None;
    }
    let details = root.get("videoDetails")?;
    let id = details.get("videoId").and_then(Value::as_str)?.to_owned();
    let micro = root.pointer("/microformat/playerMicroformatRenderer");

    let view_count = u64_at(details, "/viewCount").unwrap_or(0);
    let is_live_now = micro
        .and_then(|m| bool_at(m, "/liveBroadcastDetails/isLiveNow"))
        .unwrap_or(false);
    let is_upcoming = bool_at(details, "/isUpcoming").unwrap_or(false);
    let live_broadcast_content = if is_live_now {
        LiveBroadcastContent::Live
    } else if is_upcoming {
        LiveBroadcastContent::Upcoming
    } else {
        LiveBroadcastContent::None
    };

    let tags = details
        .get("keywords")
        .and_then(Value::as_array)
        .map(|keywords| {
            keywords
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    Some(Video {
        kind: "youtube#video".to_owned(),
        id,
        published_at: micro
            .and_then(|m| str_at(m, "/publishDate"))
            .and_then(parse_timestamp),
        channel_id: str_at(details, "/channelId").unwrap_or_default().to_owned(),
        channel_title: str_at(details, "/author").unwrap_or_default().to_owned(),
        title: text::flatten(details.get("title")),
        description: scrub(text::flatten(details.get("shortDescription"))),
        tags,
        category: micro
            .and_then(|m| str_at(m, "/category"))
            .map(str::to_owned),
        live_broadcast_content,
        content_details: content_details(details, micro, root.get("streamingData")),
        status: status(root, micro),
        view_count,
        player: micro.and_then(player),
        file_details: root.get("streamingData").map(file_details),
        live_streaming_details: micro
            .and_then(|m| m.get("liveBroadcastDetails"))
            .map(|broadcast| live_details(broadcast, is_upcoming, is_live_now, view_count)),
    })
}

/// The domain model excludes angle brackets from descriptions.
fn scrub(text: String) -> String {
    text.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

fn content_details(
    details: &Value,
    micro: Option<&Value>,
    streaming: Option<&Value>,
) -> ContentDetails {
    let formats: Vec<&Value> = streaming.map(all_formats).unwrap_or_default();
    let dimension = if formats.iter().any(|f| f.get("stereoLayout").is_some()) {
        Dimension::ThreeD
    } else {
        Dimension::TwoD
    };
    let definition = if formats
        .iter()
        .any(|f| u64_at(f, "/height").is_some_and(|h| h >= 720))
    {
        Definition::Hd
    } else {
        Definition::Sd
    };
    let projection = if formats
        .iter()
        .any(|f| str_at(f, "/projectionType") == Some("MESH"))
    {
        Projection::Mesh
    } else {
        Projection::Rectangular
    };

    let region_restriction = micro
        .and_then(|m| m.get("availableCountries"))
        .and_then(Value::as_array)
        .map(|countries| {
            RegionRestriction::Allowed(
                countries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect(),
            )
        });

    ContentDetails {
        duration: duration::from_seconds(u64_at(details, "/lengthSeconds").unwrap_or(0)),
        dimension,
        definition,
        region_restriction,
        age_restricted: micro
            .and_then(|m| bool_at(m, "/isFamilySafe"))
            .is_some_and(|safe| !safe),
        projection,
    }
}

fn status(root: &Value, micro: Option<&Value>) -> Status {
    let upload_status = match str_at(root, "/playabilityStatus/status") {
        Some("OK") | None => "processed".to_owned(),
        Some(other) => other.to_ascii_lowercase(),
    };
    let privacy_status = if micro
        .and_then(|m| bool_at(m, "/isUnlisted"))
        .unwrap_or(false)
    {
        PrivacyStatus::Unlisted
    } else {
        PrivacyStatus::Public
    };
    Status {
        upload_status,
        privacy_status,
        embeddable: bool_at(root, "/playabilityStatus/playableInEmbed").unwrap_or(false),
    }
}

fn player(micro: &Value) -> Option<Player> {
    let url = str_at(micro, "/embed/iframeUrl")?;
    let width = u64_at(micro, "/embed/width").unwrap_or(640);
    let height = u64_at(micro, "/embed/height").unwrap_or(360);
    Some(Player {
        embed_html: format!(
            r#"<iframe width="{width}" height="{height}" src="{url}" frameborder="0" allowfullscreen></iframe>"#
        ),
    })
}

fn all_formats(streaming: &Value) -> Vec<&Value> {
    let muxed = streaming.get("formats").and_then(Value::as_array);
    let adaptive = streaming.get("adaptiveFormats").and_then(Value::as_array);
    muxed
        .into_iter()
        .flatten()
        .chain(adaptive.into_iter().flatten())
        .collect()
}

fn file_details(streaming: &Value) -> FileDetails {
    let mut video_streams = Vec::new();
    let mut audio_streams = Vec::new();
    let mut duration_ms = 0;

    for format in all_formats(streaming) {
        if duration_ms == 0 {
            duration_ms = u64_at(format, "/approxDurationMs").unwrap_or(0);
        }
        let bitrate_bps = u64_at(format, "/bitrate").unwrap_or(0);
        let codec = codec_of(str_at(format, "/mimeType").unwrap_or(""));
        let url = str_at(format, "/url").map(str::to_owned);

        if let (Some(width), Some(height)) = (u64_at(format, "/width"), u64_at(format, "/height"))
        {
            video_streams.push(VideoStream {
                width_pixels: width as u32,
                height_pixels: height as u32,
                frame_rate_fps: format.get("fps").and_then(Value::as_f64).unwrap_or(0.0),
                codec,
                bitrate_bps,
                url,
            });
        } else if format.get("audioSampleRate").is_some() {
            audio_streams.push(AudioStream {
                channel_count: u64_at(format, "/audioChannels").unwrap_or(2) as u32,
                sample_rate_hz: u64_at(format, "/audioSampleRate").unwrap_or(0) as u32,
                codec,
                bitrate_bps,
                url,
            });
        }
    }

    // Combined bitrate is one video rendition plus one audio rendition, not
    // the sum over every alternate encoding.
    let best_video = video_streams.iter().map(|s| s.bitrate_bps).max().unwrap_or(0);
    let best_audio = audio_streams.iter().map(|s| s.bitrate_bps).max().unwrap_or(0);

    FileDetails {
        video_streams,
        audio_streams,
        duration_ms,
        bitrate_bps: best_video + best_audio,
        dash_manifest_url: str_at(streaming, "/dashManifestUrl").map(str::to_owned),
        hls_manifest_url: str_at(streaming, "/hlsManifestUrl").map(str::to_owned),
    }
}

fn codec_of(mime: &str) -> String {
    mime.split("codecs=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap_or("")
        .to_owned()
}

fn live_details(
    broadcast: &Value,
    is_upcoming: bool,
    is_live_now: bool,
    view_count: u64,
) -> LiveStreamingDetails {
    let start = str_at(broadcast, "/startTimestamp").and_then(parse_timestamp);
    let end = str_at(broadcast, "/endTimestamp").and_then(parse_timestamp);
    if is_upcoming {
        LiveStreamingDetails {
            scheduled_start_time: start,
            scheduled_end_time: end,
            ..LiveStreamingDetails::default()
        }
    } else {
        LiveStreamingDetails {
            actual_start_time: start,
            actual_end_time: end,
            // While the broadcast is live the payload's view counter reports
            // current watchers rather than lifetime views.
            concurrent_viewers: is_live_now.then_some(view_count),
            ..LiveStreamingDetails::default()
        }
    }
}
