use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use time::OffsetDateTime;

/// One candidate image as delivered by the upstream payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// The five canonical size buckets. A bucket missing from the payload stays
/// `None`; it is never synthesized from another size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveBroadcastContent {
    Live,
    Upcoming,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyStatus {
    #[default]
    Public,
    Unlisted,
    Private,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Dimension {
    #[default]
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Definition {
    Hd,
    #[default]
    Sd,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    #[default]
    Rectangular,
    Mesh,
}

/// Allowed and blocked country lists are mutually exclusive upstream, so the
/// pair is a tagged union rather than two optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionRestriction {
    Allowed(Vec<String>),
    Blocked(Vec<String>),
}

/// Duration broken down from a total-seconds count. `total` always equals
/// `seconds + 60*minutes + 3600*hours + 86400*days`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Duration {
    pub total: u64,
    pub seconds: u64,
    pub minutes: u64,
    pub hours: u64,
    pub days: u64,
}

/// A pointer to exactly one upstream resource, discriminated by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceId {
    Video(String),
    Channel(String),
    Playlist(String),
}

impl ResourceId {
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceId::Video(_) => "youtube#video",
            ResourceId::Channel(_) => "youtube#channel",
            ResourceId::Playlist(_) => "youtube#playlist",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ResourceId::Video(id) | ResourceId::Channel(id) | ResourceId::Playlist(id) => id,
        }
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResourceId", 2)?;
        state.serialize_field("kind", self.kind())?;
        let field = match self {
            ResourceId::Video(_) => "videoId",
            ResourceId::Channel(_) => "channelId",
            ResourceId::Playlist(_) => "playlistId",
        };
        state.serialize_field(field, self.id())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    pub kind: String,
    pub id: String,
    #[serde(rename = "publishedAt", with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    #[serde(rename = "channelId")]
    pub channel_id: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    #[serde(rename = "liveBroadcastContent")]
    pub live_broadcast_content: LiveBroadcastContent,
    #[serde(rename = "contentDetails")]
    pub content_details: ContentDetails,
    pub status: Status,
    #[serde(rename = "viewCount")]
    pub view_count: u64,
    pub player: Option<Player>,
    #[serde(rename = "fileDetails")]
    pub file_details: Option<FileDetails>,
    #[serde(rename = "liveStreamingDetails")]
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentDetails {
    pub duration: Duration,
    pub dimension: Dimension,
    pub definition: Definition,
    #[serde(rename = "regionRestriction")]
    pub region_restriction: Option<RegionRestriction>,
    #[serde(rename = "ageRestricted")]
    pub age_restricted: bool,
    pub projection: Projection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Status {
    #[serde(rename = "uploadStatus")]
    pub upload_status: String,
    #[serde(rename = "privacyStatus")]
    pub privacy_status: PrivacyStatus,
    pub embeddable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    #[serde(rename = "embedHtml")]
    pub embed_html: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileDetails {
    #[serde(rename = "videoStreams")]
    pub video_streams: Vec<VideoStream>,
    #[serde(rename = "audioStreams")]
    pub audio_streams: Vec<AudioStream>,
    #[serde(rename = "durationMs")]
    pub duration_ms: u64,
    #[serde(rename = "bitrateBps")]
    pub bitrate_bps: u64,
    #[serde(rename = "dashManifestUrl")]
    pub dash_manifest_url: Option<String>,
    #[serde(rename = "hlsManifestUrl")]
    pub hls_manifest_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoStream {
    #[serde(rename = "widthPixels")]
    pub width_pixels: u32,
    #[serde(rename = "heightPixels")]
    pub height_pixels: u32,
    #[serde(rename = "frameRateFps")]
    pub frame_rate_fps: f64,
    pub codec: String,
    #[serde(rename = "bitrateBps")]
    pub bitrate_bps: u64,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioStream {
    #[serde(rename = "channelCount")]
    pub channel_count: u32,
    #[serde(rename = "sampleRateHz")]
    pub sample_rate_hz: u32,
    pub codec: String,
    #[serde(rename = "bitrateBps")]
    pub bitrate_bps: u64,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiveStreamingDetails {
    #[serde(rename = "actualStartTime", with = "time::serde::rfc3339::option")]
    pub actual_start_time: Option<OffsetDateTime>,
    #[serde(rename = "actualEndTime", with = "time::serde::rfc3339::option")]
    pub actual_end_time: Option<OffsetDateTime>,
    #[serde(rename = "scheduledStartTime", with = "time::serde::rfc3339::option")]
    pub scheduled_start_time: Option<OffsetDateTime>,
    #[serde(rename = "scheduledEndTime", with = "time::serde::rfc3339::option")]
    pub scheduled_end_time: Option<OffsetDateTime>,
    #[serde(rename = "concurrentViewers")]
    pub concurrent_viewers: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    pub kind: String,
    pub id: String,
    #[serde(rename = "channelId")]
    pub channel_id: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    pub title: String,
    pub description: String,
    pub thumbnails: Thumbnails,
    #[serde(rename = "privacyStatus")]
    pub privacy_status: PrivacyStatus,
    #[serde(rename = "itemCount")]
    pub item_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistItem {
    pub kind: String,
    pub id: String,
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
    pub position: u64,
    pub title: String,
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
    pub thumbnails: Thumbnails,
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
    #[serde(rename = "contentDetails")]
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistItemContentDetails {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// A transient pointer to a video, channel or playlist plus the denormalized
/// display fields the search page already carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    pub thumbnails: Thumbnails,
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
    #[serde(rename = "liveBroadcastContent")]
    pub live_broadcast_content: LiveBroadcastContent,
    /// Length as shown on the result tile; all-zero when the tile shows none
    /// (channels, playlists, live broadcasts).
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    #[serde(rename = "totalResults")]
    pub total_results: u64,
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchListResponse {
    pub kind: String,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
    #[serde(rename = "regionCode")]
    pub region_code: String,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    pub items: Vec<SearchResult>,
}
