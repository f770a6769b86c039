use serde_json::Value;

use crate::assemble;
use crate::extract::paging;
use crate::model::{PageInfo, Playlist, PlaylistItem, SearchListResponse, Video};
use crate::transport::{Fetch, InnerTube, Request, SearchKind};
use crate::Error;

/// Options for a search lookup; a page token from a previous response
/// continues that result set and is passed through opaquely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: Option<String>,
    pub kind: Option<SearchKind>,
    pub page_token: Option<String>,
}

/// The stable surface over the upstream service: every method fetches one or
/// more raw payloads through the transport and normalizes them. The client
/// holds no per-call state, so one instance serves concurrent callers.
pub struct Client<F> {
    fetch: F,
}

impl Client<InnerTube> {
    pub fn new() -> Self {
        Self::with_transport(InnerTube::new())
    }
}

impl Default for Client<InnerTube> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetch> Client<F> {
    pub fn with_transport(fetch: F) -> Self {
        Self { fetch }
    }

    pub fn transport(&self) -> &F {
        &self.fetch
    }

    async fn payload(&self, request: Request) -> Result<Value, Error> {
        let bytes = self.fetch.fetch(request).await.map_err(Error::Transport)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Looks up a single video. `Ok(None)` means the video does not exist,
    /// as opposed to a failure to obtain or decode the payload.
    pub async fn video(&self, id: &str) -> Result<Option<Video>, Error> {
        let root = self.payload(Request::Video { id: id.to_owned() }).await?;
        Ok(assemble::video::video(&root))
    }

    /// Looks up a single playlist. The returned entity is a read-only view;
    /// its members are listed through [`Client::playlist_items`] or
    /// [`Playlist::items`].
    pub async fn playlist(&self, id: &str) -> Result<Option<Playlist>, Error> {
        let root = self
            .payload(Request::Playlist { id: id.to_owned() })
            .await?;
        Ok(assemble::playlist::playlist(&root))
    }

    /// Lists every member of a playlist, following continuations until the
    /// upstream stops handing them out. Output order is playlist order.
    pub async fn playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistItem>, Error> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let root = self
                .payload(Request::PlaylistItems {
                    playlist_id: playlist_id.to_owned(),
                    page_token: page_token.clone(),
                })
                .await?;
            items.extend(assemble::playlist::items(&root, playlist_id));

            let next = paging::extract(&root).next_page_token;
            // A token that stops advancing would loop forever.
            if next.is_empty() || page_token.as_deref() == Some(next.as_str()) {
                break;
            }
            page_token = Some(next);
        }
        Ok(items)
    }

    /// Searches with a kind filter. `Ok(None)` means the payload carried no
    /// results container at all.
    pub async fn search(
        &self,
        query: &str,
        kind: SearchKind,
    ) -> Result<Option<SearchListResponse>, Error> {
        let root = self
            .payload(Request::Search {
                query: Some(query.to_owned()),
                kind: Some(kind),
                page_token: None,
            })
            .await?;
        Ok(assemble::search::page(&root))
    }

    /// Searches with explicit options, the form used for page continuation.
    /// A payload with no results container degrades to an empty page here,
    /// since continuation callers already hold a concrete result set.
    pub async fn search_with(&self, options: SearchOptions) -> Result<SearchListResponse, Error> {
        let SearchOptions {
            query,
            kind,
            page_token,
        } = options;
        let root = self
            .payload(Request::Search {
                query,
                kind,
                page_token,
            })
            .await?;
        Ok(assemble::search::page(&root).unwrap_or_else(empty_page))
    }
}

fn empty_page() -> SearchListResponse {
    SearchListResponse {
        kind: "youtube#searchListResponse".to_owned(),
        next_page_token: None,
        region_code: String::new(),
        page_info: PageInfo::default(),
        items: Vec::new(),
    }
}

impl Playlist {
    /// Lists this playlist's members through the given client. Triggers a
    /// fresh fetch+normalize cycle; the playlist itself is not mutated.
    pub async fn items<F: Fetch>(&self, client: &Client<F>) -> Result<Vec<PlaylistItem>, Error> {
        client.playlist_items(&self.id).await
    }
}
