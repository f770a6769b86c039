use serde::Deserialize;
use serde_json::Value;

use crate::model::{Thumbnail, Thumbnails};

/// Canonical bucket dimensions differ by resource type: video-like resources
/// use the 120x90 ladder, channel avatars the square ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeProfile {
    Video,
    Channel,
}

const VIDEO_SIZES: [(u32, u32); 5] = [
    (120, 90),
    (320, 180),
    (480, 360),
    (640, 480),
    (1280, 720),
];

const CHANNEL_SIZES: [(u32, u32); 3] = [(88, 88), (240, 240), (800, 800)];

impl SizeProfile {
    fn canonical(self) -> &'static [(u32, u32)] {
        match self {
            SizeProfile::Video => &VIDEO_SIZES,
            SizeProfile::Channel => &CHANNEL_SIZES,
        }
    }
}

#[derive(Deserialize)]
struct RawThumb {
    url: String,
    width: u32,
    height: u32,
}

/// Reads the candidate list out of an upstream `{"thumbnails": [...]}` node.
/// Entries missing a url or dimensions are skipped.
pub fn candidates(node: Option<&Value>) -> Vec<Thumbnail> {
    let Some(list) = node.and_then(|n| n.get("thumbnails")).and_then(Value::as_array) else {
        return Vec::new();
    };
    list.iter()
        .filter_map(|raw| serde_json::from_value::<RawThumb>(raw.clone()).ok())
        .map(|raw| Thumbnail {
            url: raw.url,
            width: raw.width,
            height: raw.height,
        })
        .collect()
}

/// Assigns candidates to the canonical buckets. For each bucket an exact
/// match on the canonical dimensions wins; otherwise the candidate closest by
/// absolute width difference, ties broken toward the smaller one. A candidate
/// URL feeds at most one bucket; a bucket whose best candidate is already
/// taken stays unset.
pub fn select(mut candidates: Vec<Thumbnail>, profile: SizeProfile) -> Thumbnails {
    candidates.sort_by(|a, b| a.width.cmp(&b.width).then_with(|| a.url.cmp(&b.url)));

    let mut out = Thumbnails::default();
    let mut used: Vec<String> = Vec::new();

    for (slot, &(width, height)) in profile.canonical().iter().enumerate() {
        let Some(pick) = best_for(&candidates, width, height) else {
            continue;
        };
        if used.iter().any(|url| url == &pick.url) {
            continue;
        }
        used.push(pick.url.clone());
        let thumb = Some(pick.clone());
        match slot {
            0 => out.default = thumb,
            1 => out.medium = thumb,
            2 => out.high = thumb,
            3 => out.standard = thumb,
            _ => out.maxres = thumb,
        }
    }

    out
}

fn best_for(candidates: &[Thumbnail], width: u32, height: u32) -> Option<&Thumbnail> {
    if let Some(exact) = candidates
        .iter()
        .find(|t| t.width == width && t.height == height)
    {
        return Some(exact);
    }
    // Candidates arrive sorted ascending, so keeping the first strictly-better
    // distance lands ties on the smaller size.
    let mut best: Option<&Thumbnail> = None;
    for candidate in candidates {
        let distance = candidate.width.abs_diff(width);
        match best {
            Some(current) if current.width.abs_diff(width) <= distance => {}
            _ => best = Some(candidate),
        }
    }
    best
}
