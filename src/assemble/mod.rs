//! Domain assemblers: compose the extraction primitives into the public
//! entities. Every function here is a pure mapping from an already-decoded
//! tree; missing optional data is omitted, a missing identity drops the
//! whole item.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

pub mod playlist;
pub mod search;
pub mod video;

/// Upstream timestamps are usually Rfc3339 with an offset, but some payload
/// families still ship a bare `YYYY-MM-DD` date. Unparseable input is
/// omitted, never defaulted.
pub(crate) fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    let date = time::Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()?;
    Some(date.midnight().assume_utc())
}

pub(crate) fn nonempty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
