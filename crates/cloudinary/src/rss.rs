//! RSS listing feed parsing.
//!
//! The host's `.rss` listing has a fixed shape: `<item>` entries whose
//! `<link>` points at the delivery URL and whose `<pubDate>` is RFC
//! 2822. The public id and format are recovered from the link's
//! trailing path segment (text after the last `/`, split on the last
//! `.`), re-prefixed with the folder; the version segment (`v123…`)
//! in the path is ignored.
//!
//! The host answers authorization failures with an error payload
//! disguised as XML — a body without an `<rss` root (or without a
//! single item but carrying an error marker) is a parse failure, which
//! the gallery loader treats as "try the next strategy".

use std::sync::LazyLock;

use chrono::DateTime;
use gradbooth_core::PhotoRecord;
use regex::Regex;

use crate::CloudinaryApiError;

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<item>(.*?)</item>").expect("item pattern is valid"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<link>\s*(.*?)\s*</link>").expect("link pattern is valid"));
static PUB_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<pubDate>\s*(.*?)\s*</pubDate>").expect("pubDate pattern is valid")
});

/// Parse the RSS listing body into photo records.
///
/// Items missing a link or date, or whose link has no parseable
/// trailing segment, are skipped with a warning rather than failing
/// the whole feed.
pub fn parse_rss_listing(body: &str, folder: &str) -> Result<Vec<PhotoRecord>, CloudinaryApiError> {
    if !body.contains("<rss") {
        return Err(CloudinaryApiError::MalformedFeed {
            reason: "response is not an RSS document".into(),
        });
    }
    if body.contains("<error>") || body.contains("<ERR>") {
        return Err(CloudinaryApiError::MalformedFeed {
            reason: "feed carries an error payload".into(),
        });
    }

    let mut records = Vec::new();
    for item in ITEM_RE.captures_iter(body) {
        let item_body = &item[1];

        let Some(link) = LINK_RE.captures(item_body).map(|c| c[1].to_string()) else {
            tracing::warn!("RSS item without <link>, skipping");
            continue;
        };
        let Some(pub_date) = PUB_DATE_RE.captures(item_body).map(|c| c[1].to_string()) else {
            tracing::warn!(%link, "RSS item without <pubDate>, skipping");
            continue;
        };

        let Some((public_id, format)) = split_link(&link, folder) else {
            tracing::warn!(%link, "RSS link has no parseable file segment, skipping");
            continue;
        };

        let created_at = match DateTime::parse_from_rfc2822(&pub_date) {
            Ok(parsed) => parsed.to_utc(),
            Err(error) => {
                tracing::warn!(%error, %pub_date, "unparseable RSS pubDate, skipping");
                continue;
            }
        };

        records.push(PhotoRecord {
            public_id,
            format,
            created_at,
            url: link,
        });
    }

    Ok(records)
}

/// Recover `(public_id, format)` from a delivery link:
/// `…/image/upload/v123/graduacion/abc123.png` →
/// (`graduacion/abc123`, `png`).
fn split_link(link: &str, folder: &str) -> Option<(String, String)> {
    let file_name = link.rsplit('/').next()?;
    let (stem, format) = file_name.rsplit_once('.')?;
    if stem.is_empty() || format.is_empty() {
        return None;
    }
    Some((format!("{folder}/{stem}"), format.to_string()))
}
