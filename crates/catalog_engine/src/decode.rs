use catalog_core::{Page, Record};
use serde::Deserialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to parse page body: {message}")]
    Malformed { message: String },
}

#[derive(Debug, Deserialize)]
struct ArtworksBody {
    data: Vec<ArtworkWire>,
    pagination: PaginationWire,
}

#[derive(Debug, Deserialize)]
struct PaginationWire {
    total: u64,
}

#[derive(Debug, Deserialize)]
struct ArtworkWire {
    id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    place_of_origin: Option<String>,
    #[serde(default)]
    artist_display: Option<String>,
    #[serde(default)]
    inscriptions: Option<String>,
    #[serde(default)]
    date_start: Option<i32>,
    #[serde(default)]
    date_end: Option<i32>,
}

impl From<ArtworkWire> for Record {
    fn from(wire: ArtworkWire) -> Self {
        Record {
            id: wire.id,
            title: wire.title.unwrap_or_default(),
            place_of_origin: wire.place_of_origin,
            artist_display: wire.artist_display,
            inscriptions: wire.inscriptions,
            date_start: wire.date_start,
            date_end: wire.date_end,
        }
    }
}

/// Decode an `/artworks` listing body into a [`Page`].
///
/// Only `data[].id` and `pagination.total` are required; unknown fields are ignored.
pub fn decode_page(bytes: &[u8]) -> Result<Page, DecodeError> {
    let body: ArtworksBody =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Malformed {
            message: err.to_string(),
        })?;
    let records = body.data.into_iter().map(Record::from).collect();
    Ok(Page::new(records, body.pagination.total))
}
