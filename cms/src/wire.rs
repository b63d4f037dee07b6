//! Wire envelopes for the CMS GraphQL responses.
//!
//! Every response arrives as `{ "data": ..., "errors": [...] }`; the payloads
//! under `data` are keyed by the queried document type. Decoding is kept
//! separate from transport so it can be exercised against fixture payloads.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::CmsError;
use crate::types::{ArticleItem, FooterItem, HeaderItem, LinkRecord};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<QueryError>,
}

#[derive(Debug, Deserialize)]
struct QueryError {
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct LinksData {
    #[serde(rename = "Links")]
    pub links: LinkEntries,
}

#[derive(Debug, Deserialize)]
pub struct LinkEntries {
    pub items: Vec<LinkRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleData {
    #[serde(rename = "ArticleItem", default)]
    pub article_item: Option<ArticleItem>,
}

#[derive(Debug, Deserialize)]
pub struct FooterData {
    #[serde(rename = "FooterItem", default)]
    pub footer_item: Option<FooterItem>,
}

#[derive(Debug, Deserialize)]
pub struct HeaderData {
    #[serde(rename = "HeaderItem", default)]
    pub header_item: Option<HeaderItem>,
}

/// Decode one response body into its typed `data` payload.
///
/// Query-level errors reported by the CMS take precedence over whatever
/// partial data came with them; a response with neither data nor errors is a
/// decoding failure, not an empty result.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, CmsError> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|err| CmsError::Decode(err.to_string()))?;

    if let Some(error) = envelope.errors.first() {
        return Err(CmsError::Response(error.message.clone()));
    }

    envelope
        .data
        .ok_or_else(|| CmsError::Decode("response carried no data".to_owned()))
}
