//! Pure path resolution for the articles route.
//!
//! The CMS link index covers the whole content tree; only records under the
//! articles directory become article routes. The prefix is defined once here
//! and reused wherever an article's full slug is composed, so the resolver
//! and the fetch layer can never drift apart.

use crate::types::{ArticleParams, LinkRecord};
use serde::{Deserialize, Serialize};

/// Directory prefix identifying CMS entries that belong to the articles route.
pub const ARTICLES_DIRECTORY_SLUG: &str = "articles/";

/// Derive the set of article route parameters from the CMS link index.
///
/// Keeps input order, skips records without a path or with a path outside
/// the articles directory, and never fails: an empty index yields an empty
/// set.
#[must_use]
pub fn article_paths(links: &[LinkRecord]) -> Vec<ArticleParams> {
    links
        .iter()
        .filter_map(|record| {
            let slug = record.path.as_deref()?.strip_prefix(ARTICLES_DIRECTORY_SLUG)?;
            Some(ArticleParams {
                slug: slug.to_owned(),
            })
        })
        .collect()
}

/// The full CMS slug for one article, as used by the fetch layer.
#[must_use]
pub fn article_key(slug: &str) -> String {
    format!("{ARTICLES_DIRECTORY_SLUG}{slug}")
}

/// A display-ready article index entry, for listing pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleLink {
    pub slug: String,
    pub title: String,
}

/// The article index for listing pages: resolved slugs paired with the link
/// name the CMS carries for them. Folder records and the directory root
/// itself are not listable.
#[must_use]
pub fn article_index(links: &[LinkRecord]) -> Vec<ArticleLink> {
    links
        .iter()
        .filter(|record| !record.is_folder)
        .filter_map(|record| {
            let slug = record.path.as_deref()?.strip_prefix(ARTICLES_DIRECTORY_SLUG)?;
            if slug.is_empty() {
                return None;
            }
            Some(ArticleLink {
                slug: slug.to_owned(),
                title: record
                    .name
                    .clone()
                    .unwrap_or_else(|| slug.to_owned()),
            })
        })
        .collect()
}
