//! Content structures shared between the server-side fetch layer and the
//! rendered views. All of them deserialize straight from the CMS payloads.

use serde::{Deserialize, Serialize};

/// Which revision of the content to fetch.
///
/// `Draft` backs preview mode; `Published` is what visitors see.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Version {
    #[default]
    Published,
    Draft,
}

impl Version {
    #[must_use]
    pub const fn from_preview(preview: bool) -> Self {
        if preview { Self::Draft } else { Self::Published }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }
}

/// One entry in the CMS link index. The index spans the whole content tree,
/// so records outside the articles directory (and folder records) show up
/// here too, and a record may carry no path at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_folder: bool,
}

/// Route parameter for one pre-renderable article page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleParams {
    pub slug: String,
}

/// A single article document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleItem {
    pub content: ArticleContent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleContent {
    pub title: String,
    pub description: String,
    pub post_title: String,
    #[serde(default)]
    pub body: Vec<String>,
}

/// Shared footer block. `content` is `None` while the block is unpublished;
/// the layout simply omits the footer region in that case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FooterItem {
    #[serde(default)]
    pub content: Option<FooterContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    #[serde(default)]
    pub links: Vec<NavigationLink>,
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Shared header block, same absence semantics as [`FooterItem`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderItem {
    #[serde(default)]
    pub content: Option<HeaderContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderContent {
    #[serde(default)]
    pub navigation: Vec<NavigationItem>,
    #[serde(default)]
    pub book_a_call_link_text: String,
}

/// One primary navigation entry, in CMS order. Items with `sub_items` expand
/// into a submenu; the expansion state lives with the rendering component,
/// not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    #[serde(rename = "_uid")]
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub sub_items: Vec<NavigationLink>,
}

/// A plain labelled link, used for submenu entries and footer links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationLink {
    #[serde(rename = "_uid")]
    pub id: String,
    pub label: String,
    pub link: String,
}
