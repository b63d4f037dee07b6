use cms::types::{ArticleItem, FooterItem, HeaderItem};
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use cms::client::GraphqlClient;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub cms: std::sync::Arc<GraphqlClient>,
    pub leptos_options: std::sync::Arc<LeptosOptions>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

/// Props bundle for one article page: the article itself plus the shared
/// layout blocks fetched alongside it. `footer`/`header` are `None` when the
/// CMS has no published block, which the layout renders as an absent region.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleProps {
    pub data: ArticleItem,
    pub footer: Option<FooterItem>,
    pub header: Option<HeaderItem>,
    pub preview: bool,
}

/// Shared layout blocks for pages that have no content item of their own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutProps {
    pub footer: Option<FooterItem>,
    pub header: Option<HeaderItem>,
}
