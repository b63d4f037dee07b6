//! Server functions backing the site's pages.
//!
//! Each page route composes its props here from the content source held in
//! [`AppState`](crate::types::AppState). The composers are generic over
//! [`ContentSource`](cms::client::ContentSource) so they can be exercised
//! against a fake client; the server functions bind them to the live one.

use leptos::prelude::{ServerFnError, server};

use cms::paths::ArticleLink;

use crate::types::{ArticleProps, LayoutProps};

#[cfg(feature = "ssr")]
use cms::CmsError;
#[cfg(feature = "ssr")]
use cms::client::ContentSource;
#[cfg(feature = "ssr")]
use cms::paths::{article_index, article_key};
#[cfg(feature = "ssr")]
use cms::types::Version;
#[cfg(feature = "ssr")]
use leptos::server_fn::error::NoCustomError;

/// Assemble the props for one article page.
///
/// The article item, footer block, and header block are independent fetches
/// and run concurrently. A missing article item fails the whole composition;
/// absent shared blocks pass through as `None`.
#[cfg(feature = "ssr")]
pub async fn compose_article<C: ContentSource>(
    content: &C,
    slug: &str,
    preview: bool,
) -> Result<ArticleProps, CmsError> {
    let version = Version::from_preview(preview);
    let key = article_key(slug);

    let (data, footer, header) = tokio::try_join!(
        content.article_item(&key, version),
        content.footer_item(version),
        content.header_item(version),
    )?;

    Ok(ArticleProps {
        data,
        footer,
        header,
        preview,
    })
}

/// Fetch just the shared layout blocks, for pages without a content item.
#[cfg(feature = "ssr")]
pub async fn compose_layout<C: ContentSource>(
    content: &C,
    preview: bool,
) -> Result<LayoutProps, CmsError> {
    let version = Version::from_preview(preview);

    let (footer, header) = tokio::try_join!(
        content.footer_item(version),
        content.header_item(version),
    )?;

    Ok(LayoutProps { footer, header })
}

/// Fetches the props for the article page identified by `slug`.
///
/// A slug with no matching content item yields a request error, which the
/// article page renders as a 404. Anything else wrong with the content
/// source is a server error.
#[server(endpoint = "/article")]
pub async fn select_article(
    slug: String,
    #[server(default)] preview: bool,
) -> Result<ArticleProps, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { cms, .. } = expect_context::<AppState>();

    compose_article(cms.as_ref(), &slug, preview)
        .await
        .map_err(|err| match err {
            CmsError::NotFound { slug } => {
                ServerFnError::Request(format!("no article item for slug '{slug}'"))
            }
            other => {
                tracing::error!(error = %other, "failed to compose article props");
                ServerFnError::<NoCustomError>::ServerError(format!(
                    "Content source error: {other}"
                ))
            }
        })
}

/// Fetches the shared header/footer blocks for chrome-only pages.
#[server(endpoint = "/layout")]
pub async fn select_layout(
    #[server(default)] preview: bool,
) -> Result<LayoutProps, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { cms, .. } = expect_context::<AppState>();

    compose_layout(cms.as_ref(), preview).await.map_err(|err| {
        tracing::error!(error = %err, "failed to compose layout props");
        ServerFnError::<NoCustomError>::ServerError(format!("Content source error: {err}"))
    })
}

/// Fetches the article index derived from the CMS link listing.
#[server(endpoint = "/articles")]
pub async fn select_article_index() -> Result<Vec<ArticleLink>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { cms, .. } = expect_context::<AppState>();

    let links = cms.links().await.map_err(|err| {
        tracing::error!(error = %err, "failed to list content links");
        ServerFnError::<NoCustomError>::ServerError(format!("Content source error: {err}"))
    })?;

    Ok(article_index(&links))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use cms::paths::ARTICLES_DIRECTORY_SLUG;
    use cms::types::{
        ArticleContent, ArticleItem, FooterContent, FooterItem, HeaderContent, HeaderItem,
        LinkRecord,
    };
    use std::sync::Mutex;

    /// In-memory stand-in for the CMS, recording each article request.
    #[derive(Default)]
    struct FakeContentSource {
        article: Option<ArticleItem>,
        footer: Option<FooterItem>,
        header: Option<HeaderItem>,
        links: Vec<LinkRecord>,
        article_requests: Mutex<Vec<(String, Version)>>,
    }

    impl ContentSource for FakeContentSource {
        async fn links(&self) -> Result<Vec<LinkRecord>, CmsError> {
            Ok(self.links.clone())
        }

        async fn article_item(
            &self,
            slug: &str,
            version: Version,
        ) -> Result<ArticleItem, CmsError> {
            self.article_requests
                .lock()
                .unwrap()
                .push((slug.to_owned(), version));
            self.article.clone().ok_or_else(|| CmsError::NotFound {
                slug: slug.to_owned(),
            })
        }

        async fn footer_item(&self, _version: Version) -> Result<Option<FooterItem>, CmsError> {
            Ok(self.footer.clone())
        }

        async fn header_item(&self, _version: Version) -> Result<Option<HeaderItem>, CmsError> {
            Ok(self.header.clone())
        }
    }

    fn published_article() -> ArticleItem {
        ArticleItem {
            content: ArticleContent {
                title: "Data platform consulting".to_owned(),
                description: "Case notes from a platform rebuild.".to_owned(),
                post_title: "Rebuilding a data platform in six weeks".to_owned(),
                body: vec!["We started with the ingestion layer.".to_owned()],
            },
        }
    }

    #[tokio::test]
    async fn composes_article_props_with_shared_blocks() {
        let fake = FakeContentSource {
            article: Some(published_article()),
            footer: Some(FooterItem {
                content: Some(FooterContent::default()),
            }),
            header: Some(HeaderItem {
                content: Some(HeaderContent::default()),
            }),
            ..Default::default()
        };

        let props = compose_article(&fake, "rebuild", false).await.unwrap();
        assert_eq!(props.data, published_article());
        assert!(props.footer.is_some());
        assert!(props.header.is_some());
        assert!(!props.preview);
    }

    #[tokio::test]
    async fn missing_article_fails_the_composition() {
        let fake = FakeContentSource {
            footer: Some(FooterItem::default()),
            header: Some(HeaderItem::default()),
            ..Default::default()
        };

        let result = compose_article(&fake, "ghost", false).await;
        assert_matches!(result, Err(CmsError::NotFound { slug }) if slug == "articles/ghost");
    }

    #[tokio::test]
    async fn absent_shared_blocks_become_none_not_errors() {
        let fake = FakeContentSource {
            article: Some(published_article()),
            ..Default::default()
        };

        let props = compose_article(&fake, "rebuild", false).await.unwrap();
        assert!(props.footer.is_none());
        assert!(props.header.is_none());
    }

    #[tokio::test]
    async fn article_fetch_key_carries_the_directory_prefix() {
        let fake = FakeContentSource {
            article: Some(published_article()),
            ..Default::default()
        };

        let _ = compose_article(&fake, "rebuild", false).await.unwrap();

        let requests = fake.article_requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].0,
            format!("{ARTICLES_DIRECTORY_SLUG}rebuild")
        );
        assert_eq!(requests[0].1, Version::Published);
    }

    #[tokio::test]
    async fn preview_requests_draft_content() {
        let fake = FakeContentSource {
            article: Some(published_article()),
            ..Default::default()
        };

        let props = compose_article(&fake, "rebuild", true).await.unwrap();
        assert!(props.preview);

        let requests = fake.article_requests.lock().unwrap();
        assert_eq!(requests[0].1, Version::Draft);
    }

    #[tokio::test]
    async fn layout_composition_never_requires_shared_blocks() {
        let fake = FakeContentSource::default();
        let props = compose_layout(&fake, false).await.unwrap();
        assert!(props.footer.is_none());
        assert!(props.header.is_none());
    }

    #[test]
    fn server_fn_signatures_stay_stable() {
        let _: fn(String, bool) -> _ = select_article;
        let _: fn(bool) -> _ = select_layout;
        let _: fn() -> _ = select_article_index;
    }
}
