//! HTTP transport for the CMS GraphQL endpoint.
//!
//! All operations go through [`ContentSource`], so page composition code can
//! be handed a test double instead of a live client. [`GraphqlClient`] is the
//! production implementation; it authenticates with the CMS token, selects
//! the draft or published revision per request, and retries transient
//! transport failures with bounded backoff before giving up.

use std::env;
use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shared_utils::{RetryConfig, retry_async};
use tracing::debug;

use crate::CmsError;
use crate::types::{ArticleItem, FooterItem, HeaderItem, LinkRecord, Version};
use crate::wire::{self, ArticleData, FooterData, HeaderData, LinksData};

const LINKS_QUERY: &str = "{ Links { items { path name isFolder } } }";
const ARTICLE_ITEM_QUERY: &str =
    "query ($id: ID!) { ArticleItem(id: $id) { content { title description postTitle body } } }";
const FOOTER_ITEM_QUERY: &str =
    "{ FooterItem { content { links { _uid label link } copyright } } }";
const HEADER_ITEM_QUERY: &str = "{ HeaderItem { content { navigation { _uid label link subItems { _uid label link } } bookACallLinkText } } }";

/// The fetch operations the site consumes from the CMS.
///
/// Implementations must treat an unpublished shared block as `Ok(None)` and a
/// missing article item as [`CmsError::NotFound`].
pub trait ContentSource: Send + Sync {
    fn links(&self) -> impl Future<Output = Result<Vec<LinkRecord>, CmsError>> + Send;

    fn article_item(
        &self,
        slug: &str,
        version: Version,
    ) -> impl Future<Output = Result<ArticleItem, CmsError>> + Send;

    fn footer_item(
        &self,
        version: Version,
    ) -> impl Future<Output = Result<Option<FooterItem>, CmsError>> + Send;

    fn header_item(
        &self,
        version: Version,
    ) -> impl Future<Output = Result<Option<HeaderItem>, CmsError>> + Send;
}

/// Connection settings for the CMS endpoint.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    pub endpoint: String,
    pub token: String,
    pub retry: RetryConfig,
}

impl CmsConfig {
    /// Read the endpoint and token from the environment, falling back to a
    /// local development endpoint and an empty token.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("CMS_GRAPHQL_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/graphql".to_owned()),
            token: env::var("CMS_API_TOKEN").unwrap_or_default(),
            retry: RetryConfig::default(),
        }
    }
}

/// Production [`ContentSource`] speaking GraphQL over HTTP.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    retry: RetryConfig,
}

impl GraphqlClient {
    pub fn new(config: CmsConfig) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|err| CmsError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
            token: config.token,
            retry: config.retry,
        })
    }

    pub fn from_env() -> Result<Self, CmsError> {
        Self::new(CmsConfig::from_env())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        context: &str,
        query: &'static str,
        variables: Value,
        version: Version,
    ) -> Result<T, CmsError> {
        let body = retry_async(context, self.retry, || {
            let payload = request_body(query, &variables);
            async move {
                let response = self
                    .http
                    .post(&self.endpoint)
                    .header("Token", &self.token)
                    .header("Version", version.as_str())
                    .json(&payload)
                    .send()
                    .await
                    .map_err(|err| CmsError::Transport(err.to_string()))?
                    .error_for_status()
                    .map_err(|err| CmsError::Transport(err.to_string()))?;

                response
                    .text()
                    .await
                    .map_err(|err| CmsError::Transport(err.to_string()))
            }
        })
        .await?;

        debug!(context, version = version.as_str(), "content source responded");
        wire::decode(&body)
    }
}

fn request_body(query: &str, variables: &Value) -> Value {
    if variables.is_null() {
        json!({ "query": query })
    } else {
        json!({ "query": query, "variables": variables })
    }
}

impl ContentSource for GraphqlClient {
    async fn links(&self) -> Result<Vec<LinkRecord>, CmsError> {
        let data: LinksData = self
            .execute("links", LINKS_QUERY, Value::Null, Version::Published)
            .await?;
        Ok(data.links.items)
    }

    async fn article_item(&self, slug: &str, version: Version) -> Result<ArticleItem, CmsError> {
        let data: ArticleData = self
            .execute(
                "article_item",
                ARTICLE_ITEM_QUERY,
                json!({ "id": slug }),
                version,
            )
            .await?;

        data.article_item.ok_or_else(|| CmsError::NotFound {
            slug: slug.to_owned(),
        })
    }

    async fn footer_item(&self, version: Version) -> Result<Option<FooterItem>, CmsError> {
        let data: FooterData = self
            .execute("footer_item", FOOTER_ITEM_QUERY, Value::Null, version)
            .await?;
        Ok(data.footer_item)
    }

    async fn header_item(&self, version: Version) -> Result<Option<HeaderItem>, CmsError> {
        let data: HeaderData = self
            .execute("header_item", HEADER_ITEM_QUERY, Value::Null, version)
            .await?;
        Ok(data.header_item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_cover_local_development() {
        // Save and clear to exercise the fallback values.
        let old_url = env::var("CMS_GRAPHQL_URL").ok();
        let old_token = env::var("CMS_API_TOKEN").ok();
        unsafe {
            env::remove_var("CMS_GRAPHQL_URL");
            env::remove_var("CMS_API_TOKEN");
        }

        let config = CmsConfig::from_env();

        unsafe {
            if let Some(val) = old_url {
                env::set_var("CMS_GRAPHQL_URL", val);
            }
            if let Some(val) = old_token {
                env::set_var("CMS_API_TOKEN", val);
            }
        }

        assert_eq!(config.endpoint, "http://127.0.0.1:8000/graphql");
        assert_eq!(config.token, "");
    }

    #[test]
    fn client_builds_from_config() {
        let client = GraphqlClient::new(CmsConfig {
            endpoint: "https://cms.example.com/graphql".to_owned(),
            token: "secret".to_owned(),
            retry: RetryConfig::default(),
        })
        .unwrap();

        assert_eq!(client.endpoint(), "https://cms.example.com/graphql");
    }

    #[test]
    fn request_body_omits_null_variables() {
        let body = request_body(LINKS_QUERY, &Value::Null);
        assert_eq!(body["query"], LINKS_QUERY);
        assert!(body.get("variables").is_none());

        let body = request_body(ARTICLE_ITEM_QUERY, &json!({"id": "articles/a"}));
        assert_eq!(body["variables"]["id"], "articles/a");
    }

    #[test]
    fn queries_request_the_decoded_fields() {
        assert!(LINKS_QUERY.contains("path"));
        assert!(ARTICLE_ITEM_QUERY.contains("postTitle"));
        assert!(FOOTER_ITEM_QUERY.contains("copyright"));
        assert!(HEADER_ITEM_QUERY.contains("bookACallLinkText"));
    }
}
