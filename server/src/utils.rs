use app::types::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use cms::CmsError;
use cms::client::{ContentSource as _, GraphqlClient};
use cms::paths::article_paths;
use cms::types::LinkRecord;
use core::fmt::Write as _;
use shared_utils::{RetryConfig, retry_async};
use std::env;
use std::time::Duration;
use tracing::{error, info};

fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

fn site_origin() -> String {
    env::var("SITE_ORIGIN").unwrap_or_else(|_| "https://consulting.example.com".to_owned())
}

/// Build the CMS client from the environment and probe the link index.
///
/// The probe retries with backoff, then gives up: a server that cannot list
/// content paths has no routes to serve, so startup must fail loudly instead
/// of producing a partially working site.
pub async fn connect() -> Result<GraphqlClient, CmsError> {
    let client = GraphqlClient::from_env()?;

    let probe = RetryConfig::new(Duration::from_millis(100), Duration::from_secs(5), 5);
    let links = retry_async("content_source_probe", probe, || async {
        client.links().await
    })
    .await?;

    info!(
        link_count = links.len(),
        endpoint = client.endpoint(),
        "Connected to content source"
    );
    Ok(client)
}

pub async fn sitemap_handler(State(state): State<AppState>) -> Response<String> {
    let AppState { cms, .. } = state;

    // A failed listing must not degrade into a partial sitemap.
    let links = match cms.links().await {
        Ok(links) => links,
        Err(err) => {
            error!(?err, "Failed to fetch links for sitemap");
            return build_response(
                "Failed to build sitemap".to_owned(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            );
        }
    };

    match generate_sitemap(&site_origin(), &links) {
        Ok(sitemap) => build_response(sitemap, "application/xml", StatusCode::OK),
        Err(err) => {
            error!(?err, "Failed to write sitemap");
            build_response(
                "Failed to build sitemap".to_owned(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

/// Render the sitemap: the static pages plus one URL per resolved article
/// route.
pub fn generate_sitemap(origin: &str, links: &[LinkRecord]) -> Result<String, core::fmt::Error> {
    let mut sitemap = String::new();
    sitemap.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    sitemap.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    let static_urls = [
        ("/", "daily", "0.9"),
        ("/sitemap.xml", "monthly", "0.5"),
    ];

    for (path, freq, priority) in static_urls {
        sitemap.push_str("<url>\n");
        writeln!(sitemap, "<loc>{origin}{path}</loc>")?;
        writeln!(sitemap, "<changefreq>{freq}</changefreq>")?;
        writeln!(sitemap, "<priority>{priority}</priority>")?;
        sitemap.push_str("</url>\n");
    }

    for params in article_paths(links) {
        sitemap.push_str("<url>\n");
        writeln!(sitemap, "<loc>{origin}/articles/{}</loc>", params.slug)?;
        sitemap.push_str("<changefreq>monthly</changefreq>\n");
        sitemap.push_str("<priority>0.8</priority>\n");
        sitemap.push_str("</url>\n");
    }

    sitemap.push_str("</urlset>");
    Ok(sitemap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(path: &str) -> LinkRecord {
        LinkRecord {
            path: Some(path.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn sitemap_lists_each_resolved_article_route() {
        let links = vec![
            link("articles/platform-rebuild"),
            link("about-us"),
            link("articles/hiring-engineers"),
        ];

        let sitemap = generate_sitemap("https://consulting.example.com", &links).unwrap();

        assert!(sitemap.contains("<loc>https://consulting.example.com/articles/platform-rebuild</loc>"));
        assert!(sitemap.contains("<loc>https://consulting.example.com/articles/hiring-engineers</loc>"));
        assert!(!sitemap.contains("about-us"));
    }

    #[test]
    fn sitemap_without_articles_still_lists_static_pages() {
        let sitemap = generate_sitemap("https://consulting.example.com", &[]).unwrap();
        assert!(sitemap.starts_with("<?xml"));
        assert!(sitemap.contains("<loc>https://consulting.example.com/</loc>"));
        assert!(sitemap.ends_with("</urlset>"));
    }

    #[test]
    fn site_origin_falls_back_to_the_default() {
        let old_origin = env::var("SITE_ORIGIN").ok();
        unsafe {
            env::remove_var("SITE_ORIGIN");
        }

        let origin = site_origin();

        unsafe {
            if let Some(val) = old_origin {
                env::set_var("SITE_ORIGIN", val);
            }
        }

        assert_eq!(origin, "https://consulting.example.com");
    }

    #[test]
    fn test_sitemap_handler_structure() {
        let _: fn(State<AppState>) -> _ = sitemap_handler;
    }

    #[test]
    fn test_connect_structure() {
        let _: fn() -> _ = connect;
    }
}
