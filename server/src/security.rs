use axum::{
    body::Body,
    http::{
        Request, Response, StatusCode,
        header::{HeaderName, HeaderValue},
    },
    middleware::Next,
};

/// Adds the site's security headers to every response.
pub async fn security_headers(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        HeaderName::from_static("strict-transport-security"),
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );

    // CSP tuned for a hydrated Leptos page: wasm execution and inline styles
    // stay allowed, everything else is same-origin.
    let csp = [
        "default-src 'self'",
        "script-src 'self' 'wasm-unsafe-eval'",
        "style-src 'self' 'unsafe-inline'",
        "img-src 'self' data: https:",
        "font-src 'self' data:",
        "connect-src 'self'",
        "frame-ancestors 'none'",
        "base-uri 'self'",
        "form-action 'self'",
    ]
    .join("; ");

    headers.insert(
        HeaderName::from_static("content-security-policy"),
        HeaderValue::from_str(&csp)
            .unwrap_or_else(|_| HeaderValue::from_static("default-src 'self'")),
    );

    Ok(response)
}

/// Ensures the environment carries everything a production deployment needs.
pub fn validate_production_env() -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let is_production = std::env::var("RUST_ENV")
        .unwrap_or_else(|_| "development".to_string())
        == "production";

    if is_production {
        for var in ["CMS_GRAPHQL_URL", "LEPTOS_SITE_ADDR"] {
            if std::env::var(var).is_err() {
                errors.push(format!("Missing required environment variable: {var}"));
            }
        }

        match std::env::var("CMS_API_TOKEN") {
            Err(_) => errors.push(
                "Missing required environment variable: CMS_API_TOKEN".to_string(),
            ),
            Ok(token) if token.is_empty() => {
                errors.push("CMS_API_TOKEN must not be empty in production".to_string());
            }
            Ok(_) => {}
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
