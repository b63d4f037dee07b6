use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    middleware::Next,
};

/// Permanently redirects `www.` hosts to the bare canonical domain.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let host = req
        .headers()
        .get("host")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    if let Some(host) = host
        && let Some(bare_host) = host.strip_prefix("www.")
        && let Some(path_query) = req.uri().path_and_query()
    {
        let location = format!("https://{bare_host}{path_query}");
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header("location", location)
            .body(Body::empty())
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR);
    }

    Ok(next.run(req).await)
}
