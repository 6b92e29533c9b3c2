use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

/// Landing page and its assets get a looser policy than the JSON API.
fn is_page_route(path: &str) -> bool {
    path == "/" || path.starts_with("/static/")
}

pub async fn security_headers_middleware(req: Request, next: Next) -> impl IntoResponse {
    let is_page = is_page_route(req.uri().path());

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::X_XSS_PROTECTION,
        header::HeaderValue::from_static("1; mode=block"),
    );

    if is_page {
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            header::HeaderValue::from_static(
                "default-src 'self'; \
                 script-src 'self' 'unsafe-inline' 'unsafe-eval' https:; \
                 style-src 'self' 'unsafe-inline' https:; \
                 img-src 'self' data: https:; \
                 font-src 'self' data: https:; \
                 connect-src 'self' http://localhost:* https:",
            ),
        );
        headers.insert(
            header::X_FRAME_OPTIONS,
            header::HeaderValue::from_static("SAMEORIGIN"),
        );
    } else {
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            header::HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
        );
        headers.insert(
            header::X_FRAME_OPTIONS,
            header::HeaderValue::from_static("DENY"),
        );
    }

    response
}
