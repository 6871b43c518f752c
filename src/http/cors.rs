use crate::cli::Args;
use http::header::{ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

const ANY_ORIGIN: &str = "*";

pub fn layer(args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(&args.allowed_origins))
        .allow_headers([ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}

/// `*` anywhere in the list allows every origin; tower-http rejects it inside a list.
fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.iter().any(|origin| origin.trim() == ANY_ORIGIN) {
        if allowed_origins.len() > 1 {
            tracing::warn!(
                origins = ?allowed_origins,
                "Wildcard CORS origin overrides the other allowed origins."
            );
        }
        return AllowOrigin::any();
    }
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring an invalid CORS origin.");
                None
            }
        })
        .collect::<Vec<_>>();
    AllowOrigin::list(origins)
}
