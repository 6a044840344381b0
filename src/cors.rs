//! Cross-origin policy applied to every route.
//! Used by: server.
//!
//! Any origin, method and header is allowed, with credentials. A literal `*`
//! is invalid alongside `Access-Control-Allow-Credentials: true`, so each
//! allow header mirrors what the request asked for instead.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub fn permissive_with_credentials() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
