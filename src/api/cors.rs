//! CORS policy
//!
//! The public site and third-party pages call the API from the browser.

use tower_http::cors::CorsLayer;
use tracing::warn;

/// Cross-origin policy for the public site.
///
/// Any origin, method and header is accepted and credentials are allowed.
/// A literal `*` may not be combined with credentials, so the layer mirrors
/// the request's origin, method and headers back instead.
pub fn build_cors_layer() -> CorsLayer {
    warn!("CORS accepts every origin with credentials; restrict it at the proxy if the API becomes private");
    CorsLayer::very_permissive()
}
