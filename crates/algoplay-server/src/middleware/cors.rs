//! CORS policy built from configuration

use crate::config::CorsConfig;
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer; entries that fail to parse are skipped with a warning
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    let methods: Vec<Method> = config
        .methods
        .iter()
        .filter_map(|method| match Method::from_bytes(method.as_bytes()) {
            Ok(method) => Some(method),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS method '{}': {}", method, e);
                None
            }
        })
        .collect();

    let headers: Vec<HeaderName> = config
        .allow_headers
        .iter()
        .filter_map(|name| match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS header '{}': {}", name, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        extract::Request,
        http::{StatusCode, header},
        routing::get,
    };
    use tower::ServiceExt;

    fn app(config: &CorsConfig) -> Router {
        Router::new()
            .route("/api/info", get(|| async { "ok" }))
            .layer(cors_layer(config))
    }

    #[tokio::test]
    async fn test_wildcard_origin() {
        let response = app(&CorsConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/api/info")
                    .header(header::ORIGIN, "https://anywhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_origin_list_rejects_others() {
        let config = CorsConfig {
            origins: vec!["https://visualizer.example".to_string()],
            ..CorsConfig::default()
        };

        let allowed = app(&config)
            .oneshot(
                Request::builder()
                    .uri("/api/info")
                    .header(header::ORIGIN, "https://visualizer.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://visualizer.example"
        );

        let other = app(&config)
            .oneshot(
                Request::builder()
                    .uri("/api/info")
                    .header(header::ORIGIN, "https://elsewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(
            other
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_preflight_lists_methods() {
        let response = app(&CorsConfig::default())
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/info")
                    .header(header::ORIGIN, "https://anywhere.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap();
        assert!(methods.contains("GET"));
        assert!(methods.contains("OPTIONS"));
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let config = CorsConfig {
            origins: vec!["bad\norigin".to_string()],
            methods: vec!["GET".to_string(), "BAD METHOD".to_string()],
            allow_headers: vec!["Content-Type".to_string(), "bad header".to_string()],
        };
        let _layer = cors_layer(&config);
    }
}
