use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS policy for the configured origin allow-list
///
/// Credentials are allowed, so wildcard methods and headers are not; the
/// request's own method and headers are mirrored back instead.
pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header, StatusCode},
        routing::get,
        Router,
    };
    use axum_test::TestServer;

    fn server() -> TestServer {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://next-pick.vercel.app".to_string(),
        ];
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .layer(cors_layer(&origins).unwrap());
        TestServer::new(app).unwrap()
    }

    #[test]
    fn test_valid_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://next-pick.vercel.app".to_string(),
        ];
        assert!(cors_layer(&origins).is_ok());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let origins = vec!["http://bad\norigin".to_string()];
        assert!(cors_layer(&origins).is_err());
    }

    #[tokio::test]
    async fn test_allowed_origin_gets_cors_headers() {
        let response = server()
            .get("/health")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
            .await;

        response.assert_status(StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:3000"))
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some(&HeaderValue::from_static("true"))
        );
    }

    #[tokio::test]
    async fn test_disallowed_origin_gets_no_allow_origin() {
        let response = server()
            .get("/health")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://evil.example"))
            .await;

        response.assert_status(StatusCode::OK);
        let headers = response.headers();
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
