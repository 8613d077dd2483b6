use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use flavorscope_core::{application::create_service, domain::common::FlavorscopeConfig};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    application::http::{
        challenge::router::challenge_routes,
        experience::router::experience_routes,
        flavor::router::flavor_routes,
        health::health_routes,
        ingredient::router::ingredient_routes,
        journal::router::journal_routes,
        mood::router::mood_routes,
        server::{app_state::AppState, openapi::ApiDoc},
    },
    args::Args,
};

pub fn state(args: Arc<Args>) -> AppState {
    let config = FlavorscopeConfig::from(args.as_ref().clone());
    let service = create_service(config);

    AppState::new(args, service)
}

/// Every route, without the metrics layer.
pub fn api_routes(state: AppState) -> Router {
    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    Router::new()
        .merge(Scalar::with_url(format!("{root_path}/scalar"), openapi))
        .merge(ingredient_routes(state.clone()))
        .merge(flavor_routes(state.clone()))
        .merge(challenge_routes(state.clone()))
        .merge(journal_routes(state.clone()))
        .merge(experience_routes(state.clone()))
        .merge(mood_routes(state.clone()))
        .merge(health_routes(&root_path))
        .with_state(state)
}

/// CORS for the configured origins. A `*` entry allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin.trim() == "*") {
        debug!("Allowing any origin");
        AllowOrigin::any()
    } else {
        let allowed_origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid allowed origin: {origin}");
                    None
                }
            })
            .collect();

        debug!("Allowed origins: {:?}", allowed_origins);
        AllowOrigin::list(allowed_origins)
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
        let uri: String = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    let cors = cors_layer(&state.args.server.allowed_origins);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let root_path = state.args.server.root_path.clone();

    let router = api_routes(state)
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
    use axum_test::TestServer;

    use super::*;

    fn cors_server(origins: &[&str]) -> TestServer {
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        let router = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(cors_layer(&origins));
        TestServer::new(router).unwrap()
    }

    async fn allowed_origin(server: &TestServer, origin: &'static str) -> Option<String> {
        let response = server
            .get("/")
            .add_header(ORIGIN, HeaderValue::from_static(origin))
            .await;
        response.assert_status_ok();
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|value| value.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_wildcard_origin_allows_any() {
        let server = cors_server(&["http://a.test", "*"]);
        assert_eq!(
            allowed_origin(&server, "http://elsewhere.test").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_listed_origins_only() {
        let server = cors_server(&["http://a.test", "bad\norigin"]);
        assert_eq!(
            allowed_origin(&server, "http://a.test").await.as_deref(),
            Some("http://a.test")
        );
        assert_eq!(allowed_origin(&server, "http://elsewhere.test").await, None);
    }
}
