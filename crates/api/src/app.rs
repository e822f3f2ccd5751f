use axum::{middleware, routing::get, Router};
use domain::services::{EventNotifier, LogNotifier};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    authorize, metrics_handler, metrics_middleware, trace_id, AllowAll, Authorizer,
    RemoteAuthorizer,
};
use crate::routes::{
    campaigns, email_addresses, email_group_members, email_groups, health, organizations,
    profiles, templates,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub notifier: Arc<dyn EventNotifier>,
    pub authorizer: Arc<dyn Authorizer>,
}

/// An empty origin list opens CORS up entirely, for development.
fn build_cors(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let mut parsed = Vec::new();
        for origin in origins {
            match origin.parse() {
                Ok(value) => parsed.push(value),
                Err(_) => tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin"),
            }
        }
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Select the authorizer implementation from configuration.
fn build_authorizer(config: &Config) -> Arc<dyn Authorizer> {
    match config.auth.mode.as_str() {
        "remote" => Arc::new(RemoteAuthorizer::new(
            &config.auth.jwt_secret,
            config.auth.permissions_url.clone(),
            config.auth.permissions_timeout_secs,
        )),
        _ => Arc::new(AllowAll),
    }
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let notifier: Arc<dyn EventNotifier> = Arc::new(LogNotifier::new());
    create_app_with_notifier(config, pool, notifier)
}

/// Build the router with an explicit notifier, used by tests to observe
/// launch events.
pub fn create_app_with_notifier(
    config: Config,
    pool: PgPool,
    notifier: Arc<dyn EventNotifier>,
) -> Router {
    let config = Arc::new(config);
    let authorizer = build_authorizer(&config);

    let state = AppState {
        pool,
        config: config.clone(),
        notifier,
        authorizer,
    };

    let cors = build_cors(&config.security.cors_origins);

    // Organization-scoped resource routes. Everything here passes through
    // the authorizer; in `allow_all` mode the check is a no-op.
    let api_routes = Router::new()
        .route(
            "/api/v1/organizations",
            get(organizations::list_organizations).post(organizations::create_organization),
        )
        .route(
            "/api/v1/organizations/:organization_id",
            get(organizations::get_organization),
        )
        .route(
            "/api/v1/organizations/:organization_id/profiles",
            get(profiles::list_profiles).post(profiles::create_profile),
        )
        .route(
            "/api/v1/organizations/:organization_id/profiles/:profile_id",
            get(profiles::get_profile).put(profiles::update_profile),
        )
        .route(
            "/api/v1/organizations/:organization_id/email-addresses",
            get(email_addresses::list_email_addresses).post(email_addresses::create_email_address),
        )
        .route(
            "/api/v1/organizations/:organization_id/email-addresses/:email_address_id",
            get(email_addresses::get_email_address),
        )
        .route(
            "/api/v1/organizations/:organization_id/email-groups",
            get(email_groups::list_email_groups).post(email_groups::create_email_group),
        )
        .route(
            "/api/v1/organizations/:organization_id/email-groups/:group_id",
            get(email_groups::get_email_group),
        )
        .route(
            "/api/v1/organizations/:organization_id/email-groups/:group_id/members",
            get(email_group_members::list_members).post(email_group_members::create_member),
        )
        .route(
            "/api/v1/organizations/:organization_id/email-groups/:group_id/members/:member_id",
            get(email_group_members::get_member).delete(email_group_members::delete_member),
        )
        .route(
            "/api/v1/organizations/:organization_id/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route(
            "/api/v1/organizations/:organization_id/templates/:template_id",
            get(templates::get_template),
        )
        .route(
            "/api/v1/organizations/:organization_id/campaigns",
            get(campaigns::list_campaigns).post(campaigns::create_campaign),
        )
        .route(
            "/api/v1/organizations/:organization_id/campaigns/:campaign_id",
            get(campaigns::get_campaign).patch(campaigns::update_campaign),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    // Public routes (no authorization)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Layers apply bottom-up: trace_id wraps everything below it.
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cors_open_when_no_origins_configured() {
        let _ = build_cors(&[]);
    }

    #[test]
    fn test_build_cors_tolerates_unparseable_origin() {
        // Header values cannot contain control characters; the bad entry
        // is dropped (with a warning) and the layer still builds.
        let _ = build_cors(&[
            "https://app.example.com".to_string(),
            "bad\norigin".to_string(),
        ]);
    }
}
