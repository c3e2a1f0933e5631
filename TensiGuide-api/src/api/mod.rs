pub mod handlers;
pub mod routes;

use axum::Router;
use tensi_guide_domain::config::AggregatorConfig;

/// Create the application router
pub fn create_application(config: AggregatorConfig) -> Router {
    routes::create_app(config)
}
