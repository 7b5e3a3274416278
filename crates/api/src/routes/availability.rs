use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/events/:id/responses",
            put(handlers::availability::submit_availability),
        )
        .route(
            "/api/events/:id/participants/:name/selection",
            get(handlers::availability::get_selection),
        )
}
