use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/events",
            get(handlers::event::list_events).post(handlers::event::create_event),
        )
        .route("/api/events/:id", get(handlers::event::get_event))
}
