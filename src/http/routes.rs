use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::Uri,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::info;

use crate::{
    error::AppError,
    http::{
        api::{handle_config, handle_file_name},
        views::View,
    },
    state::AppState,
};

/// A navigable path and the view it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRoute {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: &[PageRoute] = &[
    PageRoute {
        path: "/",
        view: View::Single,
    },
    PageRoute {
        path: "/batch",
        view: View::Batch,
    },
];

/// Builds the application router: the page table, the JSON api, and the
/// public directory for everything else.
#[must_use]
pub fn router(state: AppState) -> Router {
    let mut pages = Router::new();
    for route in ROUTES {
        let view = route.view;
        pages = pages.route(
            route.path,
            get(move || async move {
                info!("Rendering {}", view.title());
                view.render()
            }),
        );
    }

    let public =
        ServeDir::new(&state.public_dir).not_found_service(handle_not_found.into_service());

    pages
        .route("/api/config", get(handle_config))
        .route("/api/file-name", get(handle_file_name))
        .fallback_service(public)
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
