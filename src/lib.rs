pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod state;
pub mod table;
pub mod ui_state;
pub mod variant;

use axum::{
    routing::{get, patch, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::AppConfig;
pub use state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::dashboard::health))

        // Dashboard
        .route("/api/dashboard/summary", get(handlers::dashboard::summary))
        .route("/api/products", get(handlers::products::products_list))
        .route("/api/orders", get(handlers::orders::orders_list))
        .route("/api/customers", get(handlers::customers::customers_list))
        .route("/api/inventory", get(handlers::inventory::items_list))

        // Storefront and POS
        .route("/api/storefront/products", get(handlers::products::storefront_products))
        .route("/api/storefront/categories", get(handlers::products::storefront_categories))
        .route("/api/cart/quote", post(handlers::cart::quote))

        // Variant editor
        .route("/api/variant-presets", get(handlers::variants::presets_list))
        .route("/api/products/:sku/variant-editor", post(handlers::variants::open_editor))
        .route(
            "/api/variant-editors/:id",
            get(handlers::variants::editor_detail).delete(handlers::variants::close_editor),
        )
        .route("/api/variant-editors/:id/rows", get(handlers::variants::editor_rows))
        .route("/api/variant-editors/:id/axes", post(handlers::variants::add_axis))
        .route(
            "/api/variant-editors/:id/axes/:axis_id",
            put(handlers::variants::update_axis).delete(handlers::variants::delete_axis),
        )
        .route(
            "/api/variant-editors/:id/rows/:row_id",
            patch(handlers::variants::update_row),
        )

        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
