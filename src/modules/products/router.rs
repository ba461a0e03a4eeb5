use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{create_product, get_products};

pub fn init_products_router() -> Router<AppState> {
    Router::new().route("/", post(create_product).get(get_products))
}
