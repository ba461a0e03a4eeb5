use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{create_category, get_categories};

pub fn init_categories_router() -> Router<AppState> {
    Router::new().route("/", post(create_category).get(get_categories))
}
