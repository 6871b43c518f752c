use crate::app_context::AppContext;
use crate::catalog::responses::CatalogStatusResponse;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn status(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<CatalogStatusResponse> {
    Json(CatalogStatusResponse {
        error: false,
        images_count: app_context.catalog.len(),
    })
}
