use crate::app_context::AppContext;
use crate::game::models::GameViewConfig;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn config(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<GameViewConfig> {
    Json(app_context.game_config.as_ref().clone())
}
