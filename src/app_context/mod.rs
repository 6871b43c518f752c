use crate::catalog::Catalog;
use crate::game::models::GameViewConfig;
use crate::storage::interface::ISessionStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub catalog: Catalog,
    pub game_config: Arc<GameViewConfig>,
}

pub struct RequestContext {
    pub session_id: String,
}

pub fn init<SS: ISessionStorage + Default>(
    catalog: Catalog,
    game_config: GameViewConfig,
) -> AppContext<SS> {
    AppContext {
        sessions: SS::default(),
        catalog,
        game_config: Arc::new(game_config),
    }
}
