use crate::cli::Args;
use crate::scoring::consts::{ROUND_DURATION, SCORE_BOUNDARY};
use consts::{
    CAMPUS_CENTER, DEFAULT_SELECTED_FLOOR, HIDDEN_FEATURE_TYPES, INITIAL_ZOOM, MAP_TYPE_ID,
};
use models::{GameViewConfig, MapStyler, MapTypeStyle};

pub mod consts;
pub mod handlers;
pub mod models;

pub fn init(args: &Args) -> GameViewConfig {
    if args.maps_api_key.is_none() {
        tracing::warn!("No maps API key was provided, the client will have to bring its own.");
    }
    GameViewConfig {
        api_key: args.maps_api_key.clone(),
        center: CAMPUS_CENTER,
        zoom: INITIAL_ZOOM,
        map_type_id: MAP_TYPE_ID.to_string(),
        zoom_control: false,
        map_type_control: false,
        street_view_control: false,
        map_styles: HIDDEN_FEATURE_TYPES
            .iter()
            .map(|feature_type| MapTypeStyle {
                feature_type: feature_type.to_string(),
                stylers: vec![MapStyler {
                    visibility: String::from("off"),
                }],
            })
            .collect(),
        timer_seconds: ROUND_DURATION.as_secs(),
        score_boundary: SCORE_BOUNDARY,
        selected_floor: DEFAULT_SELECTED_FLOOR.to_string(),
    }
}
