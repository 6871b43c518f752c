use crate::catalog::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameViewConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub center: LatLng,
    pub zoom: u8,
    pub map_type_id: String,
    pub zoom_control: bool,
    pub map_type_control: bool,
    pub street_view_control: bool,
    pub map_styles: Vec<MapTypeStyle>,
    pub timer_seconds: u64,
    pub score_boundary: f64,
    pub selected_floor: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTypeStyle {
    pub feature_type: String,
    pub stylers: Vec<MapStyler>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapStyler {
    pub visibility: String,
}
