use crate::catalog::models::LatLng;

pub const CAMPUS_CENTER: LatLng = LatLng {
    lat: 34.81027686919236,
    lng: 135.56099624838777,
};
pub const INITIAL_ZOOM: u8 = 16;
pub const MAP_TYPE_ID: &str = "satellite";
pub const DEFAULT_SELECTED_FLOOR: &str = "1F";
/// Map features hidden so they don't give the location away.
pub const HIDDEN_FEATURE_TYPES: [&str; 3] = ["poi", "administrative", "transit"];
