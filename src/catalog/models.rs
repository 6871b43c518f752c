use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A photo of some spot on the campus, the thing players have to locate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub is_panorama: bool,
    pub coordinate: LatLng,
    pub floor: i32,
    /// Horizontal angle of view of a panorama, in degrees.
    #[serde(default = "full_horizontal_view")]
    pub haov: f64,
    /// Vertical angle of view of a panorama, in degrees.
    #[serde(default = "full_vertical_view")]
    pub vaov: f64,
}

fn full_horizontal_view() -> f64 {
    360.0
}

fn full_vertical_view() -> f64 {
    180.0
}
