use crate::catalog::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuessRequest {
    pub lat: f64,
    pub lng: f64,
    pub floor: i32,
}

impl GuessRequest {
    pub fn location(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}
