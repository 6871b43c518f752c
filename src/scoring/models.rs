use crate::catalog::models::LatLng;
use serde::{Deserialize, Serialize};

/// The outcome of one round, as shown to the player once the guess is in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    pub correct: bool,
    /// Meters between the guessed and the actual location.
    pub distance: f64,
    pub floor_correct: bool,
    pub score: u64,
    pub guess: LatLng,
    pub guessed_floor: i32,
    pub actual: LatLng,
    pub actual_floor: i32,
    /// Seconds spent on the round, one decimal.
    pub time: String,
    pub timed_out: bool,
    pub stage: String,
}
