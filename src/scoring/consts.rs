use std::time::Duration;

pub const EARTH_RADIUS: f64 = 6371e3;
/// Guesses farther than this from the actual spot, in meters, score nothing.
pub const SCORE_BOUNDARY: f64 = 400.0;
pub const MAX_DISTANCE_SCORE: f64 = 4000.0;
pub const FLOOR_BONUS: u64 = 1000;
pub const ROUND_DURATION: Duration = Duration::from_secs(30);
