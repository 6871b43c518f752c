use crate::catalog::models::{Image, LatLng};
use consts::{EARTH_RADIUS, FLOOR_BONUS, MAX_DISTANCE_SCORE, ROUND_DURATION, SCORE_BOUNDARY};
use models::Guess;
use std::time::Duration;

pub mod consts;
pub mod models;
#[cfg(test)]
pub mod tests;

pub fn distance_meters(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS * c
}

pub fn distance_score(distance: f64) -> u64 {
    if distance >= SCORE_BOUNDARY {
        return 0;
    }
    (MAX_DISTANCE_SCORE * (1.0 - distance / SCORE_BOUNDARY)).round() as u64
}

pub fn evaluate(
    guess: LatLng,
    guessed_floor: i32,
    image: &Image,
    elapsed: Duration,
    stage: u64,
) -> Guess {
    let distance = distance_meters(guess, image.coordinate);
    let floor_correct = guessed_floor == image.floor;
    let timed_out = elapsed > ROUND_DURATION;
    let score = if timed_out {
        0
    } else {
        match distance_score(distance) {
            0 => 0,
            points if floor_correct => points + FLOOR_BONUS,
            points => points,
        }
    };
    Guess {
        correct: distance <= SCORE_BOUNDARY && floor_correct && !timed_out,
        distance,
        floor_correct,
        score,
        guess,
        guessed_floor,
        actual: image.coordinate,
        actual_floor: image.floor,
        time: format!("{:.1}", elapsed.as_secs_f64()),
        timed_out,
        stage: format!("Stage {stage}"),
    }
}
