use crate::catalog::models::LatLng;
use crate::catalog::tests::fake_images;
use crate::scoring::consts::{FLOOR_BONUS, MAX_DISTANCE_SCORE};
use crate::scoring::{distance_meters, distance_score, evaluate};
use std::time::Duration;

#[test]
fn distance_to_itself_is_zero() {
    let point = LatLng {
        lat: 34.8093582,
        lng: 135.5615536,
    };
    assert_eq!(distance_meters(point, point), 0.0);
}

#[test]
fn one_degree_of_latitude() {
    let distance = distance_meters(LatLng { lat: 0.0, lng: 0.0 }, LatLng { lat: 1.0, lng: 0.0 });
    assert!((distance - 111_194.9).abs() < 1.0, "got {distance}");
}

#[test]
fn library_to_cafeteria() {
    let images = fake_images();
    let distance = distance_meters(images[0].coordinate, images[1].coordinate);
    assert!((45.0..60.0).contains(&distance), "got {distance}");
}

#[test]
fn distance_score_decreases_to_zero_at_boundary() {
    assert_eq!(distance_score(0.0), MAX_DISTANCE_SCORE as u64);
    assert_eq!(distance_score(200.0), 2000);
    assert_eq!(distance_score(400.0), 0);
    assert_eq!(distance_score(10_000.0), 0);
}

#[test]
fn exact_guess_on_the_right_floor() {
    let image = &fake_images()[0];
    let guess = evaluate(image.coordinate, image.floor, image, Duration::from_secs(5), 1);
    assert!(guess.correct);
    assert!(guess.floor_correct);
    assert!(!guess.timed_out);
    assert_eq!(guess.score, MAX_DISTANCE_SCORE as u64 + FLOOR_BONUS);
    assert_eq!(guess.time, "5.0");
    assert_eq!(guess.stage, "Stage 1");
    assert_eq!(guess.actual, image.coordinate);
}

#[test]
fn wrong_floor_is_not_correct() {
    let image = &fake_images()[0];
    let guess = evaluate(image.coordinate, image.floor + 1, image, Duration::ZERO, 2);
    assert!(!guess.correct);
    assert!(!guess.floor_correct);
    assert_eq!(guess.score, MAX_DISTANCE_SCORE as u64);
}

#[test]
fn far_guess_scores_nothing() {
    let image = &fake_images()[0];
    let far_away = LatLng {
        lat: image.coordinate.lat + 0.01,
        lng: image.coordinate.lng,
    };
    let guess = evaluate(far_away, image.floor, image, Duration::ZERO, 1);
    assert!(!guess.correct);
    assert_eq!(guess.score, 0);
    assert!(guess.distance > 1000.0);
}

#[test]
fn late_guess_scores_nothing() {
    let image = &fake_images()[1];
    let guess = evaluate(image.coordinate, image.floor, image, Duration::from_secs(31), 3);
    assert!(guess.timed_out);
    assert!(!guess.correct);
    assert_eq!(guess.score, 0);
}
