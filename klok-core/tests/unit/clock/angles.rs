use super::*;

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn midnight_is_all_zero() {
    let angles = HandAngles::from_clock(12, 0, 0.0);
    approx(angles.hour_deg, 0.0);
    approx(angles.minute_deg, 0.0);
    approx(angles.second_deg, 0.0);

    let angles = HandAngles::from_clock(0, 0, 0.0);
    approx(angles.hour_deg, 0.0);
}

#[test]
fn known_clock_positions() {
    // 3:00:00 — hour hand at 90°, others at rest.
    let angles = HandAngles::from_clock(3, 0, 0.0);
    approx(angles.hour_deg, 90.0);
    approx(angles.minute_deg, 0.0);

    // 6:30:15
    let angles = HandAngles::from_clock(6, 30, 15.0);
    approx(angles.hour_deg, 6.0 * 30.0 + 30.0 * 0.5 + 15.0 * 0.5 / 60.0);
    approx(angles.minute_deg, 30.0 * 6.0 + 15.0 * 0.1);
    approx(angles.second_deg, 90.0);

    // Hours wrap at 12.
    let pm = HandAngles::from_clock(15, 0, 0.0);
    approx(pm.hour_deg, 90.0);
}

#[test]
fn fractional_seconds_move_every_hand() {
    let t0 = HandAngles::from_clock(9, 41, 30.0);
    let t1 = HandAngles::from_clock(9, 41, 30.25);
    assert!(t1.second_deg > t0.second_deg);
    assert!(t1.minute_deg > t0.minute_deg);
    assert!(t1.hour_deg > t0.hour_deg);
    approx(t1.second_deg - t0.second_deg, 1.5);
}

#[test]
fn angles_are_non_decreasing_within_an_hour() {
    let mut prev = HandAngles::from_clock(4, 0, 0.0);
    for minute in 0..60u32 {
        for &sec in &[0.0, 14.9, 30.0, 59.999] {
            let cur = HandAngles::from_clock(4, minute, sec);
            assert!(cur.hour_deg >= prev.hour_deg);
            assert!(cur.minute_deg >= prev.minute_deg);
            prev = cur;
        }
    }
}

#[test]
fn layer_lookup_maps_shadow_pairs() {
    let angles = HandAngles::from_clock(10, 20, 30.0);
    assert_eq!(angles.for_layer(Layer::HourHand), Some(angles.hour_deg));
    assert_eq!(angles.for_layer(Layer::HourHandShadow), Some(angles.hour_deg));
    assert_eq!(angles.for_layer(Layer::SecondHand), Some(angles.second_deg));
    assert_eq!(angles.for_layer(Layer::Face), None);
    assert_eq!(angles.for_layer(Layer::Glass), None);
}

#[test]
fn now_stays_in_range() {
    let angles = HandAngles::now();
    assert!((0.0..360.0).contains(&angles.hour_deg));
    assert!((0.0..360.0).contains(&angles.minute_deg));
    assert!((0.0..360.0).contains(&angles.second_deg));
}
