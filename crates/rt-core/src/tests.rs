use crate::ids::VehicleId;
use crate::rng::ActorRng;
use crate::time::{offline_wait_time, repair_time, wait_time, TimeScale};

#[test]
fn vehicle_id_report_keys_match_the_train_and_repair_vehicle_forms() {
    assert_eq!(VehicleId::Train(7).report_key(), "Train #7");
    assert_eq!(VehicleId::Repair(3).report_key(), "RepairVehicle #3");
}

#[test]
fn vehicle_id_raw_ignores_kind() {
    assert_eq!(VehicleId::Train(42).raw(), 42);
    assert_eq!(VehicleId::Repair(42).raw(), 42);
}

#[test]
fn actor_rng_is_deterministic_for_a_given_seed_and_index() {
    let mut a = ActorRng::new(1, 5);
    let mut b = ActorRng::new(1, 5);
    let xs: Vec<u32> = (0..10).map(|_| a.gen_range(0u32..1000)).collect();
    let ys: Vec<u32> = (0..10).map(|_| b.gen_range(0u32..1000)).collect();
    assert_eq!(xs, ys);
}

#[test]
fn actor_rng_differs_across_actor_indices() {
    let mut a = ActorRng::new(1, 5);
    let mut b = ActorRng::new(1, 6);
    let xs: Vec<u32> = (0..10).map(|_| a.gen_range(0u32..u32::MAX)).collect();
    let ys: Vec<u32> = (0..10).map(|_| b.gen_range(0u32..u32::MAX)).collect();
    assert_ne!(xs, ys);
}

#[test]
fn time_scale_converts_hours_to_real_milliseconds() {
    let scale = TimeScale::new(1000.0);
    assert_eq!(scale.scaled(1.0).as_millis(), 1000);
    assert_eq!(scale.scaled(0.5).as_millis(), 500);
    assert_eq!(scale.one_hour().as_millis(), 1000);
}

#[test]
fn time_scale_clamps_negative_hours_to_zero() {
    let scale = TimeScale::new(1000.0);
    assert_eq!(scale.scaled(-5.0).as_millis(), 0);
}

#[test]
fn wait_time_falls_within_the_ten_to_thirty_nine_minute_window() {
    let scale = TimeScale::new(60_000.0); // 1 sim-minute == 1 real ms
    let mut rng = ActorRng::new(1, 0);
    for _ in 0..200 {
        let d = wait_time(&scale, &mut rng);
        assert!(d.as_millis() >= 10 && d.as_millis() < 39);
    }
}

#[test]
fn offline_wait_time_is_double_a_possible_wait_time_draw() {
    let scale = TimeScale::new(60_000.0);
    let mut rng = ActorRng::new(1, 0);
    let d = offline_wait_time(&scale, &mut rng);
    // Double of [10, 39) minutes -> [20, 78) ms under this scale.
    assert!(d.as_millis() >= 20 && d.as_millis() < 78);
}

#[test]
fn repair_time_scales_linearly_with_configured_hours() {
    let scale = TimeScale::new(1000.0);
    assert_eq!(repair_time(&scale, 2.0).as_millis(), 2000);
}
