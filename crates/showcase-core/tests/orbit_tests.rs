// Host-side tests for orbit-driven module selection.

use showcase_core::catalog::BIKE_MODULE_STOPS;
use showcase_core::orbit::{nearest_stop, rotation_label};
use showcase_core::{circular_distance, normalize_degrees, ModuleSelector};

#[test]
fn circular_distance_wraps() {
    assert_eq!(circular_distance(10.0, 350.0), 20.0);
    assert_eq!(circular_distance(350.0, 10.0), 20.0);
    assert_eq!(circular_distance(0.0, 180.0), 180.0);
    assert_eq!(circular_distance(-30.0, 30.0), 60.0);
}

#[test]
fn normalize_degrees_range() {
    assert_eq!(normalize_degrees(370.0), 10.0);
    assert_eq!(normalize_degrees(-90.0), 270.0);
    assert_eq!(normalize_degrees(360.0), 0.0);
    let tiny = normalize_degrees(-1e-7);
    assert!((0.0..360.0).contains(&tiny));
}

#[test]
fn nearest_stop_matches_angles() {
    assert_eq!(nearest_stop(&BIKE_MODULE_STOPS, 0.0), Some(0));
    assert_eq!(nearest_stop(&BIKE_MODULE_STOPS, 350.0), Some(0));
    assert_eq!(nearest_stop(&BIKE_MODULE_STOPS, 60.0), Some(1));
    assert_eq!(nearest_stop(&BIKE_MODULE_STOPS, 280.0), Some(5));
    assert_eq!(nearest_stop(&BIKE_MODULE_STOPS, 330.0), Some(6));
    assert_eq!(nearest_stop(&[], 10.0), None);
}

#[test]
fn selector_reports_only_changes() {
    let mut s = ModuleSelector::new(&BIKE_MODULE_STOPS);
    let label = s.update_from_azimuth(120f32.to_radians(), false);
    assert_eq!(label.as_deref(), Some("Diagnostics"));
    assert_eq!(s.active(), Some("diagnostics"));
    assert_eq!(s.update_from_azimuth(118f32.to_radians(), false), None);
}

#[test]
fn selector_is_frozen_while_panel_open() {
    let mut s = ModuleSelector::new(&BIKE_MODULE_STOPS);
    s.set_active("rides", "Ride Statistics");
    assert_eq!(s.update_from_azimuth(0.0, true), None);
    assert_eq!(s.active(), Some("rides"));
}

#[test]
fn negative_azimuth_wraps_to_last_stops() {
    let mut s = ModuleSelector::new(&BIKE_MODULE_STOPS);
    // -40 degrees == 320
    let label = s.update_from_azimuth((-40f32).to_radians(), false);
    assert_eq!(label.as_deref(), Some("Charging Experience"));
}

#[test]
fn explicit_selection_prefers_stop_label() {
    let mut s = ModuleSelector::new(&BIKE_MODULE_STOPS);
    assert_eq!(
        s.set_active("safety", "Safety Alerts").as_deref(),
        Some("Safety + Alerts")
    );
    assert_eq!(s.set_active("safety", "Safety Alerts"), None);
    assert_eq!(s.set_active("custom", "").as_deref(), Some("custom"));
    assert_eq!(rotation_label("Diagnostics"), "Active Module: Diagnostics");
}
