// Host-side tests driving the desk and bike page sessions frame by frame.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use showcase_core::layout::{desk_stage_poses, fit_model};
use showcase_core::{
    Aabb, BikeEffect, BikeSession, CameraPose, DeskAnchors, DeskEffect, DeskSession, TextSlot,
};

const DT: f32 = 1.0 / 60.0;

fn model_box() -> Aabb {
    Aabb::new(Vec3::new(-1.0, 0.0, -0.6), Vec3::new(1.0, 1.4, 0.6))
}

fn headings() -> Vec<String> {
    ["Intro", "Skills", "Career", "Projects", "Stats", "Contact"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn loaded_desk() -> DeskSession {
    let mut desk = DeskSession::new(headings(), StdRng::seed_from_u64(3));
    let mut out = Vec::new();
    desk.on_model_loaded(model_box(), &DeskAnchors::default(), 0.0, &mut out);
    desk
}

fn run_desk(desk: &mut DeskSession, from_ms: f64, to_ms: f64) -> Vec<(f64, DeskEffect)> {
    let mut all = Vec::new();
    let mut now = from_ms;
    while now <= to_ms {
        let mut out = Vec::new();
        desk.frame(now, DT, (now / 1000.0) as f32, &mut out);
        all.extend(out.into_iter().map(|e| (now, e)));
        now += 10.0;
    }
    all
}

#[test]
fn desk_load_snaps_to_first_stage() {
    let mut desk = DeskSession::new(headings(), StdRng::seed_from_u64(3));
    let mut out = Vec::new();
    let fit = desk.on_model_loaded(model_box(), &DeskAnchors::default(), 0.0, &mut out);

    assert_eq!(desk.current_stage(), Some(0));
    assert!(out.contains(&DeskEffect::SectionActive(0)));
    assert!(out.contains(&DeskEffect::CardsVisible(Some(0))));
    assert!(out.contains(&DeskEffect::Text {
        slot: TextSlot::Caption,
        text: String::new(),
        typing: false,
    }));
    assert!(out.contains(&DeskEffect::Text {
        slot: TextSlot::Heading(0),
        text: "I".into(),
        typing: true,
    }));
    assert!(fit.far >= 1200.0);
    assert!(fit.limits.min_distance < fit.limits.max_distance);
    assert!(!desk.is_tweening());
}

#[test]
fn desk_last_section_signal_in_a_frame_wins() {
    let mut desk = loaded_desk();
    desk.observe_section(2);
    desk.observe_section(1);
    let effects = run_desk(&mut desk, 100.0, 100.0);
    let sections: Vec<_> = effects
        .iter()
        .filter_map(|(_, e)| match e {
            DeskEffect::SectionActive(i) => Some(*i),
            _ => None,
        })
        .collect();
    assert_eq!(sections, vec![1]);
    assert!(effects.iter().any(|(_, e)| *e == DeskEffect::CardsVisible(None)));
    assert!(desk.is_tweening());
}

#[test]
fn desk_cards_reveal_after_delay() {
    let mut desk = loaded_desk();
    desk.observe_section(1);
    let effects = run_desk(&mut desk, 100.0, 900.0);
    let reveal: Vec<f64> = effects
        .iter()
        .filter(|(_, e)| *e == DeskEffect::CardsVisible(Some(1)))
        .map(|(t, _)| *t)
        .collect();
    assert_eq!(reveal, vec![720.0]);
}

#[test]
fn desk_superseded_card_reveal_never_lands() {
    let mut desk = loaded_desk();
    desk.observe_section(2);
    let mut effects = run_desk(&mut desk, 100.0, 390.0);
    desk.observe_section(3);
    effects.extend(run_desk(&mut desk, 400.0, 1400.0));
    assert!(!effects
        .iter()
        .any(|(_, e)| *e == DeskEffect::CardsVisible(Some(2))));
    assert!(effects
        .iter()
        .any(|(t, e)| *e == DeskEffect::CardsVisible(Some(3)) && *t == 1020.0));
}

#[test]
fn desk_tween_lands_on_stage_pose() {
    let mut desk = loaded_desk();
    let fit = fit_model(model_box(), 0.08, 0.6);
    let expected = desk_stage_poses(fit.center, fit.radius, &DeskAnchors::default())[4];

    desk.observe_section(4);
    let effects = run_desk(&mut desk, 100.0, 1200.0);
    let last = effects
        .iter()
        .rev()
        .find_map(|(_, e)| match e {
            DeskEffect::Camera(p) => Some(*p),
            _ => None,
        })
        .expect("camera moved");
    assert!((last.position - expected.position).length() < 1e-4);
    assert!((last.target - expected.target).length() < 1e-4);
    assert!(!desk.is_tweening());
}

#[test]
fn desk_caption_types_out_fully() {
    let mut desk = loaded_desk();
    desk.observe_section(1);
    let effects = run_desk(&mut desk, 100.0, 1500.0);
    let last_caption = effects
        .iter()
        .rev()
        .find_map(|(_, e)| match e {
            DeskEffect::Text {
                slot: TextSlot::Caption,
                text,
                typing,
            } => Some((text.clone(), *typing)),
            _ => None,
        })
        .expect("caption typed");
    assert_eq!(
        last_caption,
        ("Skill Arsenal: System Readout".to_string(), false)
    );
}

#[test]
fn desk_grabbing_controls_stops_the_flight() {
    let mut desk = loaded_desk();
    desk.observe_section(2);
    run_desk(&mut desk, 100.0, 300.0);
    assert!(desk.is_tweening());
    let mut out = Vec::new();
    desk.controls_start(&mut out);
    assert!(!desk.is_tweening());
    assert_eq!(out, vec![DeskEffect::Haptic(6)]);
    desk.controls_end();
}

fn camera_poses(effects: &[(f64, DeskEffect)]) -> Vec<(f64, CameraPose)> {
    effects
        .iter()
        .filter_map(|(t, e)| match e {
            DeskEffect::Camera(p) => Some((*t, *p)),
            _ => None,
        })
        .collect()
}

fn showcase_stage_pose() -> CameraPose {
    let fit = fit_model(model_box(), 0.08, 0.6);
    desk_stage_poses(fit.center, fit.radius, &DeskAnchors::default())[3]
}

fn assert_near(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-4, "{a:?} != {b:?}");
}

#[test]
fn desk_showcase_stage_follows_pointer() {
    let mut desk = loaded_desk();
    let base = showcase_stage_pose();
    let r = desk.model_radius();
    let want_cam = Vec3::new(0.36 * r, 0.0, 0.08 * r);
    let want_target = Vec3::new(0.16 * r, 0.0, 0.0);

    desk.pointer.x = 1.0;
    desk.pointer.y = 0.0;
    desk.observe_section(3);
    let poses = camera_poses(&run_desk(&mut desk, 100.0, 1200.0));

    // one pose per frame while flying; the tween lands at 1080
    let flight: Vec<_> = poses.iter().filter(|(t, _)| *t < 1080.0).collect();
    assert_eq!(flight.len(), 98);
    let landing: Vec<_> = poses.iter().filter(|(t, _)| *t == 1080.0).collect();
    assert_eq!(landing.len(), 2);
    assert_near(landing[0].1.position, base.position);

    let nudges: Vec<CameraPose> = poses
        .iter()
        .filter(|(t, _)| *t >= 1080.0)
        .skip(1)
        .map(|(_, p)| *p)
        .collect();
    assert_eq!(nudges.len(), 13);
    for (k, pose) in nudges.iter().enumerate() {
        let reached = 1.0 - 0.92f32.powi(k as i32 + 1);
        assert_near(pose.position, base.position + want_cam * reached);
        assert_near(pose.target, base.target + want_target * reached);
    }
}

#[test]
fn desk_nudge_pauses_while_dragging_and_rebases_on_release() {
    let mut desk = loaded_desk();
    desk.observe_section(3);
    run_desk(&mut desk, 100.0, 1100.0);
    let r = desk.model_radius();
    let want_cam = Vec3::new(0.36 * r, 0.0, 0.08 * r);
    let want_target = Vec3::new(0.16 * r, 0.0, 0.0);

    desk.pointer.x = 1.0;
    let nudged = camera_poses(&run_desk(&mut desk, 1110.0, 1140.0));
    assert_eq!(nudged.len(), 4);
    let offset_cam = want_cam * (1.0 - 0.92f32.powi(4));
    let offset_target = want_target * (1.0 - 0.92f32.powi(4));

    let mut out = Vec::new();
    desk.controls_start(&mut out);
    let dragging = run_desk(&mut desk, 1150.0, 1300.0);
    assert!(camera_poses(&dragging).is_empty());

    let dragged = CameraPose::new(Vec3::new(2.0, 1.5, 3.0), Vec3::new(0.1, 0.4, 0.0));
    desk.sync_camera(dragged);
    desk.controls_end();

    let after = camera_poses(&run_desk(&mut desk, 1310.0, 1310.0));
    assert_eq!(after.len(), 1);
    let next_cam = want_cam * (1.0 - 0.92f32.powi(5));
    let next_target = want_target * (1.0 - 0.92f32.powi(5));
    assert_near(after[0].1.position, dragged.position - offset_cam + next_cam);
    assert_near(after[0].1.target, dragged.target - offset_target + next_target);
}

#[test]
fn desk_loading_overlay_hides_once() {
    let mut desk = loaded_desk();
    let effects = run_desk(&mut desk, 0.0, 2500.0);
    let hides: Vec<f64> = effects
        .iter()
        .filter(|(_, e)| *e == DeskEffect::HideLoading)
        .map(|(t, _)| *t)
        .collect();
    assert_eq!(hides, vec![1800.0]);
}

fn loaded_bike() -> BikeSession {
    let mut bike = BikeSession::new(StdRng::seed_from_u64(5));
    bike.resize(1280.0, 720.0);
    let mut out = Vec::new();
    bike.on_model_loaded(model_box(), &mut out);
    bike
}

fn run_bike(bike: &mut BikeSession, from_ms: f64, to_ms: f64, azimuth_deg: f32) -> Vec<(f64, BikeEffect)> {
    let mut all = Vec::new();
    let mut now = from_ms;
    while now <= to_ms {
        let mut out = Vec::new();
        bike.frame(now, DT, (now / 1000.0) as f32, azimuth_deg.to_radians(), &mut out);
        all.extend(out.into_iter().map(|e| (now, e)));
        now += 10.0;
    }
    all
}

fn panel_titles(effects: &[(f64, BikeEffect)]) -> Vec<(f64, &'static str)> {
    effects
        .iter()
        .filter_map(|(t, e)| match e {
            BikeEffect::PanelOpen(c) => Some((*t, c.title)),
            _ => None,
        })
        .collect()
}

#[test]
fn bike_load_selects_dashboard() {
    let mut bike = BikeSession::new(StdRng::seed_from_u64(5));
    let mut out = Vec::new();
    let fit = bike.on_model_loaded(model_box(), &mut out);
    assert_eq!(bike.active_module(), Some("dashboard"));
    assert!(out.contains(&BikeEffect::Label("Active Module: Pilot Dashboard".into())));
    assert!(out.contains(&BikeEffect::Camera(fit.view)));
    assert_eq!(bike.hotspots().len(), 7);
}

#[test]
fn bike_label_tracks_orbit_before_model_loads() {
    let mut bike = BikeSession::new(StdRng::seed_from_u64(5));
    let effects = run_bike(&mut bike, 0.0, 30.0, 0.0);
    let labels: Vec<_> = effects
        .iter()
        .filter_map(|(_, e)| match e {
            BikeEffect::Label(l) => Some(l.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["Active Module: Pilot Dashboard".to_string()]);
    assert_eq!(bike.active_module(), Some("dashboard"));
}

#[test]
fn bike_orbit_changes_active_module() {
    let mut bike = loaded_bike();
    let effects = run_bike(&mut bike, 0.0, 50.0, 190.0);
    let labels: Vec<_> = effects
        .iter()
        .filter_map(|(_, e)| match e {
            BikeEffect::Label(l) => Some(l.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["Active Module: Ride Statistics".to_string()]);
}

#[test]
fn bike_hotspot_opens_panel_after_landing() {
    let mut bike = loaded_bike();
    let mut out = Vec::new();
    bike.focus_hotspot(2, 1000.0, &mut out);
    assert!(out.contains(&BikeEffect::AutoRotate(false)));
    assert!(out.contains(&BikeEffect::HotspotSelected(Some("diagnostics-pin"))));
    assert!(out.contains(&BikeEffect::PanelHidden));
    assert_eq!(bike.active_module(), Some("diagnostics"));

    let effects = run_bike(&mut bike, 1000.0, 2200.0, 120.0);
    // lands at 1760, panel 260 ms later
    assert_eq!(panel_titles(&effects), vec![(2020.0, "Diagnostics")]);
    assert!(bike.is_panel_open());
}

#[test]
fn bike_modules_freeze_while_panel_open() {
    let mut bike = loaded_bike();
    let mut out = Vec::new();
    bike.focus_hotspot(3, 0.0, &mut out);
    run_bike(&mut bike, 0.0, 1100.0, 190.0);
    assert!(bike.is_panel_open());
    let effects = run_bike(&mut bike, 1110.0, 1200.0, 0.0);
    assert!(!effects.iter().any(|(_, e)| matches!(e, BikeEffect::Label(_))));
    assert_eq!(bike.active_module(), Some("rides"));
}

#[test]
fn bike_without_sheet_keeps_tracking_orbit() {
    let mut bike = loaded_bike();
    bike.set_panel_available(false);
    let mut out = Vec::new();
    bike.focus_hotspot(3, 0.0, &mut out);
    let effects = run_bike(&mut bike, 0.0, 1100.0, 190.0);
    assert!(panel_titles(&effects).is_empty());
    assert!(!bike.is_panel_open());

    let effects = run_bike(&mut bike, 1110.0, 1200.0, 0.0);
    assert!(effects
        .iter()
        .any(|(_, e)| *e == BikeEffect::Label("Active Module: Pilot Dashboard".into())));
    assert_eq!(bike.active_module(), Some("dashboard"));
}

#[test]
fn bike_refocus_cancels_pending_panel() {
    let mut bike = loaded_bike();
    let mut out = Vec::new();
    bike.focus_hotspot(2, 0.0, &mut out);
    // land, but switch before the reveal delay elapses
    let mut effects = run_bike(&mut bike, 0.0, 800.0, 120.0);
    bike.focus_hotspot(4, 810.0, &mut out);
    effects.extend(run_bike(&mut bike, 810.0, 2000.0, 255.0));
    assert_eq!(panel_titles(&effects), vec![(1830.0, "Safety + Alerts")]);
}

#[test]
fn bike_escape_closes_and_restores_view() {
    let mut bike = loaded_bike();
    let mut out = Vec::new();
    bike.key_escape(0.0, &mut out);
    assert!(out.is_empty());

    bike.focus_hotspot(0, 0.0, &mut out);
    run_bike(&mut bike, 0.0, 1100.0, 0.0);
    assert!(bike.is_panel_open());

    out.clear();
    bike.key_escape(1200.0, &mut out);
    assert!(!bike.is_panel_open());
    assert!(out.contains(&BikeEffect::PanelHidden));
    assert!(out.contains(&BikeEffect::HotspotSelected(None)));
    assert_eq!(bike.selected_hotspot(), None);

    let effects = run_bike(&mut bike, 1200.0, 2000.0, 0.0);
    assert!(effects
        .iter()
        .any(|(_, e)| matches!(e, BikeEffect::Camera(_))));
}

#[test]
fn bike_hotspot_markers_project_on_screen() {
    let mut bike = loaded_bike();
    run_bike(&mut bike, 0.0, 0.0, 0.0);
    let positions = bike.hotspot_screen_positions();
    assert_eq!(positions.len(), 7);
    for p in positions.into_iter().flatten() {
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
