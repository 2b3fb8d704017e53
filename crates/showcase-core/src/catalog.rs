//! Static page content: stage captions, module stops, detail copy, hotspots.

use crate::layout::{HotspotDef, Side};
use crate::orbit::ModuleStop;
use fnv::FnvHashMap;

pub const DESK_MODEL_CANDIDATES: &[&str] = &[
    "./assets/models/computer_desk/scene.gltf",
    "./assets/models/computer_desk.glb",
];

pub const BIKE_MODEL_CANDIDATES: &[&str] =
    &["./assets/models/three_cylinder_naked_street_bike/scene.gltf"];

/// Caption shown under the canvas for each desk stage. Stage 0 has none.
pub const DESK_STAGE_LABELS: [&str; 6] = [
    "",
    "Skill Arsenal: System Readout",
    "Career Missions: Production Battle Log",
    "Project Showcase: Interactive Preview",
    "Final Stats: Impact + Growth",
    "Connect Mode: Ready To Collaborate",
];

pub const BIKE_MODULE_STOPS: [ModuleStop; 7] = [
    ModuleStop::new("dashboard", "Pilot Dashboard", 0.0),
    ModuleStop::new("controls", "Controls + Performance", 55.0),
    ModuleStop::new("diagnostics", "Diagnostics", 120.0),
    ModuleStop::new("rides", "Ride Statistics", 190.0),
    ModuleStop::new("safety", "Safety + Alerts", 255.0),
    ModuleStop::new("lockdown", "Lockdown Mode", 288.0),
    ModuleStop::new("charging", "Charging Experience", 320.0),
];

/// Copy for the feature panel opened after focusing a hotspot.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleContent {
    pub title: &'static str,
    pub description: &'static str,
    pub points: [&'static str; 3],
}

pub fn bike_module_content() -> FnvHashMap<&'static str, ModuleContent> {
    let mut map = FnvHashMap::default();
    map.insert(
        "dashboard",
        ModuleContent {
            title: "Pilot Dashboard",
            description: "Live range, parked state, sync freshness, and quick access navigation for everyday rides.",
            points: [
                "Range-first UI with high visibility at a glance.",
                "Fast status clarity for ride-ready decisions.",
                "Clear bottom nav for quick module switching.",
            ],
        },
    );
    map.insert(
        "safety",
        ModuleContent {
            title: "Safety + Alerts",
            description: "Critical rider intelligence surfaced in one place with active alert status cards.",
            points: [
                "Crash alert signal state.",
                "A.C.W.S and Delta Watch indicators.",
                "Activity timeline visualization with day-wise spikes.",
            ],
        },
    );
    map.insert(
        "lockdown",
        ModuleContent {
            title: "Lockdown Mode",
            description: "When Lockdown is enabled, the bike is immobilized until you re-arm or unlock it, reducing unauthorized usage risk.",
            points: [
                "Works like a phone lock for your bike and is ideal for public parking or overnight stops.",
                "Paired with connected security: remote lock/lockdown, live tracking, movement and tamper alerts, and Find My F77 app support.",
                "Security best practice: use Lockdown mode with smart parking and physical security when needed.",
            ],
        },
    );
    map.insert(
        "controls",
        ModuleContent {
            title: "Controls + Performance",
            description: "Ride behavior controls with immediate feedback across performance mode components.",
            points: [
                "Hill Hold, ABS, and TC access.",
                "Regen level tuning panel.",
                "Range and battery visualization.",
            ],
        },
    );
    map.insert(
        "diagnostics",
        ModuleContent {
            title: "Diagnostics",
            description: "Vehicle health surfacing for proactive maintenance and service planning.",
            points: [
                "Tyre pressure and battery health summary.",
                "Service prediction based on distance/time.",
                "In-app service scheduling trigger.",
            ],
        },
    );
    map.insert(
        "rides",
        ModuleContent {
            title: "Ride Statistics",
            description: "Trip timeline and efficiency metrics for post-ride analysis.",
            points: [
                "Distance, duration, top speed, and avg speed.",
                "Efficiency and fuel/CO2-equivalent savings.",
                "Route node timestamps for contextual review.",
            ],
        },
    );
    map.insert(
        "charging",
        ModuleContent {
            title: "Charging Experience",
            description: "Charger flow optimized for practical charging sessions and destination context.",
            points: [
                "Supernova station identity and location.",
                "Session duration control with quick adjustments.",
                "Start charging action with focused CTA.",
            ],
        },
    );
    map
}

pub const BIKE_HOTSPOTS: [HotspotDef; 7] = [
    HotspotDef {
        id: "dashboard-pin",
        label: "Pilot Dashboard",
        module_id: "dashboard",
        point: [0.5, 0.77, 0.81],
        side: Side::Right,
        focus_offset: [0.0, 0.42, 1.08],
    },
    HotspotDef {
        id: "controls-pin",
        label: "Ride Controls",
        module_id: "controls",
        point: [0.24, 0.55, 0.62],
        side: Side::Left,
        focus_offset: [-0.86, 0.22, 0.6],
    },
    HotspotDef {
        id: "diagnostics-pin",
        label: "Diagnostics",
        module_id: "diagnostics",
        point: [0.72, 0.48, 0.53],
        side: Side::Right,
        focus_offset: [0.86, 0.22, 0.62],
    },
    HotspotDef {
        id: "rides-pin",
        label: "Ride Statistics",
        module_id: "rides",
        point: [0.54, 0.4, 0.26],
        side: Side::Right,
        focus_offset: [0.16, 0.2, -1.0],
    },
    HotspotDef {
        id: "safety-pin",
        label: "Safety Alerts",
        module_id: "safety",
        point: [0.5, 0.8, 0.4],
        side: Side::Left,
        focus_offset: [0.1, 0.55, -0.88],
    },
    HotspotDef {
        id: "lockdown-pin",
        label: "Lockdown Mode",
        module_id: "lockdown",
        point: [0.36, 0.61, 0.5],
        side: Side::Left,
        focus_offset: [-0.58, 0.3, -0.5],
    },
    HotspotDef {
        id: "charging-pin",
        label: "Charging Flow",
        module_id: "charging",
        point: [0.47, 0.17, 0.19],
        side: Side::Left,
        focus_offset: [0.0, 0.12, -1.22],
    },
];
