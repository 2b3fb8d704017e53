//! Geometry derived from a loaded model: centering, stage viewpoints, hotspots.

use crate::tween::CameraPose;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Build from a `[min_x, min_y, min_z, max_x, max_y, max_z]` slice.
    pub fn from_slice(v: &[f32]) -> Option<Self> {
        match v {
            [a, b, c, d, e, f, ..] => Some(Self::new(Vec3::new(*a, *b, *c), Vec3::new(*d, *e, *f))),
            _ => None,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Radius of the sphere circumscribing the box.
    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        self.size().length() * 0.5
    }

    #[inline]
    pub fn translated(&self, offset: Vec3) -> Aabb {
        Aabb::new(self.min + offset, self.max + offset)
    }

    /// Point at normalized coordinates (each axis 0..1) inside the box.
    #[inline]
    pub fn point_at(&self, normalized: Vec3) -> Vec3 {
        self.min + self.size() * normalized
    }
}

/// Translation that centers the model on the origin and drops it by
/// `drop_fraction` of its height, plus the resulting radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelFit {
    pub offset: Vec3,
    pub bounds: Aabb,
    pub center: Vec3,
    pub radius: f32,
}

pub fn fit_model(raw: Aabb, drop_fraction: f32, min_radius: f32) -> ModelFit {
    let mut offset = -raw.center();
    offset.y -= raw.size().y * drop_fraction;
    let bounds = raw.translated(offset);
    ModelFit {
        offset,
        bounds,
        center: bounds.center(),
        radius: bounds.bounding_radius().max(min_radius),
    }
}

/// Named scene nodes the desk stages aim at, when the model provides them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeskAnchors {
    pub monitor: Option<Vec3>,
    pub keyboard: Option<Vec3>,
    pub book: Option<Vec3>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorKind {
    Monitor,
    Keyboard,
    Book,
}

impl AnchorKind {
    /// Classify a scene node name; matching is case-insensitive on substrings.
    pub fn classify(name: &str) -> Option<AnchorKind> {
        let lower = name.to_lowercase();
        let any = |keys: &[&str]| keys.iter().any(|k| lower.contains(k));
        if any(&["monitor", "screen", "display"]) {
            Some(AnchorKind::Monitor)
        } else if any(&["keyboard", "keys"]) {
            Some(AnchorKind::Keyboard)
        } else if any(&["book", "notebook", "diary"]) {
            Some(AnchorKind::Book)
        } else {
            None
        }
    }
}

impl DeskAnchors {
    /// First node of each kind wins, in traversal order.
    pub fn from_named_nodes<'a>(nodes: impl IntoIterator<Item = (&'a str, Vec3)>) -> Self {
        let mut out = DeskAnchors::default();
        for (name, pos) in nodes {
            let slot = match AnchorKind::classify(name) {
                Some(AnchorKind::Monitor) => &mut out.monitor,
                Some(AnchorKind::Keyboard) => &mut out.keyboard,
                Some(AnchorKind::Book) => &mut out.book,
                None => continue,
            };
            if slot.is_none() {
                *slot = Some(pos);
            }
        }
        out
    }
}

/// Six desk viewpoints, one per story section, in section order.
pub fn desk_stage_poses(center: Vec3, r: f32, anchors: &DeskAnchors) -> [CameraPose; 6] {
    let at = |x: f32, y: f32, z: f32| center + Vec3::new(x, y, z) * r;

    let monitor = anchors.monitor.unwrap_or_else(|| at(0.0, 0.44, 0.1));
    let keyboard = anchors.keyboard.unwrap_or_else(|| at(0.0, -0.26, 0.16));
    let book = anchors.book.unwrap_or_else(|| at(-0.24, -0.14, 0.18));
    let front = at(0.0, 0.05, 0.02);

    [
        CameraPose::new(at(0.0, 0.62, 2.55), front),
        CameraPose::new(at(2.4, 1.4, 2.2), at(0.0, 0.08, 0.0)),
        CameraPose::new(keyboard + Vec3::new(1.25, 0.55, 1.0) * r, keyboard),
        CameraPose::new(book + Vec3::new(1.15, 0.58, 1.05) * r, book),
        CameraPose::new(at(0.35, 1.72, 2.68), at(0.0, 0.08, 0.0)),
        CameraPose::new(monitor + Vec3::new(-1.2, 0.65, 1.8) * r, at(0.0, 0.12, 0.0)),
    ]
}

/// Resting viewpoint for the bike once fitted.
pub fn bike_default_view(r: f32) -> CameraPose {
    CameraPose::new(
        Vec3::new(r * 1.08, r * 0.63, r * 1.52),
        Vec3::new(0.0, r * 0.15, 0.0),
    )
}

/// Orbit distance clamps derived from the model radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitLimits {
    pub fn scaled(r: f32, min_scale: f32, max_scale: f32) -> Self {
        Self {
            min_distance: r * min_scale,
            max_distance: r * max_scale,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Static description of a clickable marker on the bike.
#[derive(Clone, Copy, Debug)]
pub struct HotspotDef {
    pub id: &'static str,
    pub label: &'static str,
    pub module_id: &'static str,
    /// Normalized position inside the model bounding box.
    pub point: [f32; 3],
    pub side: Side,
    /// Camera offset from the anchor, in model radii.
    pub focus_offset: [f32; 3],
}

/// A hotspot resolved against the loaded model.
#[derive(Clone, Debug)]
pub struct Hotspot {
    pub def: HotspotDef,
    pub anchor: Vec3,
}

impl Hotspot {
    /// Camera pose that frames this hotspot given the current root offset.
    pub fn focus_pose(&self, root_offset: Vec3, model_radius: f32) -> CameraPose {
        let anchor = self.anchor + root_offset;
        let offset = Vec3::from(self.def.focus_offset) * model_radius;
        CameraPose::new(anchor + offset, anchor)
    }
}

pub fn build_hotspots(model_bounds: &Aabb, defs: &[HotspotDef]) -> Vec<Hotspot> {
    defs.iter()
        .map(|def| Hotspot {
            def: *def,
            anchor: model_bounds.point_at(Vec3::from(def.point)),
        })
        .collect()
}
