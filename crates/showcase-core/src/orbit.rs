//! Orbit-driven module selection: the azimuth picks the nearest module stop.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModuleStop {
    pub id: &'static str,
    pub label: &'static str,
    /// Preferred azimuth, degrees.
    pub angle: f32,
}

impl ModuleStop {
    pub const fn new(id: &'static str, label: &'static str, angle: f32) -> Self {
        Self { id, label, angle }
    }
}

/// Wrap any angle in degrees into \[0, 360).
#[inline]
pub fn normalize_degrees(value: f32) -> f32 {
    let v = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if v >= 360.0 {
        0.0
    } else {
        v
    }
}

/// Shortest distance between two angles on the circle, degrees in \[0, 180\].
#[inline]
pub fn circular_distance(a: f32, b: f32) -> f32 {
    let d = (normalize_degrees(a) - normalize_degrees(b)).abs();
    d.min(360.0 - d)
}

/// Index of the stop nearest to `degrees`; the earliest stop wins ties.
pub fn nearest_stop(stops: &[ModuleStop], degrees: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, stop) in stops.iter().enumerate() {
        let d = circular_distance(degrees, stop.angle);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

pub struct ModuleSelector {
    stops: Vec<ModuleStop>,
    active: Option<String>,
}

impl ModuleSelector {
    pub fn new(stops: &[ModuleStop]) -> Self {
        Self {
            stops: stops.to_vec(),
            active: None,
        }
    }

    #[inline]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Re-evaluate from the orbit azimuth (radians). Skipped while the feature
    /// panel is open. Returns the new label when the active module changed.
    pub fn update_from_azimuth(&mut self, azimuth_rad: f32, panel_open: bool) -> Option<String> {
        if panel_open {
            return None;
        }
        let deg = normalize_degrees(azimuth_rad.to_degrees());
        let winner = self.stops[nearest_stop(&self.stops, deg)?];
        self.set_active(winner.id, winner.label)
    }

    /// Explicitly select a module. Idempotent; returns the label on change.
    /// The stop's own label is preferred over `fallback_label`.
    pub fn set_active(&mut self, id: &str, fallback_label: &str) -> Option<String> {
        if self.active.as_deref() == Some(id) {
            return None;
        }
        self.active = Some(id.to_string());
        let label = self
            .stops
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.label)
            .filter(|l| !l.is_empty())
            .unwrap_or(if fallback_label.is_empty() {
                id
            } else {
                fallback_label
            });
        log::debug!("[module] active={}", id);
        Some(label.to_string())
    }
}

/// Text shown in the rotation label for an active module.
#[inline]
pub fn rotation_label(label: &str) -> String {
    format!("Active Module: {}", label)
}
