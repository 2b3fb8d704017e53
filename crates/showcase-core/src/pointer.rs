use glam::Vec2;

/// Normalized pointer shared by the particle field and the camera nudge.
///
/// `x`/`y` are in \[-1, 1\] with +y pointing down the page (client space).
/// `strength` is the smoothed repulsion strength, advanced by the particle
/// field each tick so interaction fades in and out instead of popping.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
    pub touching: bool,
    pub strength: f32,
}

impl PointerState {
    /// Capture a client-space position against the window size.
    pub fn capture(&mut self, client_x: f32, client_y: f32, view_w: f32, view_h: f32) {
        if view_w <= 0.0 || view_h <= 0.0 {
            return;
        }
        self.x = (client_x / view_w) * 2.0 - 1.0;
        self.y = (client_y / view_h) * 2.0 - 1.0;
    }

    #[inline]
    pub fn clamped(&self) -> Vec2 {
        Vec2::new(self.x.clamp(-1.0, 1.0), self.y.clamp(-1.0, 1.0))
    }

    /// Mouse moved over the page; `activates` is true on pages where any
    /// mouse motion engages the field (bike) rather than only canvas hover (desk).
    pub fn mouse_move(&mut self, activates: bool) {
        if activates {
            self.active = true;
            self.touching = false;
        }
    }

    pub fn mouse_enter(&mut self) {
        self.active = true;
    }

    /// Mouse left the canvas. With `keep_touch` an in-progress touch keeps
    /// the field engaged (bike); otherwise leaving always releases it (desk).
    pub fn mouse_leave(&mut self, keep_touch: bool) {
        if !(keep_touch && self.touching) {
            self.active = false;
        }
    }

    pub fn touch(&mut self) {
        self.active = true;
        self.touching = true;
    }

    pub fn touch_end(&mut self) {
        self.active = false;
        self.touching = false;
    }

    /// Exponentially approach the target strength for the current interaction.
    pub fn smooth_strength(&mut self, hover: f32, touch: f32, alpha: f32) -> f32 {
        let target = match (self.active, self.touching) {
            (false, _) => 0.0,
            (true, true) => touch,
            (true, false) => hover,
        };
        self.strength += (target - self.strength) * alpha;
        self.strength
    }
}
