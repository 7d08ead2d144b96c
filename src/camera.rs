/// View transform between screen space and world space.
///
/// `target` is the world point shown at `offset` on screen; `zoom` scales
/// world units to screen units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub target: (f32, f32),
    pub offset: (f32, f32),
    pub zoom: f32,
}

pub const MIN_ZOOM: f32 = 0.125;
pub const MAX_ZOOM: f32 = 64.0;

impl Camera {
    pub fn new(offset: (f32, f32)) -> Self {
        Self {
            target: (0.0, 0.0),
            offset,
            zoom: 1.0,
        }
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.target.0 += dx;
        self.target.1 += dy;
    }

    /// Zooms by a wheel delta: each notch scales by 1.25, out for negative
    /// deltas.
    pub fn zoom_by(&mut self, wheel: f32) {
        if wheel == 0.0 {
            return;
        }
        let mut factor = 1.0 + 0.25 * wheel.abs();
        if wheel < 0.0 {
            factor = 1.0 / factor;
        }
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn screen_to_world(&self, x: f32, y: f32) -> (f32, f32) {
        (
            (x - self.offset.0) / self.zoom + self.target.0,
            (y - self.offset.1) / self.zoom + self.target.1,
        )
    }
}
