//! Spatial gate regions.

/// Axis-aligned rectangle over the device plane, given by its center and
/// full width/height. Used to select the edges affected by a local gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateArea {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl GateArea {
    pub fn new(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
        }
    }

    /// Rectangle bounds as (left, right, bottom, top).
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center_x - self.width / 2.0,
            self.center_x + self.width / 2.0,
            self.center_y - self.height / 2.0,
            self.center_y + self.height / 2.0,
        )
    }

    /// Inclusive containment test: points exactly on the rectangle
    /// boundary count as inside.
    pub fn contains(&self, point: (f64, f64)) -> bool {
        let (left, right, bottom, top) = self.bounds();
        left <= point.0 && point.0 <= right && bottom <= point.1 && point.1 <= top
    }
}
