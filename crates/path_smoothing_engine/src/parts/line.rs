use super::PathSegment;
use crate::geometry::rotate;
use glam::DVec2;

/// Gerade Strecke zwischen zwei Punkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePart {
    pub start: DVec2,
    pub end: DVec2,
}

impl LinePart {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }
}

impl PathSegment for LinePart {
    fn start(&self) -> DVec2 {
        self.start
    }

    fn end(&self) -> DVec2 {
        self.end
    }

    fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    fn shifted(&self, delta: DVec2) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    fn rotated(&self, angle: f64) -> Self {
        Self::new(rotate(self.start, angle), rotate(self.end, angle))
    }

    fn point_at(&self, position: f64) -> DVec2 {
        let length = self.length();
        if length == 0.0 {
            return self.start;
        }
        self.start.lerp(self.end, position / length)
    }

    fn curvature_at(&self, _position: f64) -> f64 {
        0.0
    }
}
