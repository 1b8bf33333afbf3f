//! Mapping from the game's logical screen onto the physical surface.

use glam::Vec2;

/// Uniform scale plus centering offset that fits a logical screen inside a
/// physical surface, leaving black bars on the long axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    /// Top-left of the logical screen on the surface, in physical pixels.
    pub offset: Vec2,
    pub physical: Vec2,
}

impl Viewport {
    pub fn fit(logical: (u32, u32), physical: (u32, u32)) -> Self {
        let logical = Vec2::new(logical.0 as f32, logical.1 as f32);
        let physical = Vec2::new(physical.0 as f32, physical.1 as f32);

        if logical.x <= 0.0 || logical.y <= 0.0 || physical.x <= 0.0 || physical.y <= 0.0 {
            return Self {
                scale: 0.0,
                offset: Vec2::ZERO,
                physical,
            };
        }

        let scale = (physical.x / logical.x).min(physical.y / logical.y);
        let offset = (physical - logical * scale) * 0.5;
        Self {
            scale,
            offset,
            physical,
        }
    }

    /// Logical pixel -> physical pixel.
    pub fn to_physical(&self, logical: Vec2) -> Vec2 {
        self.offset + logical * self.scale
    }

    /// Logical pixel -> clip space (x right, y up, both in [-1, 1] on
    /// the surface).
    pub fn to_ndc(&self, logical: Vec2) -> Vec2 {
        if self.physical.x <= 0.0 || self.physical.y <= 0.0 {
            return Vec2::ZERO;
        }
        let p = self.to_physical(logical) / self.physical;
        Vec2::new(p.x * 2.0 - 1.0, 1.0 - p.y * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_size_is_identity() {
        let vp = Viewport::fit((640, 480), (640, 480));
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset, Vec2::ZERO);
        assert_eq!(vp.to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(640.0, 480.0)), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn wide_window_gets_side_bars() {
        let vp = Viewport::fit((640, 480), (1280, 720));
        assert_eq!(vp.scale, 1.5);
        assert_eq!(vp.offset, Vec2::new(160.0, 0.0));
        assert_eq!(vp.to_physical(Vec2::new(20.0, 20.0)), Vec2::new(190.0, 30.0));
    }

    #[test]
    fn tall_window_gets_top_and_bottom_bars() {
        let vp = Viewport::fit((640, 480), (640, 960));
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset, Vec2::new(0.0, 240.0));
    }

    #[test]
    fn minimized_window_does_not_produce_nan() {
        let vp = Viewport::fit((640, 480), (0, 0));
        assert_eq!(vp.scale, 0.0);
        let ndc = vp.to_ndc(Vec2::new(10.0, 10.0));
        assert!(!ndc.x.is_nan() && !ndc.y.is_nan());
    }
}
