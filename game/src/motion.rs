//! The square's position and its per-tick update.

use glam::IVec2;

use crate::controls::Controls;

/// Screen position in logical pixels. Unbounded: the square may leave the
/// visible area in any direction.
pub type Position = IVec2;

/// Last resolved direction. Never derived from movement; kept so the state
/// shape stays stable.
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    #[default]
    None,
    Up,
    Left,
    Down,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionState {
    pub position: Position,
    /// Pixels moved per tick. Fixed at construction.
    pub speed: i32,
    pub facing: Facing,
    pub countdown: i32,
}

impl MotionState {
    pub const DEFAULT_SPEED: i32 = 2;

    pub fn new(speed: i32) -> Self {
        Self {
            position: Position::ZERO,
            speed,
            facing: Facing::None,
            countdown: 0,
        }
    }

    /// Next state for one tick with `controls` held.
    ///
    /// Only the first held signal in `up, down, left, right` order moves the
    /// square. "Up" increases `y`, which draws lower on screen.
    pub fn advance(self, controls: Controls) -> MotionState {
        let delta = if controls.up {
            IVec2::new(0, self.speed)
        } else if controls.down {
            IVec2::new(0, -self.speed)
        } else if controls.left {
            IVec2::new(-self.speed, 0)
        } else if controls.right {
            IVec2::new(self.speed, 0)
        } else {
            IVec2::ZERO
        };

        MotionState {
            position: self.position.wrapping_add(delta),
            ..self
        }
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED)
    }
}
