use crate::error::EngineError;
use crate::frame::Frame;
use crate::input::Input;

/// Per-frame callbacks a game hands to the engine.
///
/// The engine calls `update` for every due tick, then `draw` once, then
/// presents. `layout` is asked each frame for the logical screen size given
/// the current window size in physical pixels.
pub trait Game {
    /// Advance game state by one tick. An error is fatal.
    fn update(&mut self, input: &Input) -> Result<(), EngineError>;

    fn draw(&self, frame: &mut Frame);

    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32);
}
