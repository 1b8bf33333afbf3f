use engine::{Color, EngineError, Frame, Game, Input};

use crate::controls::Controls;
use crate::motion::MotionState;
use crate::settings::GameSettings;

/// A red square pushed around a black screen.
pub struct MazeGame {
    state: MotionState,
    screen: (u32, u32),
    square_size: f32,
}

impl MazeGame {
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            state: MotionState::new(settings.speed),
            screen: (settings.screen_width, settings.screen_height),
            square_size: settings.square_size as f32,
        }
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// One tick with an explicit snapshot, independent of where it came from.
    pub fn tick(&mut self, controls: Controls) {
        self.state = self.state.advance(controls);
    }
}

impl Game for MazeGame {
    fn update(&mut self, input: &Input) -> Result<(), EngineError> {
        self.tick(Controls::sample(input));
        log::trace!("Square at {}", self.state().position);
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        frame.fill(Color::BLACK);
        frame.draw_rect(
            self.state.position.x as f32,
            self.state.position.y as f32,
            self.square_size,
            self.square_size,
            Color::RED,
        );
    }

    fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        self.screen
    }
}
