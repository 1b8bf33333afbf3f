//! Small windowing and presentation layer for 2D games.
//!
//! A game implements [`Game`] and hands itself to [`EngineContext::run`];
//! the engine owns the window, the event loop, input tracking and the GPU.

pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod frame;
pub mod game;
pub mod input;
pub mod render;
pub mod viewport;

pub use config::EngineConfig;
pub use context::EngineContext;
pub use error::EngineError;
pub use frame::{Color, Frame, Rect};
pub use game::Game;
pub use input::Input;
pub use viewport::Viewport;

pub use winit::keyboard::KeyCode;
