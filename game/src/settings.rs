use engine::{EngineConfig, EngineError};
use serde::Deserialize;

/// Settings baked into the binary.
pub const EMBEDDED: &str = include_str!("../mazegame.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Logical screen size reported to the engine.
    pub screen_width: u32,
    pub screen_height: u32,
    pub speed: i32,
    /// Side length of the square, in logical pixels.
    pub square_size: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            speed: 2,
            square_size: 20,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub game: GameSettings,
}

impl Settings {
    pub fn from_toml_str(source: &str) -> Result<Self, EngineError> {
        Ok(toml::from_str(source)?)
    }

    pub fn embedded() -> Result<Self, EngineError> {
        Self::from_toml_str(EMBEDDED)
    }
}
