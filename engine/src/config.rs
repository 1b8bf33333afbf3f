use serde::Deserialize;

/// Window and loop settings.
///
/// Every field has a default, so an empty table is a valid configuration.
/// Usually read as the `[engine]` table of a game's settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub title: String,
    /// Initial inner size of the window, in logical pixels.
    pub window_width: u32,
    pub window_height: u32,
    /// Fixed update rate. Draws happen once per redraw regardless.
    pub ticks_per_second: u32,
    /// Upper bound on catch-up updates run before a single draw.
    pub max_ticks_per_frame: u32,
    pub vsync: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: String::from("engine"),
            window_width: 640,
            window_height: 480,
            ticks_per_second: 60,
            max_ticks_per_frame: 4,
            vsync: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn empty_source_gives_defaults() {
        let config = toml::from_str::<EngineConfig>("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_source_keeps_remaining_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            title = "demo"
            ticks_per_second = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "demo");
        assert_eq!(config.ticks_per_second, 30);
        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, 480);
        assert!(config.vsync);
    }

    #[test]
    fn parse_failure_becomes_a_config_error() {
        let err = toml::from_str::<EngineConfig>("window_width = \"wide\"").unwrap_err();
        assert!(matches!(EngineError::from(err), EngineError::Config(_)));
    }
}
