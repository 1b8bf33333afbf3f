mod controls;
mod demo;
mod motion;
mod settings;

use anyhow::Context;
use engine::EngineContext;

use crate::demo::MazeGame;
use crate::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::embedded().context("embedded settings are invalid")?;

    // ---- Create engine context (game owns this) ----
    let ctx = EngineContext::new(settings.engine).context("failed to start the engine")?;
    log::info!("Starting {}", ctx.config().title);

    let game = MazeGame::new(&settings.game);
    ctx.run(game).context("engine stopped with an error")?;
    Ok(())
}
