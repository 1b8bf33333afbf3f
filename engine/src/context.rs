use std::sync::Arc;
use std::time::Instant;

use gilrs::Gilrs;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::clock::TickClock;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::frame::Frame;
use crate::game::Game;
use crate::input::Input;
use crate::render::graphics::{create_graphics, Graphics, Presented};

enum State {
    Init,
    Ready(Graphics),
}

pub struct EngineContext {
    config: EngineConfig,
    event_loop: EventLoop<()>,
}

struct App<G: Game> {
    state: State,
    config: EngineConfig,
    game: G,
    input: Input,
    gamepads: Option<Gilrs>,
    clock: TickClock,
    last_frame: Option<Instant>,
    delta_time: f32,
    error: Option<EngineError>,
}

impl<G: Game> App<G> {
    fn new(config: EngineConfig, game: G) -> Self {
        let gamepads = match Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(err) => {
                log::warn!("Gamepad support unavailable: {err}");
                None
            }
        };
        let clock = TickClock::new(config.ticks_per_second, config.max_ticks_per_frame);

        Self {
            state: State::Init,
            config,
            game,
            input: Input::new(),
            gamepads,
            clock,
            last_frame: None,
            delta_time: 0.0,
            error: None,
        }
    }

    /// Record the first fatal error and stop the loop. The error is reported
    /// once, by whoever receives it from [`EngineContext::run`].
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        record_fatal(&mut self.error, err);
        event_loop.exit();
    }

    fn poll_gamepads(&mut self) {
        if let Some(gilrs) = &mut self.gamepads {
            while let Some(gilrs::Event { id, event, .. }) = gilrs.next_event() {
                self.input.process_gamepad(id, &event);
            }
        }
    }

    /// Run due ticks, then draw and present once.
    fn frame(&mut self) -> Result<(), EngineError> {
        self.poll_gamepads();

        let State::Ready(gfx) = &mut self.state else {
            return Ok(());
        };

        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or_else(|| self.clock.step());
        self.last_frame = Some(now);
        self.delta_time = elapsed.as_secs_f32();
        log::trace!("Frame delta {:.4}s", self.delta_time);

        for _ in 0..self.clock.advance(elapsed) {
            self.game.update(&self.input)?;
        }

        let (width, height) = gfx.size();
        let (logical_width, logical_height) = self.game.layout(width, height);
        let mut frame = Frame::new(logical_width, logical_height);
        self.game.draw(&mut frame);

        if gfx.present(&frame)? == Presented::Reconfigured {
            log::debug!("Surface reconfigured, frame dropped");
        }
        gfx.request_redraw();
        Ok(())
    }

    fn resized(&mut self, size: PhysicalSize<u32>) {
        if let State::Ready(gfx) = &mut self.state {
            gfx.resize(size);
        }
    }
}

/// Keep the first error; anything after it is a consequence of shutting down.
fn record_fatal(slot: &mut Option<EngineError>, err: EngineError) {
    match slot {
        None => *slot = Some(err),
        Some(first) => log::debug!("Dropping error after fatal {first}: {err}"),
    }
}

impl<G: Game> ApplicationHandler for App<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !matches!(self.state, State::Init) {
            return;
        }

        let win_attr = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = match event_loop.create_window(win_attr) {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, err.into()),
        };

        match pollster::block_on(create_graphics(window, self.config.vsync)) {
            Ok(graphics) => {
                log::info!("Window and graphics ready");
                graphics.request_redraw();
                self.state = State::Ready(graphics);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::Resized(size) => self.resized(size),
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.frame() {
                    self.fail(event_loop, err);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input
                    .process_key(event.physical_key, event.state, event.repeat);
            }
            WindowEvent::Focused(false) => self.input.clear(),
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // gilrs only queues events; drain them even while no redraw is pending
        self.poll_gamepads();
    }
}

impl EngineContext {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        // Allows the setting of the log level through RUST_LOG env var.
        // It also allows wgpu logs to be seen.
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
            .try_init();

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        Ok(Self { config, event_loop })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Drive `game` on the current thread until the window closes or a fatal
    /// error occurs.
    pub fn run<G: Game>(self, game: G) -> Result<(), EngineError> {
        let mut app = App::new(self.config, game);
        self.event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(err) => Err(err),
            None => {
                log::info!("Event loop finished");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fatal_error_is_the_one_returned() {
        let mut slot = None;

        record_fatal(&mut slot, EngineError::UnsupportedSurface);
        record_fatal(&mut slot, EngineError::Surface(wgpu::SurfaceError::Lost));

        assert!(matches!(slot, Some(EngineError::UnsupportedSurface)));
    }
}
