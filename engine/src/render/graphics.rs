use std::sync::Arc;

use wgpu::util::DeviceExt;
use winit::{dpi::PhysicalSize, window::Window};

use super::pipeline::create_render_pipeline;
use super::vertex::{build_vertices, color_for_surface};
use crate::error::EngineError;
use crate::frame::{Color, Frame};
use crate::viewport::Viewport;

/// Outcome of presenting one frame that the caller may need to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented {
    Shown,
    /// Surface was lost or outdated and has been reconfigured; nothing shown.
    Reconfigured,
    /// Acquiring the next texture timed out; nothing shown.
    Skipped,
}

pub struct Graphics {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    linear_output: bool,
}

pub async fn create_graphics(window: Arc<Window>, vsync: bool) -> Result<Graphics, EngineError> {
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window.clone())?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        })
        .await?;
    log::info!("Using adapter: {:?}", adapter.get_info());

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("engine_device"),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                .using_resolution(adapter.limits()),
            ..Default::default()
        })
        .await?;

    let size = window.inner_size();
    let mut config = surface
        .get_default_config(&adapter, size.width.max(1), size.height.max(1))
        .ok_or(EngineError::UnsupportedSurface)?;
    config.present_mode = if vsync {
        wgpu::PresentMode::AutoVsync
    } else {
        wgpu::PresentMode::AutoNoVsync
    };
    surface.configure(&device, &config);

    let pipeline = create_render_pipeline(&device, config.format);
    let linear_output = config.format.is_srgb();

    Ok(Graphics {
        window,
        surface,
        device,
        queue,
        config,
        pipeline,
        linear_output,
    })
}

impl Graphics {
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Current surface size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        log::debug!("Surface resized to {}x{}", size.width, size.height);
    }

    /// Draw `frame` scaled into the window; anything outside the logical
    /// screen is cleared to black.
    pub fn present(&mut self, frame: &Frame) -> Result<Presented, EngineError> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.resize(self.window.inner_size());
                return Ok(Presented::Reconfigured);
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(Presented::Skipped),
            Err(err) => return Err(err.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let viewport = Viewport::fit(frame.size(), self.size());
        let vertices = build_vertices(frame, &viewport, self.linear_output);
        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("frame_vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let [r, g, b, a] = color_for_surface(Color::BLACK, self.linear_output);
        let clear = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                ..Default::default()
            });
            pass.set_pipeline(&self.pipeline);
            pass.set_vertex_buffer(0, vertex_buffer.slice(..));
            pass.draw(0..vertices.len() as u32, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        self.window.pre_present_notify();
        output.present();

        Ok(Presented::Shown)
    }
}
