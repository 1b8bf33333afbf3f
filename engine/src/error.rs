use thiserror::Error;

/// Fatal engine failures. None of these are retried: the event loop stops and
/// the error is handed back to the caller of [`crate::EngineContext::run`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("event loop failure: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to acquire GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface is not supported by the chosen adapter")]
    UnsupportedSurface,

    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
