use thiserror::Error;

/// Failures that end the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find an appropriate adapter")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture format")]
    NoSurfaceFormat,

    #[error("failed to acquire frame: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[cfg(feature = "gui")]
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Rejected command line values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected `r,g,b` with each channel in 0..=255, got `{0}`")]
    Color(String),

    #[error("expected `WIDTHxHEIGHT` with non-zero dimensions, got `{0}`")]
    Size(String),
}

pub type Result<T> = std::result::Result<T, Error>;
