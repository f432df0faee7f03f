use thiserror::Error;

/// Reasons the rendering backend could not be brought up.
///
/// Any of these leaves the product render in its loading state for the
/// lifetime of the mount; nothing retries.
#[derive(Debug, Clone, Error)]
pub enum InitError {
    #[error("rendering backend unavailable: {0}")]
    Unavailable(String),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("device request failed: {0}")]
    Device(String),
    #[error("surface creation failed: {0}")]
    Surface(String),
    #[error("scene upload failed: {0}")]
    Upload(String),
}

/// Per-frame failures. Logged and skipped by the render loop.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("surface lost or outdated")]
    SurfaceLost,
    #[error("frame acquisition timed out")]
    Timeout,
    #[error("frame failed: {0}")]
    Frame(String),
}
