use thiserror::Error;

/// Failures during renderer bring-up. These are all fatal for the run;
/// the binary reports them and exits.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to acquire GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
