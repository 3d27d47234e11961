//! GPU device + surface management.
//!
//! Creates the wgpu Instance/Adapter/Device/Queue for the studio window,
//! keeps the surface configured across resizes, and hands out one frame at a
//! time for rendering.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
