//! GPU rendering subsystem.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Shaders convert to NDC using a viewport uniform.

mod ctx;
mod gradient;

pub use ctx::{RenderCtx, RenderTarget};
pub use gradient::GradientRenderer;
