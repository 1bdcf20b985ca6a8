//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in layout pixels (bottom-left origin, +Y up).
//! - Every draw binds a uniform slot holding the projection and its color.

mod ctx;
pub mod shapes;
pub mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::primitive::PrimitiveRenderer;
pub use shapes::text::TextRenderer;
