//! wgpu device and window surface.
//!
//! [`Gpu`] owns the device, queue and surface of the single game window and
//! hands out one [`GpuFrame`] per redraw.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
