//! Shape renderers.

mod common;

pub mod primitive;
pub mod text;
