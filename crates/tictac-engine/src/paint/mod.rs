//! Color model shared between the game layer and renderers.
//!
//! Colors are stored linear and premultiplied; constructors convert from the
//! sRGB values artists and layout code write by hand.

pub mod color;

pub use color::Color;
