//! Core document model, geometry, and color types for building a
//! presentation in memory before PPTX serialization.

pub mod color;
pub mod error;
pub mod geometry;
pub mod types;

pub use color::Rgb;
pub use error::{Error, Result};
pub use geometry::{Emu, Frame};
pub use types::{
    Align, AutoShape, Deck, Font, ImageData, ImageFormat, Paragraph, Picture, Run, Shape,
    ShapeGeometry, Slide, TextBox, TextFrame,
};
