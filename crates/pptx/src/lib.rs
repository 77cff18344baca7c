//! PPTX (Office Open XML) writer backend.
//!
//! Serializes a [`deck_core::Deck`] into a .pptx file: a ZIP package of
//! XML parts plus embedded media.

pub mod parts;
pub mod slide;
pub mod writer;

mod xml;

pub use writer::PptxWriter;
