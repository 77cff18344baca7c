//! Line chart rendering for slide embedding.
//!
//! Charts are drawn with plotters into an in-memory SVG and rasterized
//! to a PNG file, which the deck then embeds as a picture.

pub mod line;

pub use line::LineChart;
