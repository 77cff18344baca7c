//! Image acquisition for slide embedding.
//!
//! Downloads remote images over plain HTTP GET and loads rendered
//! chart files from disk, probing each payload for its format and
//! pixel dimensions so layout code can derive aspect-correct frames.

pub mod acquire;

pub use acquire::{fetch, load, MediaImage};
