// Menu normalization: raw transcription document → clean category/item tree.

pub mod classify;
pub mod handlers;
pub mod language;
pub mod model;
pub mod normalizer;
pub mod source;

pub use normalizer::normalize;
pub use source::{FileMenuSource, MenuSource};
