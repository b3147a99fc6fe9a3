//! Inference module for mushroom species identification.

mod classifier;
mod model;

pub use classifier::SpeciesClassifier;
pub use model::{Model, OrtModel};
