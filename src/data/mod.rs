// mod.rs - Data structures module

pub mod collection;
pub mod loaders;

// Re-export main types for convenience
pub use collection::{PeptideCollection, PeptideRecord};
pub use loaders::load_collection;
