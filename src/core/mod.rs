// mod.rs - Core scoring engine module

pub mod alphabet;
pub mod pairwise;

// Re-export main types for convenience
pub use pairwise::{
    blosum62_similarity, grantham_distance, score_matrix, score_matrix_with_progress, score_pair,
    ScoreMatrix,
};
