// lib.rs - pepdist library root

//! # pepdist - Pairwise positional peptide scoring
//!
//! This library computes dense pairwise score matrices between two
//! collections of amino-acid sequences using fixed 20×20 substitution
//! matrices: Grantham physicochemical distance and BLOSUM62 log-odds
//! similarity.
//!
//! Scoring is strictly positional: for each pair of peptides the
//! per-position table lookups are summed over the shared prefix, truncating
//! to the shorter sequence. There is no gap handling and no alignment
//! search; this is ungapped positional comparison, not alignment.
//!
//! ## Features
//!
//! - **High performance**: rayon-parallel scoring over the flattened cell
//!   index space
//! - **Pluggable tables**: Grantham and BLOSUM62 behind one registry, with
//!   a uniform sentinel policy for non-canonical residues
//! - **Multiple formats**: FASTA, TSV/CSV and plain-list input; TSV, CSV and
//!   JSON output
//!
//! ## Basic Usage
//!
//! ```rust
//! use pepdist::prelude::*;
//!
//! let distances = grantham_distance(&["ACDE", "WYWY"], &["ACDE"]);
//! assert_eq!(distances.get(0, 0), 0);
//!
//! let similarities = blosum62_similarity(&["AW"], &["AW"]);
//! assert_eq!(similarities.get(0, 0), 4 + 11);
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;
pub mod tables;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{
        blosum62_similarity, grantham_distance, score_matrix, score_matrix_with_progress,
        score_pair, ScoreMatrix,
    };
    pub use crate::data::{load_collection, PeptideCollection, PeptideRecord};
    pub use crate::output::write_matrix;
    pub use crate::tables::{Blosum62Table, GranthamTable, SubstitutionTable, TableRegistry, UNSCORED};
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, ValidationResult};
pub use crate::core::{blosum62_similarity, grantham_distance, score_matrix, ScoreMatrix};
pub use crate::data::{PeptideCollection, PeptideRecord};
pub use crate::tables::{SubstitutionTable, TableRegistry, UNSCORED};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "pepdist v{} - Pairwise positional peptide scoring",
        VERSION
    )
}
