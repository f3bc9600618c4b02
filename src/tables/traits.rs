// traits.rs - Core trait for the substitution table system

use std::fmt::Debug;

use crate::core::alphabet;

/// Sentinel score meaning "could not be scored due to a non-canonical residue".
///
/// Both built-in tables fold this value into the running sum when either
/// residue of a position falls outside the canonical alphabet. Any cell whose
/// pair contained such a position is unreliable and callers must treat it as
/// unscored rather than as a legitimate similarity or distance.
pub const UNSCORED: i32 = -999;

/// Trait for pairwise residue scoring strategies.
/// This allows pluggable substitution matrices behind one lookup shape.
pub trait SubstitutionTable: Send + Sync + Debug {
    /// Raw matrix lookup by alphabet positions (both in `0..20`).
    fn value_at(&self, pos1: usize, pos2: usize) -> i32;

    /// Get a human-readable name for this table
    fn name(&self) -> &'static str;

    /// Get a description of this table
    fn description(&self) -> &'static str;

    /// Score a pair of residues.
    ///
    /// Returns [`UNSCORED`] when either residue is outside the canonical
    /// alphabet. The same guard applies to every table - unknown residues are
    /// never allowed to reach the matrix lookup.
    fn score(&self, a: u8, b: u8) -> i32 {
        match (alphabet::index_of(a), alphabet::index_of(b)) {
            (Some(pos1), Some(pos2)) => self.value_at(pos1, pos2),
            _ => UNSCORED,
        }
    }

    /// Positional score of two sequences: the sum of `score` over the shared
    /// prefix. Sequences of unequal length are truncated to the shorter one
    /// (a deliberate policy of ungapped positional comparison, not an
    /// alignment); the excess positions contribute nothing. An empty overlap
    /// sums to 0.
    fn score_sequences(&self, seq1: &[u8], seq2: &[u8]) -> i64 {
        seq1.iter()
            .zip(seq2.iter())
            .map(|(&a, &b)| self.score(a, b) as i64)
            .sum()
    }
}
