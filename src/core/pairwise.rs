// pairwise.rs - Pairwise positional scoring engine

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::tables::{Blosum62Table, GranthamTable, SubstitutionTable};

/// Dense matrix of pairwise scores, shape (|collection1|, |collection2|).
///
/// Row i / column j corresponds to input order of the two collections. Cells
/// are written exactly once during construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl ScoreMatrix {
    fn from_data(rows: usize, cols: usize, data: Vec<i64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows (size of collection1).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (size of collection2).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Score at cell (row, col). Panics on out-of-bounds access.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.data[row * self.cols + col]
    }

    /// One full row of scores.
    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }
}

/// Positional score of one sequence pair: the sum of per-position table
/// lookups over the shared prefix.
///
/// Sequences of unequal length are truncated to the shorter one - excess
/// positions are silently ignored (ungapped positional comparison, not an
/// alignment). Empty overlap scores 0.
pub fn score_pair(seq1: &[u8], seq2: &[u8], table: &dyn SubstitutionTable) -> i64 {
    table.score_sequences(seq1, seq2)
}

/// Calculate the full dense score matrix between two collections.
///
/// Cell (i, j) is `score_pair(collection1[i], collection2[j], table)`. Every
/// cell is a pure function of its own pair, so the flattened (i, j) index
/// space is mapped in parallel with no coordination between cells. An empty
/// collection on either side yields a matrix with the corresponding zero
/// dimension, not an error.
pub fn score_matrix<S1, S2>(
    collection1: &[S1],
    collection2: &[S2],
    table: &dyn SubstitutionTable,
) -> ScoreMatrix
where
    S1: AsRef<[u8]> + Sync,
    S2: AsRef<[u8]> + Sync,
{
    compute_matrix(collection1, collection2, table, None)
}

/// Same computation as [`score_matrix`] with a progress bar, for interactive
/// runs over large collections.
pub fn score_matrix_with_progress<S1, S2>(
    collection1: &[S1],
    collection2: &[S2],
    table: &dyn SubstitutionTable,
) -> ScoreMatrix
where
    S1: AsRef<[u8]> + Sync,
    S2: AsRef<[u8]> + Sync,
{
    let total_cells = collection1.len() * collection2.len();
    let pb = ProgressBar::new(total_cells as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let matrix = compute_matrix(collection1, collection2, table, Some(&pb));
    pb.finish_with_message("✅ Score matrix computation completed!");
    matrix
}

fn compute_matrix<S1, S2>(
    collection1: &[S1],
    collection2: &[S2],
    table: &dyn SubstitutionTable,
    progress: Option<&ProgressBar>,
) -> ScoreMatrix
where
    S1: AsRef<[u8]> + Sync,
    S2: AsRef<[u8]> + Sync,
{
    let rows = collection1.len();
    let cols = collection2.len();
    let total_cells = rows * cols;

    if total_cells == 0 {
        return ScoreMatrix::from_data(rows, cols, Vec::new());
    }

    // Progress tracking with reduced contention - update every 1%
    let update_interval = std::cmp::max(1, total_cells / 100);
    let progress_counter = AtomicUsize::new(0);

    // Data-parallel map over the flattened (i, j) index space; collect
    // preserves index order, so each cell lands exactly at row * cols + col.
    let data: Vec<i64> = (0..total_cells)
        .into_par_iter()
        .map(|cell| {
            let i = cell / cols;
            let j = cell % cols;
            let score = score_pair(collection1[i].as_ref(), collection2[j].as_ref(), table);

            if let Some(pb) = progress {
                let count = progress_counter.fetch_add(1, Ordering::Relaxed) + 1;
                if count % update_interval == 0 {
                    pb.set_position(count as u64);
                }
            }

            score
        })
        .collect();

    ScoreMatrix::from_data(rows, cols, data)
}

/// Pairwise Grantham distances between two peptide collections.
pub fn grantham_distance<S1, S2>(collection1: &[S1], collection2: &[S2]) -> ScoreMatrix
where
    S1: AsRef<[u8]> + Sync,
    S2: AsRef<[u8]> + Sync,
{
    score_matrix(collection1, collection2, &GranthamTable)
}

/// Pairwise BLOSUM62 similarities between two peptide collections.
pub fn blosum62_similarity<S1, S2>(collection1: &[S1], collection2: &[S2]) -> ScoreMatrix
where
    S1: AsRef<[u8]> + Sync,
    S2: AsRef<[u8]> + Sync,
{
    score_matrix(collection1, collection2, &Blosum62Table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::UNSCORED;

    #[test]
    fn test_single_residue_cells() {
        let distances = grantham_distance(&["A"], &["W"]);
        assert_eq!(distances.get(0, 0), 148);

        let similarities = blosum62_similarity(&["A"], &["W"]);
        assert_eq!(similarities.get(0, 0), -3);
    }

    #[test]
    fn test_self_distance_is_zero() {
        let matrix = grantham_distance(&["AC"], &["AC"]);
        assert_eq!(matrix.get(0, 0), 0);

        let matrix = grantham_distance(&["MNPQRSTVWY"], &["MNPQRSTVWY"]);
        assert_eq!(matrix.get(0, 0), 0);
    }

    #[test]
    fn test_positional_sum() {
        // A-A = 4, C-G = -3 under BLOSUM62
        let matrix = blosum62_similarity(&["AC"], &["AG"]);
        assert_eq!(matrix.get(0, 0), 1);
    }

    #[test]
    fn test_truncates_to_shorter_sequence() {
        let full = grantham_distance(&["ACD"], &["ACDEF"]);
        let prefix = grantham_distance(&["ACD"], &["ACD"]);
        assert_eq!(full.get(0, 0), prefix.get(0, 0));

        // Truncation also applies when collection1 holds the longer sequence
        let flipped = grantham_distance(&["ACDEF"], &["ACD"]);
        assert_eq!(flipped.get(0, 0), prefix.get(0, 0));
    }

    #[test]
    fn test_empty_sequence_scores_zero() {
        let matrix = blosum62_similarity(&["", "AW"], &["ACDEF"]);
        assert_eq!(matrix.get(0, 0), 0);
        assert_ne!(matrix.get(1, 0), 0);
    }

    #[test]
    fn test_empty_collections_yield_empty_dimensions() {
        let none: [&str; 0] = [];

        let matrix = grantham_distance(&none, &["ACDEF"]);
        assert_eq!(matrix.rows(), 0);
        assert_eq!(matrix.cols(), 1);
        assert!(matrix.is_empty());

        let matrix = blosum62_similarity(&["ACDEF"], &none);
        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cols(), 0);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_unknown_residue_contributes_sentinel() {
        // Isolate via single-position sequences
        let matrix = blosum62_similarity(&["X"], &["A"]);
        assert_eq!(matrix.get(0, 0), UNSCORED as i64);

        // One bad position folded into an otherwise valid pair
        let matrix = blosum62_similarity(&["AX"], &["AA"]);
        assert_eq!(matrix.get(0, 0), 4 + UNSCORED as i64);

        // Grantham applies the same policy
        let matrix = grantham_distance(&["X"], &["A"]);
        assert_eq!(matrix.get(0, 0), UNSCORED as i64);
    }

    #[test]
    fn test_self_similarity_sums_row_maxima() {
        use crate::core::alphabet::{index_of, ALPHABET_SIZE};

        // Scoring a peptide against itself under BLOSUM62 accumulates each
        // residue's row maximum, since self-similarity is maximal per position
        let peptide = "ACWY";
        let matrix = blosum62_similarity(&[peptide], &[peptide]);

        let table = Blosum62Table;
        let expected: i64 = peptide
            .bytes()
            .map(|aa| {
                let pos = index_of(aa).unwrap();
                (0..ALPHABET_SIZE)
                    .map(|other| table.value_at(pos, other))
                    .max()
                    .unwrap() as i64
            })
            .sum();

        assert_eq!(matrix.get(0, 0), expected);
    }

    #[test]
    fn test_matrix_shape_and_ordering() {
        let matrix = grantham_distance(&["A", "W", "AC"], &["A", "C"]);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 2);

        // Row/column order follows input order
        assert_eq!(matrix.get(0, 0), 0); // A vs A
        assert_eq!(matrix.get(0, 1), 195); // A vs C
        assert_eq!(matrix.get(1, 0), 148); // W vs A
        assert_eq!(matrix.get(1, 1), 215); // W vs C
        assert_eq!(matrix.get(2, 0), 0); // AC vs A (truncated to A/A)
        assert_eq!(matrix.get(2, 1), 195); // AC vs C (truncated to A/C)

        assert_eq!(matrix.row(1), &[148, 215]);
        assert_eq!(matrix.iter_rows().count(), 3);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let peptides1 = ["ACDEFG", "WYHK", "MILV", ""];
        let peptides2 = ["GFEDCA", "KHYW", "VLIM"];
        let table = GranthamTable;

        let parallel = score_matrix(&peptides1, &peptides2, &table);
        for (i, seq1) in peptides1.iter().enumerate() {
            for (j, seq2) in peptides2.iter().enumerate() {
                let sequential = score_pair(seq1.as_bytes(), seq2.as_bytes(), &table);
                assert_eq!(parallel.get(i, j), sequential);
            }
        }
    }
}
