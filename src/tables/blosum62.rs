// blosum62.rs - BLOSUM62 log-odds similarity table

use super::traits::SubstitutionTable;
use crate::core::alphabet::ALPHABET_SIZE;

/// BLOSUM62 substitution matrix (Henikoff & Henikoff 1992), row/column order
/// `A C D E F G H I K L M N P Q R S T V W Y`.
/// Log-odds scores -4..11; diagonal entries are the per-row maxima.
#[rustfmt::skip]
const BLOSUM62: [[i32; ALPHABET_SIZE]; ALPHABET_SIZE] = [
//   A   C   D   E   F   G   H   I   K   L   M   N   P   Q   R   S   T   V   W   Y
    [ 4,  0, -2, -1, -2,  0, -2, -1, -1, -1, -1, -2, -1, -1, -1,  1,  0,  0, -3, -2], // A
    [ 0,  9, -3, -4, -2, -3, -3, -1, -3, -1, -1, -3, -3, -3, -3, -1, -1, -1, -2, -2], // C
    [-2, -3,  6,  2, -3, -1, -1, -3, -1, -4, -3,  1, -1,  0, -2,  0, -1, -3, -4, -3], // D
    [-1, -4,  2,  5, -3, -2,  0, -3,  1, -3, -2,  0, -1,  2,  0,  0, -1, -2, -3, -2], // E
    [-2, -2, -3, -3,  6, -3, -1,  0, -3,  0,  0, -3, -4, -3, -3, -2, -2, -1,  1,  3], // F
    [ 0, -3, -1, -2, -3,  6, -2, -4, -2, -4, -3,  0, -2, -2, -2,  0, -2, -3, -2, -3], // G
    [-2, -3, -1,  0, -1, -2,  8, -3, -1, -3, -2,  1, -2,  0,  0, -1, -2, -3, -2,  2], // H
    [-1, -1, -3, -3,  0, -4, -3,  4, -3,  2,  1, -3, -3, -3, -3, -2, -1,  3, -3, -1], // I
    [-1, -3, -1,  1, -3, -2, -1, -3,  5, -2, -1,  0, -1,  1,  2,  0, -1, -2, -3, -2], // K
    [-1, -1, -4, -3,  0, -4, -3,  2, -2,  4,  2, -3, -3, -2, -2, -2, -1,  1, -2, -1], // L
    [-1, -1, -3, -2,  0, -3, -2,  1, -1,  2,  5, -2, -2,  0, -1, -1, -1,  1, -1, -1], // M
    [-2, -3,  1,  0, -3,  0,  1, -3,  0, -3, -2,  6, -2,  0,  0,  1,  0, -3, -4, -2], // N
    [-1, -3, -1, -1, -4, -2, -2, -3, -1, -3, -2, -2,  7, -1, -2, -1, -1, -2, -4, -3], // P
    [-1, -3,  0,  2, -3, -2,  0, -3,  1, -2,  0,  0, -1,  5,  1,  0, -1, -2, -2, -1], // Q
    [-1, -3, -2,  0, -3, -2,  0, -3,  2, -2, -1,  0, -2,  1,  5, -1, -1, -3, -3, -2], // R
    [ 1, -1,  0,  0, -2,  0, -1, -2,  0, -2, -1,  1, -1,  0, -1,  4,  1, -2, -3, -2], // S
    [ 0, -1, -1, -1, -2, -2, -2, -1, -1, -1, -1,  0, -1, -1, -1,  1,  5,  0, -2, -2], // T
    [ 0, -1, -3, -2, -1, -3, -3,  3, -2,  1,  1, -3, -2, -2, -3, -2,  0,  4, -3, -1], // V
    [-3, -2, -4, -3,  1, -2, -2, -3, -3, -2, -1, -4, -4, -2, -3, -3, -2, -3, 11,  2], // W
    [-2, -2, -3, -2,  3, -3,  2, -1, -2, -1, -1, -2, -3, -1, -2, -2, -2, -1,  2,  7], // Y
];

/// BLOSUM62 log-odds similarity - larger score means more conserved
/// substitution. Self-similarity is the maximum of each row.
#[derive(Debug, Clone)]
pub struct Blosum62Table;

impl SubstitutionTable for Blosum62Table {
    fn value_at(&self, pos1: usize, pos2: usize) -> i32 {
        BLOSUM62[pos1][pos2]
    }

    fn name(&self) -> &'static str {
        "BLOSUM62"
    }

    fn description(&self) -> &'static str {
        "BLOSUM62 log-odds similarity (-4..11, larger = more conserved)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::{AMINO_ACIDS, ALPHABET_SIZE};
    use crate::tables::UNSCORED;

    #[test]
    fn test_symmetry() {
        let table = Blosum62Table;
        for &a in &AMINO_ACIDS {
            for &b in &AMINO_ACIDS {
                assert_eq!(
                    table.score(a, b),
                    table.score(b, a),
                    "asymmetric at {}/{}",
                    a as char,
                    b as char
                );
            }
        }
    }

    #[test]
    fn test_diagonal_is_row_maximum() {
        // Reflexive similarity is maximal per residue
        let table = Blosum62Table;
        for pos in 0..ALPHABET_SIZE {
            let row_max = (0..ALPHABET_SIZE)
                .map(|other| table.value_at(pos, other))
                .max()
                .unwrap();
            assert_eq!(
                table.value_at(pos, pos),
                row_max,
                "diagonal not maximal for {}",
                AMINO_ACIDS[pos] as char
            );
        }
    }

    #[test]
    fn test_known_values() {
        let table = Blosum62Table;
        assert_eq!(table.score(b'A', b'A'), 4);
        assert_eq!(table.score(b'A', b'W'), -3);
        assert_eq!(table.score(b'W', b'W'), 11);
        assert_eq!(table.score(b'C', b'G'), -3);
    }

    #[test]
    fn test_unknown_residue_is_unscored() {
        let table = Blosum62Table;
        assert_eq!(table.score(b'X', b'A'), UNSCORED);
        assert_eq!(table.score(b'A', b'B'), UNSCORED);
        assert_eq!(table.score(b'-', b'-'), UNSCORED);
    }
}
