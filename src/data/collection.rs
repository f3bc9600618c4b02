// collection.rs - Peptide record and collection model

use regex::Regex;

use crate::core::alphabet;

/// A single peptide with its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeptideRecord {
    pub id: String,
    pub sequence: Vec<u8>,
}

impl PeptideRecord {
    pub fn new(id: String, sequence: Vec<u8>) -> Self {
        Self { id, sequence }
    }

    /// Number of residues outside the canonical 20-letter alphabet.
    pub fn non_canonical_count(&self) -> usize {
        alphabet::count_non_canonical(&self.sequence)
    }
}

/// Ordered collection of peptides. Insertion order defines row/column order
/// in the score matrix produced from this collection.
#[derive(Debug, Clone, Default)]
pub struct PeptideCollection {
    pub records: Vec<PeptideRecord>,
}

impl PeptideCollection {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a collection from bare sequences, synthesizing `seq_N` ids.
    pub fn from_sequences<S: AsRef<str>>(sequences: &[S]) -> Self {
        let records = sequences
            .iter()
            .enumerate()
            .map(|(n, seq)| {
                PeptideRecord::new(format!("seq_{}", n + 1), seq.as_ref().as_bytes().to_vec())
            })
            .collect();
        Self { records }
    }

    pub fn push(&mut self, record: PeptideRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record identifiers in collection order.
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    /// Sequences as byte slices in collection order, ready for the scorer.
    pub fn sequences(&self) -> Vec<&[u8]> {
        self.records.iter().map(|r| r.sequence.as_slice()).collect()
    }

    /// Keep only records whose id passes the include/exclude regex filters.
    /// Returns the number of records removed.
    pub fn filter_ids(&mut self, include: Option<&Regex>, exclude: Option<&Regex>) -> usize {
        let before = self.records.len();
        self.records.retain(|record| {
            if let Some(re) = include {
                if !re.is_match(&record.id) {
                    return false;
                }
            }
            if let Some(re) = exclude {
                if re.is_match(&record.id) {
                    return false;
                }
            }
            true
        });
        before - self.records.len()
    }

    /// Records containing residues outside the canonical alphabet, with the
    /// offending residue count. Such records can produce sentinel-poisoned
    /// cells in the score matrix.
    pub fn non_canonical_records(&self) -> Vec<(&str, usize)> {
        self.records
            .iter()
            .filter_map(|record| {
                let count = record.non_canonical_count();
                (count > 0).then(|| (record.id.as_str(), count))
            })
            .collect()
    }

    /// Fail if any record contains a residue outside the canonical alphabet.
    pub fn check_canonical(&self) -> Result<(), String> {
        let bad = self.non_canonical_records();
        if bad.is_empty() {
            return Ok(());
        }
        let summary: Vec<String> = bad
            .iter()
            .take(5)
            .map(|(id, count)| format!("{} ({} residues)", id, count))
            .collect();
        Err(format!(
            "{} record(s) contain non-canonical residues: {}{}",
            bad.len(),
            summary.join(", "),
            if bad.len() > 5 { ", ..." } else { "" }
        ))
    }
}
