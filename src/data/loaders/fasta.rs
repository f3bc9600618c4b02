// fasta.rs - FASTA loader for peptide collections

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bio::io::fasta;

use crate::data::collection::{PeptideCollection, PeptideRecord};

/// Load a peptide collection from a FASTA file. Record ids come from the
/// FASTA headers; residues are normalized to uppercase.
pub fn load_fasta(path: &Path) -> Result<PeptideCollection, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open FASTA file {}: {}", path.display(), e))?;

    let reader = fasta::Reader::new(BufReader::new(file));
    let mut collection = PeptideCollection::new();

    for record_result in reader.records() {
        let record = record_result
            .map_err(|e| format!("Invalid FASTA record in {}: {}", path.display(), e))?;

        let sequence = record.seq().to_ascii_uppercase();
        collection.push(PeptideRecord::new(record.id().to_string(), sequence));
    }

    Ok(collection)
}
