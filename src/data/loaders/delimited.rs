// delimited.rs - CSV/TSV loader for peptide collections

use std::path::Path;

use crate::data::collection::{PeptideCollection, PeptideRecord};

/// Load a peptide collection from a delimited file with a header row.
///
/// Columns named `id` and `sequence` (case-insensitive) are used when
/// present; otherwise the first column is taken as the id and the second as
/// the sequence. Residues are normalized to uppercase.
pub fn load_delimited(path: &Path, delimiter: u8) -> Result<PeptideCollection, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| format!("Failed to open table {}: {}", path.display(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read header of {}: {}", path.display(), e))?
        .clone();

    if headers.len() < 2 {
        return Err(format!(
            "Table {} must have at least 2 columns (id, sequence)",
            path.display()
        ));
    }

    let id_col = find_column(&headers, "id").unwrap_or(0);
    let seq_col = find_column(&headers, "sequence").unwrap_or(1);

    let mut collection = PeptideCollection::new();

    for (line_num, record_result) in reader.records().enumerate() {
        let record = record_result
            .map_err(|e| format!("Invalid row {} in {}: {}", line_num + 2, path.display(), e))?;

        let id = record
            .get(id_col)
            .ok_or_else(|| format!("Row {} is missing the id column", line_num + 2))?
            .to_string();
        let sequence = record
            .get(seq_col)
            .ok_or_else(|| format!("Row {} is missing the sequence column", line_num + 2))?
            .to_ascii_uppercase()
            .into_bytes();

        collection.push(PeptideRecord::new(id, sequence));
    }

    Ok(collection)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}
