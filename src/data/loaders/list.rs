// list.rs - Plain-list loader for peptide collections

use std::path::Path;

use crate::data::collection::{PeptideCollection, PeptideRecord};

/// Load a peptide collection from a plain text file, one peptide per line.
/// Blank lines and `#` comments are skipped; ids are synthesized as `seq_N`
/// from the 1-based position among the kept lines.
pub fn load_list(path: &Path) -> Result<PeptideCollection, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read peptide list {}: {}", path.display(), e))?;

    let mut collection = PeptideCollection::new();

    for line in content.lines() {
        let peptide = line.trim();
        if peptide.is_empty() || peptide.starts_with('#') {
            continue;
        }

        let id = format!("seq_{}", collection.len() + 1);
        collection.push(PeptideRecord::new(
            id,
            peptide.to_ascii_uppercase().into_bytes(),
        ));
    }

    Ok(collection)
}
