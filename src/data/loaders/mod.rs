// mod.rs - Collection loaders module

pub mod delimited;
pub mod fasta;
pub mod list;

use std::path::Path;

use crate::data::collection::PeptideCollection;

pub use delimited::load_delimited;
pub use fasta::load_fasta;
pub use list::load_list;

/// Load a peptide collection, inferring the format from the file extension:
/// `.fasta`/`.fa`/`.faa` FASTA, `.tsv` tab-delimited, `.csv` comma-delimited,
/// anything else a plain list of one peptide per line.
pub fn load_collection(path: &Path) -> Result<PeptideCollection, String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let collection = match extension.as_deref() {
        Some("fasta") | Some("fa") | Some("faa") => load_fasta(path)?,
        Some("tsv") => load_delimited(path, b'\t')?,
        Some("csv") => load_delimited(path, b',')?,
        _ => load_list(path)?,
    };

    println!(
        "📄 {}: {} peptides loaded",
        path.display(),
        collection.len()
    );
    Ok(collection)
}
