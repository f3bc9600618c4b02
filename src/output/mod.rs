// mod.rs - Output formatters module

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::ScoreMatrix;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Write score matrix in a delimited format (TSV or CSV)
fn write_delimited(
    file_path: &str,
    separator: char,
    row_ids: &[&str],
    col_ids: &[&str],
    matrix: &ScoreMatrix,
    table_name: &str,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))
        .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Table: {}", table_name).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# pepdist v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;

    // Write header
    write!(writer, "Peptide").map_err(|e| format!("Write error: {}", e))?;
    for col_id in col_ids {
        write!(writer, "{}{}", separator, col_id).map_err(|e| format!("Write error: {}", e))?;
    }
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;

    // Write matrix
    for (i, row_id) in row_ids.iter().enumerate() {
        write!(writer, "{}", row_id).map_err(|e| format!("Write error: {}", e))?;
        for score in matrix.row(i) {
            write!(writer, "{}{}", separator, score).map_err(|e| format!("Write error: {}", e))?;
        }
        writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Score matrix written to: {}", file_path);
    Ok(())
}

/// Write score matrix in TSV format
pub fn write_tsv(
    file_path: &str,
    row_ids: &[&str],
    col_ids: &[&str],
    matrix: &ScoreMatrix,
    table_name: &str,
    command_line: &str,
) -> Result<(), String> {
    write_delimited(file_path, '\t', row_ids, col_ids, matrix, table_name, command_line)
}

/// Write score matrix in CSV format
pub fn write_csv(
    file_path: &str,
    row_ids: &[&str],
    col_ids: &[&str],
    matrix: &ScoreMatrix,
    table_name: &str,
    command_line: &str,
) -> Result<(), String> {
    write_delimited(file_path, ',', row_ids, col_ids, matrix, table_name, command_line)
}

/// Write score matrix in JSON format with the same provenance fields as the
/// delimited writers
pub fn write_json(
    file_path: &str,
    row_ids: &[&str],
    col_ids: &[&str],
    matrix: &ScoreMatrix,
    table_name: &str,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;

    let scores: Vec<&[i64]> = matrix.iter_rows().collect();
    let document = serde_json::json!({
        "command": command_line,
        "generated": chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        "table": table_name,
        "version": env!("CARGO_PKG_VERSION"),
        "rows": row_ids,
        "cols": col_ids,
        "scores": scores,
    });

    let content = serde_json::to_string_pretty(&document)
        .map_err(|e| format!("Failed to serialize matrix: {}", e))?;

    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to write output file '{}': {}", file_path, e))?;

    println!("✅ Score matrix written to: {} (JSON format)", file_path);
    Ok(())
}

/// Write score matrix in the specified format
pub fn write_matrix(
    file_path: &str,
    format: &str,
    row_ids: &[&str],
    col_ids: &[&str],
    matrix: &ScoreMatrix,
    table_name: &str,
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_tsv(file_path, row_ids, col_ids, matrix, table_name, command_line),
        "csv" => write_csv(file_path, row_ids, col_ids, matrix, table_name, command_line),
        "json" => write_json(file_path, row_ids, col_ids, matrix, table_name, command_line),
        _ => Err(format!(
            "Unsupported output format: {}. Use: tsv, csv, json",
            format
        )),
    }
}
