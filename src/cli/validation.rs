// validation.rs - Input validation utilities

use regex::Regex;

use crate::cli::args::Args;
use crate::tables::TableRegistry;

#[derive(Debug)]
pub struct ValidationResult {
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate table name
    let registry = TableRegistry::new();
    if !registry.has_table(&args.table) {
        return Err(format!(
            "Invalid table '{}'. Available: {}",
            args.table,
            registry.get_table_names().join(", ")
        ));
    }

    // Validate output format
    if !matches!(args.format.to_lowercase().as_str(), "tsv" | "csv" | "json") {
        return Err(format!(
            "Invalid output format '{}'. Use: tsv, csv, json",
            args.format
        ));
    }

    // Compile regex patterns
    let include_regex = match &args.include_ids {
        Some(pattern) => {
            Some(Regex::new(pattern).map_err(|e| format!("Invalid include_ids regex: {}", e))?)
        }
        None => None,
    };

    let exclude_regex = match &args.exclude_ids {
        Some(pattern) => {
            Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_ids regex: {}", e))?)
        }
        None => None,
    };

    Ok(ValidationResult {
        include_regex,
        exclude_regex,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(table: &str, format: &str) -> Args {
        Args {
            collection1: Some("peptides.txt".to_string()),
            collection2: None,
            output: None,
            table: table.to_string(),
            format: format.to_string(),
            threads: None,
            include_ids: None,
            exclude_ids: None,
            strict: false,
            dry_run: false,
            config: None,
            generate_config: false,
        }
    }

    #[test]
    fn test_accepts_known_tables_and_formats() {
        assert!(validate_args(&args_with("grantham", "tsv")).is_ok());
        assert!(validate_args(&args_with("blosum62", "json")).is_ok());
    }

    #[test]
    fn test_rejects_unknown_table() {
        let err = validate_args(&args_with("pam250", "tsv")).unwrap_err();
        assert!(err.contains("Invalid table"));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = validate_args(&args_with("grantham", "phylip")).unwrap_err();
        assert!(err.contains("Invalid output format"));
    }

    #[test]
    fn test_rejects_bad_regex() {
        let mut args = args_with("grantham", "tsv");
        args.include_ids = Some("[unclosed".to_string());
        assert!(validate_args(&args).is_err());
    }
}
