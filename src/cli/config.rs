// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub collection1: Option<String>,
    pub collection2: Option<String>,
    pub output: Option<String>,

    // Core settings
    pub table: Option<String>,
    pub format: Option<String>,

    // Performance
    pub threads: Option<usize>,

    // Filtering
    pub include_ids: Option<String>,
    pub exclude_ids: Option<String>,

    // Flags
    pub strict: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# pepdist.toml - Configuration file for pepdist
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# First peptide collection (.fasta/.fa/.faa, .tsv, .csv, or plain list)
collection1 = "/path/to/peptides1.fasta"

# Second peptide collection (omit to score collection1 against itself)
# collection2 = "/path/to/peptides2.fasta"

# Output score matrix file
output = "scores.tsv"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# Substitution table: grantham, blosum62
table = "grantham"

# Output format: tsv, csv, json
format = "tsv"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 16

# =============================================================================
# FILTERING
# =============================================================================

# Include only peptides whose id matches regex pattern
# include_ids = "epitope.*"

# Exclude peptides whose id matches regex pattern
# exclude_ids = "control.*"

# =============================================================================
# FLAGS
# =============================================================================

# Fail on non-canonical residues instead of scoring them as unscored
strict = false

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}
