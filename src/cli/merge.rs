// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Load a configuration file and merge it into these arguments
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }

    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.collection1.is_none() {
            self.collection1 = config.collection1;
        }
        if self.collection2.is_none() {
            self.collection2 = config.collection2;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.table == "grantham" && config.table.is_some() {
            self.table = config.table.unwrap();
        }
        if self.format == "tsv" && config.format.is_some() {
            self.format = config.format.unwrap();
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Filtering
        if self.include_ids.is_none() {
            self.include_ids = config.include_ids;
        }
        if self.exclude_ids.is_none() {
            self.exclude_ids = config.exclude_ids;
        }

        // Flags (switches can only be turned on by the config file)
        if !self.strict && config.strict == Some(true) {
            self.strict = true;
        }
        if !self.dry_run && config.dry_run == Some(true) {
            self.dry_run = true;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> Args {
        Args {
            collection1: None,
            collection2: None,
            output: None,
            table: "grantham".to_string(),
            format: "tsv".to_string(),
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
    fn test_config_fills_missing_values() {
        let config = Config {
            collection1: Some("a.fasta".to_string()),
            table: Some("blosum62".to_string()),
            threads: Some(8),
            strict: Some(true),
            ..Config::default()
        };

        let merged = default_args().merge_with_config(config);
        assert_eq!(merged.collection1.as_deref(), Some("a.fasta"));
        assert_eq!(merged.table, "blosum62");
        assert_eq!(merged.threads, Some(8));
        assert!(merged.strict);
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let mut args = default_args();
        args.collection1 = Some("cli.fasta".to_string());
        args.table = "blosum62".to_string();

        let config = Config {
            collection1: Some("config.fasta".to_string()),
            table: Some("grantham".to_string()),
            ..Config::default()
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.collection1.as_deref(), Some("cli.fasta"));
        assert_eq!(merged.table, "blosum62");
    }
}
