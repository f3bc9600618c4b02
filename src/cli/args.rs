// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// pepdist - Pairwise positional peptide scoring with substitution matrices
pub struct Args {
    /// first peptide collection (.fasta/.fa/.faa, .tsv, .csv, or plain list)
    #[argh(option)]
    pub collection1: Option<String>,

    /// second peptide collection; omit to score collection1 against itself
    #[argh(option)]
    pub collection2: Option<String>,

    /// output score matrix file
    #[argh(option)]
    pub output: Option<String>,

    /// substitution table: grantham, blosum62 (default: grantham)
    #[argh(option, default = "String::from(\"grantham\")")]
    pub table: String,

    /// output format: tsv, csv, json (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// include only peptides whose id matches regex pattern
    #[argh(option)]
    pub include_ids: Option<String>,

    /// exclude peptides whose id matches regex pattern
    #[argh(option)]
    pub exclude_ids: Option<String>,

    /// fail on non-canonical residues instead of scoring them as unscored
    #[argh(switch)]
    pub strict: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
