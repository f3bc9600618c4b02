// main.rs - CLI entry point

use std::time::Instant;

use pepdist::cli::Config;
use pepdist::core::score_matrix_with_progress;
use pepdist::data::load_collection;
use pepdist::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Validate all arguments
    let validation_result = validate_args(&args)?;

    let collection1_path = args.collection1.as_ref().ok_or("--collection1 is required")?;

    let output = if args.dry_run {
        None
    } else {
        Some(args.output.as_ref().ok_or("--output is required")?)
    };

    println!("🚀 pepdist v{}", env!("CARGO_PKG_VERSION"));
    println!("📏 Table: {}", args.table);

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let total_start = Instant::now();

    // Load peptide collections
    let mut collection1 = load_collection(std::path::Path::new(collection1_path))?;
    let mut collection2 = match &args.collection2 {
        Some(path) => load_collection(std::path::Path::new(path))?,
        None => {
            println!("🔁 No second collection - scoring collection1 against itself");
            collection1.clone()
        }
    };

    // Apply id filters
    let removed1 = collection1.filter_ids(
        validation_result.include_regex.as_ref(),
        validation_result.exclude_regex.as_ref(),
    );
    let removed2 = collection2.filter_ids(
        validation_result.include_regex.as_ref(),
        validation_result.exclude_regex.as_ref(),
    );
    if removed1 + removed2 > 0 {
        println!("🔍 Id filters removed {} + {} peptides", removed1, removed2);
    }

    // Residue quality check: strict mode fails, default mode warns and lets
    // the sentinel policy absorb the bad positions
    for (label, collection) in [("collection1", &collection1), ("collection2", &collection2)] {
        if args.strict {
            collection
                .check_canonical()
                .map_err(|e| format!("{}: {}", label, e))?;
        } else {
            let bad = collection.non_canonical_records();
            if !bad.is_empty() {
                println!(
                    "⚠️  {}: {} record(s) contain non-canonical residues - affected cells will include the {} sentinel",
                    label,
                    bad.len(),
                    UNSCORED
                );
            }
        }
    }

    println!(
        "📊 Score matrix: {} × {} = {} cells",
        collection1.len(),
        collection2.len(),
        collection1.len() * collection2.len()
    );

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    // Resolve table and compute
    let registry = TableRegistry::new();
    let table = registry
        .get_table(&args.table)
        .ok_or_else(|| format!("Unknown table: {}", args.table))?;

    let compute_start = Instant::now();
    let matrix = score_matrix_with_progress(&collection1.sequences(), &collection2.sequences(), table);
    println!(
        "✅ Score matrix computed in {:.2}s",
        compute_start.elapsed().as_secs_f64()
    );

    // Write output
    if let Some(output_path) = output {
        write_matrix(
            output_path,
            &args.format,
            &collection1.ids(),
            &collection2.ids(),
            &matrix,
            table.name(),
            &command_line,
        )?;
    }

    println!(
        "🏁 Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
