use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};

use searchlens::args::OutputFormat;
use searchlens::utils::{setup_logging, validate_args};
use searchlens::{
    init_default_domain_lists, load_domain_lists, load_records, render, Args, DomainLists,
    ResultAnalyzer,
};

fn run(args: &Args) -> Result<()> {
    let total_start_time = Instant::now();

    let domain_lists = if args.no_domain_lists {
        DomainLists::builtin()
    } else {
        load_domain_lists(args.domain_lists.as_deref())?
    };

    let records = load_records(args.input.as_deref())?;

    let analyzer = ResultAnalyzer::new(args.analysis_config()).with_domain_lists(domain_lists);
    let outcome = analyzer.analyze_named(&records, &args.analysis_type)?;

    let rendered = match args.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&outcome).context("Failed to encode analysis report")?
        }
        OutputFormat::Text => render::render_text(&outcome),
    };
    println!("{}", rendered.trim_end());

    info!(
        action = "complete",
        component = "analysis",
        analysis_type = %args.analysis_type,
        record_count = records.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    if args.init {
        init_default_domain_lists(Path::new("."))?;
        println!("Created domain_lists.txt with built-in domain lists");
        return Ok(());
    }

    if let Err(e) = run(&args) {
        error!(action = "error", component = "main", error = %e, "Analysis failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
