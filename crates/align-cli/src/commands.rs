use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use align_cli::pipeline::{AlignRequest, RequestOutcome, load_mapping, run_request};
use align_ingest::CellTyping;

use crate::cli::{AlignArgs, InspectArgs};
use crate::summary::{apply_table_style, header_cell, print_conflicts};

pub fn run_align(args: &AlignArgs) -> Result<RequestOutcome> {
    let typing = if args.infer_types {
        CellTyping::Infer
    } else {
        CellTyping::Text
    };
    let request = AlignRequest::new(&args.input)
        .with_reference(args.reference.clone())
        .with_reference_dir(&args.reference_dir)
        .with_reference_ext(&args.reference_ext)
        .with_output_dir(args.output_dir.clone())
        .with_typing(typing)
        .with_dry_run(args.dry_run);

    let outcome = run_request(&request)?;
    Ok(outcome)
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let span = info_span!("inspect", reference = %args.reference.display());
    let _guard = span.enter();
    let mapping = load_mapping(&args.reference)?;

    if args.json {
        let json = serde_json::to_string_pretty(&mapping).context("serialize mapping")?;
        println!("{json}");
        return Ok(());
    }

    println!("Reference: {}", args.reference.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Canonical header"), header_cell("Synonyms")]);
    apply_table_style(&mut table);
    for group in &mapping {
        let synonyms = if group.synonyms.is_empty() {
            "-".to_string()
        } else {
            group.synonyms.join(", ")
        };
        table.add_row(vec![group.canonical.clone(), synonyms]);
    }
    println!("{table}");
    println!(
        "{} canonical headers, {} synonyms",
        mapping.len(),
        mapping.synonym_count()
    );
    print_conflicts(&mapping.synonym_conflicts());
    Ok(())
}
