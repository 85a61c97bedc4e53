use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use tracing::{error, info, info_span};

use catalog_cli::pipeline::{
    convert_term, convert_term_with_last_update, default_output_dir,
};
use catalog_cli::types::RunResult;
use catalog_ingest::{list_term_files, term_name};
use catalog_model::fields::keys;
use catalog_model::{DERIVED_KEYS, FIELD_KEYS};

use crate::cli::{BatchArgs, ConvertArgs};
use crate::summary::apply_table_style;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Key"]);
    apply_table_style(&mut table);
    for (column, key) in FIELD_KEYS {
        table.add_row(vec![*column, *key]);
    }
    for key in DERIVED_KEYS {
        table.add_row(vec![derived_source(key), *key]);
    }
    println!("{table}");
    Ok(())
}

fn derived_source(key: &str) -> &'static str {
    match key {
        keys::NAME => "(chn_name without </br> notes)",
        keys::PROGRAMS => "(credit programs from chn_name)",
        keys::TIMES => "(schedule keys)",
        keys::LOCATIONS => "(distinct locations)",
        keys::SLOTS => "(expanded timetable slots)",
        keys::TIME_LOCATIONS => "(schedule key and location pairs)",
        _ => "(derived)",
    }
}

pub fn run_convert(args: &ConvertArgs) -> Result<RunResult> {
    let config = args.normalize.to_config();
    let term = term_name(&args.input).unwrap_or("catalog");
    let summary = convert_term(term, &args.input, &args.output, &config)
        .with_context(|| format!("convert {}", args.input.display()))?;
    Ok(RunResult {
        output_dir: args.output.parent().map(std::path::Path::to_path_buf),
        terms: vec![summary],
        errors: Vec::new(),
    })
}

pub fn run_batch(args: &BatchArgs) -> Result<RunResult> {
    let span = info_span!("batch", source_dir = %args.source_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let config = args.normalize.to_config();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.source_dir));
    let terms = list_term_files(&args.source_dir).context("list term files")?;
    info!(term_count = terms.len(), output_dir = %output_dir.display(), "discovered term files");

    let timestamp = Utc::now();
    let mut result = RunResult {
        output_dir: Some(output_dir.clone()),
        ..RunResult::default()
    };
    for term_file in &terms {
        let converted = if args.no_last_update {
            let output_path = catalog_output::catalog_path(&output_dir, &term_file.term);
            convert_term(&term_file.term, &term_file.path, &output_path, &config)
        } else {
            convert_term_with_last_update(
                &term_file.term,
                &term_file.path,
                &output_dir,
                &config,
                timestamp,
            )
        };
        match converted {
            Ok(summary) => result.terms.push(summary),
            Err(err) => {
                error!(term = %term_file.term, error = %format!("{err:#}"), "term failed");
                result.errors.push(format!("{}: {err:#}", term_file.term));
            }
        }
    }

    info!(
        term_count = result.terms.len(),
        failed = result.errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "batch complete"
    );
    Ok(result)
}
