//! Pipeline orchestrator.
//!
//! Stages, in order:
//! 1. **Load**: read each configured partition; a missing file is logged
//!    and skipped, anything else is fatal. Zero partitions is a no-op run.
//! 2. **Concatenate**: stack frames in encounter order. Upstream
//!    identifiers are kept verbatim; overlapping partitions are not
//!    deduplicated.
//! 3. **Filter**: drop rows missing any required field.
//! 4. **Cleanup rules**: strict in-order fold.
//! 5. **Canonicalize**: validate, assemble lines, and re-parse every
//!    surviving row. The first unrecoverable row failure aborts the whole
//!    run with the offending raw row logged; there is no partial output.

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, Column, DataFrame, IntoLazy, col, lit};
use tracing::{error, info, info_span, warn};

use addr_ingest::{IngestError, any_to_string_non_empty, partition_path, read_partition};
use addr_model::{
    CONSUMED_FIELDS, CanonicalAddress, RawAddressRecord, REQUIRED_FIELDS, RunConfig,
};

use crate::canonical::Canonicalizer;
use crate::rules::apply_rules;
use crate::validate::validate_record;

/// Counters describing a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub partitions_loaded: Vec<String>,
    pub partitions_missing: Vec<String>,
    pub rows_loaded: usize,
    pub rows_after_required: usize,
    pub rows_after_rules: usize,
    pub rows_output: usize,
}

/// A completed run: the canonical dataset plus its summary.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub frame: DataFrame,
    pub summary: RunSummary,
}

/// Execute the full batch pipeline.
///
/// Returns `Ok(None)` when no partition file was found at all (a no-op
/// run, not an error).
pub fn run_pipeline(config: &RunConfig) -> Result<Option<PipelineRun>> {
    let span = info_span!("pipeline", partitions = config.partitions.len());
    let _guard = span.enter();

    let mut summary = RunSummary::default();

    // Stage 1: load partitions, tolerating absent files.
    let mut frames = Vec::new();
    for key in &config.partitions {
        let path = partition_path(&config.data_dir, key);
        match read_partition(&path) {
            Ok(frame) => {
                info!(partition = %key, rows = frame.height(), "loaded partition");
                summary.partitions_loaded.push(key.clone());
                frames.push(frame);
            }
            Err(IngestError::PartitionNotFound { path }) => {
                warn!(partition = %key, path = %path.display(), "partition file missing, skipping");
                summary.partitions_missing.push(key.clone());
            }
            Err(source) => {
                return Err(source).with_context(|| format!("load partition {key}"));
            }
        }
    }
    if frames.is_empty() {
        info!("no partition files found, nothing to do");
        return Ok(None);
    }

    // Stage 2: concatenate in encounter order.
    let mut combined = frames.remove(0);
    for frame in &frames {
        combined
            .vstack_mut(frame)
            .context("stack partition frames")?;
    }
    summary.rows_loaded = combined.height();

    // Stage 3: required-field filter.
    let filtered = drop_missing_required(combined)?;
    summary.rows_after_required = filtered.height();

    // Stage 4: cleanup rules.
    let cleaned = apply_rules(filtered, &config.rules)?;
    summary.rows_after_rules = cleaned.height();

    // Stage 5: per-row canonicalization.
    let records = canonicalize_rows(&cleaned, config)?;
    summary.rows_output = records.len();
    info!(
        rows = summary.rows_output,
        partitions = summary.partitions_loaded.len(),
        "pipeline complete"
    );

    let frame = build_output_frame(&records)?;
    Ok(Some(PipelineRun { frame, summary }))
}

/// Drop rows missing any of the required fields (null or blank). The
/// sentinel marker is deliberately not treated as missing here: a sentinel
/// in a required field reaches the validator and aborts the run.
fn drop_missing_required(df: DataFrame) -> Result<DataFrame> {
    let before = df.height();
    let mut predicate = lit(true);
    for field in REQUIRED_FIELDS {
        predicate = predicate.and(col(*field).is_not_null().and(col(*field).neq(lit(""))));
    }
    let df = df
        .lazy()
        .filter(predicate)
        .collect()
        .context("filter rows missing required fields")?;
    info!(
        dropped = before - df.height(),
        remaining = df.height(),
        "required-field filter"
    );
    Ok(df)
}

/// Map every surviving row to a canonical address, fail-fast.
fn canonicalize_rows(df: &DataFrame, config: &RunConfig) -> Result<Vec<CanonicalAddress>> {
    let canonicalizer = Canonicalizer::new();
    let interval = config.progress_interval.max(1);
    let total = df.height();

    // One column lookup per consumed alias, not per cell.
    let columns: Vec<Option<&Column>> = CONSUMED_FIELDS
        .iter()
        .map(|alias| df.column(alias).ok())
        .collect();

    let mut records = Vec::with_capacity(total);
    for idx in 0..total {
        let mut record = RawAddressRecord::new();
        for (alias, column) in CONSUMED_FIELDS.iter().zip(&columns) {
            if let Some(column) = column
                && let Some(value) =
                    any_to_string_non_empty(column.get(idx).unwrap_or(AnyValue::Null))
            {
                record.set(*alias, value);
            }
        }

        let result = validate_record(&record, &config.null_token).and_then(|components| {
            let address = canonicalizer.canonical_address(&components)?;
            Ok((components, address))
        });
        match result {
            Ok((components, address)) => records.push(CanonicalAddress {
                id: components.id,
                address,
                city: components.place_name,
                county: components.county,
                zipcode: components.zipcode,
                location: components.location,
            }),
            Err(source) => {
                error!(
                    row = idx,
                    record = %record.describe(),
                    %source,
                    "unrecoverable row failure, aborting run"
                );
                return Err(source).with_context(|| format!("canonicalize row {idx}"));
            }
        }

        if (idx + 1) % interval == 0 {
            info!(processed = idx + 1, total, "canonicalization progress");
        }
    }
    Ok(records)
}

/// Assemble the terminal output frame.
fn build_output_frame(records: &[CanonicalAddress]) -> Result<DataFrame> {
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    let addresses: Vec<&str> = records.iter().map(|r| r.address.as_str()).collect();
    let cities: Vec<Option<&str>> = records.iter().map(|r| r.city.as_deref()).collect();
    let counties: Vec<Option<&str>> = records.iter().map(|r| r.county.as_deref()).collect();
    let zipcodes: Vec<Option<&str>> = records.iter().map(|r| r.zipcode.as_deref()).collect();
    let locations: Vec<Option<&str>> = records.iter().map(|r| r.location.as_deref()).collect();

    let frame = DataFrame::new(vec![
        Column::new("id".into(), ids),
        Column::new("address".into(), addresses),
        Column::new("city".into(), cities),
        Column::new("county".into(), counties),
        Column::new("zipcode".into(), zipcodes),
        Column::new("location".into(), locations),
    ])
    .context("assemble output frame")?;
    Ok(frame)
}
