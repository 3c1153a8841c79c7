use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::input::SeriesFile;
use crate::instructions::MetricInstruction;
use crate::io::npy::MetricMatrix;
use crate::pipeline::Stage;
use crate::schema::v1::TrainingRecord;
use crate::scores::extrema::Thresholds;
use crate::scores::record::build_record;

#[cfg(feature = "mt")]
use rayon::prelude::*;

pub struct Stage4Records;

impl Stage4Records {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Records {
    fn name(&self) -> &'static str {
        "stage4_records"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx
            .instructions
            .as_ref()
            .context("instruction table not loaded")?;
        if ctx.matrices.len() != ctx.files.len() {
            anyhow::bail!(
                "loaded {} matrices for {} files",
                ctx.matrices.len(),
                ctx.files.len()
            );
        }
        let inputs: Vec<(&SeriesFile, &MetricMatrix)> =
            ctx.files.iter().zip(ctx.matrices.iter()).collect();

        let records = build_all(&table.entries, &inputs, ctx.thresholds, ctx.threads)?;
        info!(records = records.len(), "records_ready");
        ctx.records = records;
        Ok(())
    }
}

/// Metric-major, file-minor. Parallel runs only fan out over files and
/// collect in file order, so records and the reported error match the
/// sequential path.
fn build_all(
    entries: &[MetricInstruction],
    inputs: &[(&SeriesFile, &MetricMatrix)],
    thresholds: Thresholds,
    threads: usize,
) -> Result<Vec<TrainingRecord>> {
    #[cfg(feature = "mt")]
    {
        if threads != 1 {
            let mut builder = rayon::ThreadPoolBuilder::new();
            if threads > 0 {
                builder = builder.num_threads(threads);
            }
            let pool = builder
                .build()
                .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
            let mut records = Vec::with_capacity(entries.len() * inputs.len());
            for entry in entries {
                let batch: Vec<Result<TrainingRecord>> = pool.install(|| {
                    inputs
                        .par_iter()
                        .map(|(file, matrix)| record_for(entry, file, matrix, thresholds))
                        .collect()
                });
                // First failure in file order, as on the sequential path.
                for record in batch {
                    records.push(record?);
                }
            }
            return Ok(records);
        }
    }
    #[cfg(not(feature = "mt"))]
    let _ = threads;

    let mut records = Vec::with_capacity(entries.len() * inputs.len());
    for entry in entries {
        for (file, matrix) in inputs {
            records.push(record_for(entry, file, matrix, thresholds)?);
        }
    }
    Ok(records)
}

fn record_for(
    entry: &MetricInstruction,
    file: &SeriesFile,
    matrix: &MetricMatrix,
    thresholds: Thresholds,
) -> Result<TrainingRecord> {
    info!(file = %file.name, metric = entry.id, "processing file");
    matrix
        .column(entry.column)
        .and_then(|series| build_record(&series, &entry.template, thresholds))
        .with_context(|| {
            format!(
                "failed to build record for {} (metric {} '{}')",
                file.name, entry.id, entry.name
            )
        })
}
