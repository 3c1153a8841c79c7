use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::peaks;
use crate::pipeline::Stage;
use crate::scores::peaks::describe_peaks;

pub struct Stage7Peaks;

impl Stage7Peaks {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Peaks {
    fn name(&self) -> &'static str {
        "stage7_peaks"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let params = ctx.peak_params;
        if !(0.0..=100.0).contains(&params.percent) {
            bail!("percent must lie in [0, 100], got {}", params.percent);
        }

        let mut files = Vec::with_capacity(ctx.files.len());
        for (file, matrix) in ctx.files.iter().zip(&ctx.matrices) {
            files.push(describe_peaks(&file.name, matrix, params.percent, params.min_run)?);
        }
        let runs: usize = files
            .iter()
            .flat_map(|f| &f.columns)
            .map(|c| c.min.peaks.len() + c.max.peaks.len())
            .sum();
        info!(files = files.len(), runs, "stage7_peaks_ready");

        if let Some(path) = &ctx.output.peaks_path {
            peaks::write_report(path, &files, params.percent)?;
        }
        ctx.peaks = files;
        Ok(())
    }
}
