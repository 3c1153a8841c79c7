use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::describe;
use crate::pipeline::Stage;
use crate::scores::describe::describe_matrix;

pub struct Stage6Describe;

impl Stage6Describe {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Describe {
    fn name(&self) -> &'static str {
        "stage6_describe"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut stats = Vec::with_capacity(ctx.files.len());
        for (file, matrix) in ctx.files.iter().zip(&ctx.matrices) {
            stats.push(describe_matrix(&file.name, matrix)?);
        }
        describe::write_report(&ctx.output.describe_path, &stats)?;
        info!(
            path = %ctx.output.describe_path.display(),
            files = stats.len(),
            "stage6_describe_ready"
        );
        ctx.column_stats = stats;
        Ok(())
    }
}
