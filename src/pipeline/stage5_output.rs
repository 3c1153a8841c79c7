use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::json_writer;
use crate::pipeline::Stage;

pub struct Stage5Output;

impl Stage5Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Output {
    fn name(&self) -> &'static str {
        "stage5_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        json_writer::write_records(&ctx.output.json_path, &ctx.records)?;
        info!(
            path = %ctx.output.json_path.display(),
            records = ctx.records.len(),
            "stage5_output_ready"
        );
        Ok(())
    }
}
