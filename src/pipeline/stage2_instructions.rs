use anyhow::Result;
use tracing::info;

use crate::ctx::{Ctx, single_metric_output};
use crate::instructions;
use crate::pipeline::Stage;

pub struct Stage2Instructions;

impl Stage2Instructions {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Instructions {
    fn name(&self) -> &'static str {
        "stage2_instructions"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut table = instructions::load_effective(ctx.instructions_path.as_deref())?;

        if let Some(id) = ctx.metric_filter {
            table = table.select(id)?;
            if !ctx.output.json_path_explicit {
                ctx.output.json_path = single_metric_output(&table.entries[0]);
            }
        }

        info!(
            version = %table.version,
            metrics = table.len(),
            "instruction_table_ready"
        );
        ctx.instructions = Some(table);
        Ok(())
    }
}
