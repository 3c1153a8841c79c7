use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::input;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let files = input::discover_series_files(&ctx.input_dir)
            .with_context(|| format!("failed to list {}", ctx.input_dir.display()))?;

        if files.is_empty() {
            warn!(input = %ctx.input_dir.display(), "no .npy files found");
            ctx.warnings.push(format!(
                "no {} files found in {}",
                input::SERIES_SUFFIX,
                ctx.input_dir.display()
            ));
        }
        info!(
            input = %ctx.input_dir.display(),
            files = files.len(),
            "input_files"
        );

        ctx.files = files;
        Ok(())
    }
}
