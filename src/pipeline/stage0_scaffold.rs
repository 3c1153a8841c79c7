use anyhow::{Context, Result};
use std::fs;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let t = ctx.thresholds;
        if !t.in_unit_interval() {
            warn!(
                max_percentage = t.max_percentage,
                min_percentage = t.min_percentage,
                "percentage outside [0, 1]"
            );
            ctx.warnings.push(format!(
                "percentages outside [0, 1] (max={}, min={}); ranges may be empty or cover every frame",
                t.max_percentage, t.min_percentage
            ));
        }

        if let Some(parent) = ctx
            .output
            .json_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
            info!(out_dir = %parent.display(), "output_dir_ready");
        }

        Ok(())
    }
}
