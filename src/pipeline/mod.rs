use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_input;
pub mod stage2_instructions;
pub mod stage3_load;
pub mod stage4_records;
pub mod stage5_output;
pub mod stage6_describe;
pub mod stage7_peaks;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Full run: discovery through JSON output.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_input::Stage1Input::new()),
            Box::new(stage2_instructions::Stage2Instructions::new()),
            Box::new(stage3_load::Stage3Load::new()),
            Box::new(stage4_records::Stage4Records::new()),
            Box::new(stage5_output::Stage5Output::new()),
        ])
    }

    /// Everything a run checks, without writing.
    pub fn validation() -> Self {
        Self::new(vec![
            Box::new(stage1_input::Stage1Input::new()),
            Box::new(stage2_instructions::Stage2Instructions::new()),
            Box::new(stage3_load::Stage3Load::new()),
            Box::new(stage4_records::Stage4Records::new()),
        ])
    }

    pub fn describe() -> Self {
        Self::new(vec![
            Box::new(stage1_input::Stage1Input::new()),
            Box::new(stage3_load::Stage3Load::new()),
            Box::new(stage6_describe::Stage6Describe::new()),
        ])
    }

    /// Rank-based peak report over every column.
    pub fn peaks() -> Self {
        Self::new(vec![
            Box::new(stage1_input::Stage1Input::new()),
            Box::new(stage3_load::Stage3Load::new()),
            Box::new(stage7_peaks::Stage7Peaks::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
