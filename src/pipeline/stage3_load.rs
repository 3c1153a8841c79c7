use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::npy;
use crate::pipeline::Stage;

pub struct Stage3Load;

impl Stage3Load {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Load {
    fn name(&self) -> &'static str {
        "stage3_load"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let min_cols = ctx.required_columns();
        let mut matrices = Vec::with_capacity(ctx.files.len());
        for file in &ctx.files {
            let matrix = npy::read_matrix(&file.path)?;
            matrix.require_columns(min_cols)?;
            info!(
                file = %file.name,
                frames = matrix.rows,
                columns = matrix.cols,
                "matrix_loaded"
            );
            matrices.push(matrix);
        }
        ctx.matrices = matrices;
        Ok(())
    }
}
