use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let metrics = ctx.instructions.as_ref().map(|t| t.len()).unwrap_or(0);
    let frames: usize = ctx.matrices.iter().map(|m| m.rows).sum();

    let mut out = String::new();
    out.push_str(&format!("motion-metric-ft v{}\n", version));
    out.push_str(&format!(
        "Input: {} files, {} frames, {} metrics\n",
        ctx.files.len(),
        frames,
        metrics
    ));
    out.push_str(&format!(
        "Thresholds: max={:.2} min={:.2}\n",
        ctx.thresholds.max_percentage, ctx.thresholds.min_percentage
    ));
    out.push_str(&format!("Records: {}\n", ctx.records.len()));
    out
}
