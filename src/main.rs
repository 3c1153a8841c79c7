use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use motion_metric_ft::cli::{
    Cli, Commands, DescribeArgs, InstructionsCommand, InstructionsShowArgs, PeaksArgs, RunArgs,
    ValidateArgs,
};
use motion_metric_ft::ctx::Ctx;
use motion_metric_ft::instructions;
use motion_metric_ft::io;
use motion_metric_ft::pipeline::Pipeline;
use motion_metric_ft::scores::extrema::Thresholds;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Validate(args) => handle_validate(args)?,
        Commands::Describe(args) => handle_describe(args)?,
        Commands::Peaks(args) => handle_peaks(args)?,
        Commands::Instructions(args) => match args.command {
            InstructionsCommand::Show(show) => handle_instructions_show(show)?,
        },
    }

    Ok(())
}

fn handle_run(args: RunArgs) -> Result<()> {
    let thresholds = Thresholds::new(args.max_percentage, args.min_percentage);
    let mut ctx = Ctx::new(args.input, thresholds)
        .with_metric(args.metric)
        .with_json_path(args.out);
    ctx.instructions_path = args.instructions;
    ctx.threads = args.threads;

    Pipeline::standard().run(&mut ctx)?;

    print!("{}", io::summary::format_summary(&ctx));
    print_warnings(&ctx);
    println!("Combined output saved to {}", ctx.output.json_path.display());
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = Ctx::new(args.input, Thresholds::default());
    ctx.instructions_path = args.instructions;
    ctx.threads = 1;

    Pipeline::validation().run(&mut ctx)?;

    println!("motion-metric-ft validate ok");
    println!("files: {}", ctx.files.len());
    println!(
        "frames: {}",
        ctx.matrices.iter().map(|m| m.rows).sum::<usize>()
    );
    println!("records: {}", ctx.records.len());
    print_warnings(&ctx);
    Ok(())
}

fn handle_describe(args: DescribeArgs) -> Result<()> {
    let mut ctx = Ctx::new(args.input, Thresholds::default()).with_describe_path(args.out);

    Pipeline::describe().run(&mut ctx)?;

    let columns: usize = ctx.column_stats.iter().map(|f| f.columns.len()).sum();
    println!(
        "described {} columns across {} files",
        columns,
        ctx.column_stats.len()
    );
    print_warnings(&ctx);
    println!("Metrics saved to {}", ctx.output.describe_path.display());
    Ok(())
}

fn handle_peaks(args: PeaksArgs) -> Result<()> {
    let mut ctx = Ctx::new(args.input, Thresholds::default()).with_peaks(
        args.percent,
        args.min_run,
        args.out,
    );

    Pipeline::peaks().run(&mut ctx)?;

    match &ctx.output.peaks_path {
        Some(path) => {
            print_warnings(&ctx);
            println!("Peaks saved to {}", path.display());
        }
        None => {
            print!(
                "{}",
                io::peaks::format_report(&ctx.peaks, ctx.peak_params.percent)
            );
            print_warnings(&ctx);
        }
    }
    Ok(())
}

fn handle_instructions_show(args: InstructionsShowArgs) -> Result<()> {
    let table = instructions::load_effective(args.instructions.as_deref())?;
    println!("instructions (version {}):", table.version);
    for entry in &table.entries {
        println!(
            "{}\t{}\t{}\t{}",
            entry.id,
            entry.column,
            entry.name,
            entry.template.len()
        );
    }
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
