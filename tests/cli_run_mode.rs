use clap::Parser;
use motion_metric_ft::cli::{Cli, Commands};

#[test]
fn run_defaults() {
    let cli = Cli::parse_from(["motion-metric-ft", "run", "--input", "data"]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.max_percentage, 0.8);
            assert_eq!(args.min_percentage, 0.2);
            assert_eq!(args.threads, 0);
            assert!(args.out.is_none());
            assert!(args.metric.is_none());
            assert!(args.instructions.is_none());
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn underscore_spellings_accepted() {
    let cli = Cli::parse_from([
        "motion-metric-ft",
        "run",
        "--input",
        "data",
        "--max_percentage",
        "0.9",
        "--min_percentage",
        "0.1",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.max_percentage, 0.9);
            assert_eq!(args.min_percentage, 0.1);
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn negative_percentages_parse() {
    let cli = Cli::parse_from([
        "motion-metric-ft",
        "run",
        "--input",
        "data",
        "--max-percentage",
        "-0.5",
    ]);
    match cli.command {
        Commands::Run(args) => assert_eq!(args.max_percentage, -0.5),
        _ => panic!("expected run command"),
    }
}

#[test]
fn input_is_required() {
    assert!(Cli::try_parse_from(["motion-metric-ft", "run"]).is_err());
}
