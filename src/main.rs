use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

use debt_repayment::{
    parse_percentage, AmortizationCalculator, CalculatorConfig, CalculatorError, FileReportSink,
    Money, Percentage, ReportSink, DEFAULT_REPORT_FILE,
};

/// Simulate monthly debt repayment with a fixed repayment floor
#[derive(Parser)]
#[command(
    name = "repayment-calc",
    version,
    about = "Simulate monthly debt repayment with a fixed repayment floor",
    long_about = "Accrues monthly interest on a debt and repays either a percentage of the \
                  balance or the fixed floor, whichever is larger, until the balance falls \
                  under the floor and is settled. Prints the total repaid and a monthly report."
)]
struct Cli {
    /// Monthly interest percentage (0-100)
    #[arg(long, short = 'i', value_parser = parse_interest)]
    interest: Percentage,

    /// Monthly repayment percentage (0-100)
    #[arg(long, short = 'r', value_parser = parse_repayment)]
    repayment: Percentage,

    /// Starting debt
    #[arg(long, default_value = "100.00")]
    debt: Money,

    /// Minimum monthly repayment
    #[arg(long, default_value = "50.00")]
    floor: Money,

    /// Give up after this many months
    #[arg(long)]
    max_months: Option<u32>,

    /// Save the report as a text file
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_REPORT_FILE)]
    save: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log each simulated month
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn parse_interest(s: &str) -> std::result::Result<Percentage, CalculatorError> {
    parse_percentage("interest percentage", s)
}

fn parse_repayment(s: &str) -> std::result::Result<Percentage, CalculatorError> {
    parse_percentage("repayment percentage", s)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = CalculatorConfig::new(cli.floor, cli.debt);
    if let Some(months) = cli.max_months {
        config = config.with_max_months(months);
    }
    let calculator = AmortizationCalculator::new(config).context("invalid calculator settings")?;

    let result = calculator
        .compute(cli.interest, cli.repayment)
        .with_context(|| {
            format!(
                "could not compute repayment at {} interest and {} repayment",
                cli.interest, cli.repayment
            )
        })?;

    match cli.format {
        OutputFormat::Text => {
            println!("Total amount repaid: {}", result.display_total());
            for line in result.lines() {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", result.json()?),
    }

    if let Some(path) = cli.save {
        let mut sink = FileReportSink::new(&path);
        sink.save(&result)?;
        eprintln!("Report has been saved successfully as {}.", path.display());
    }

    Ok(())
}
