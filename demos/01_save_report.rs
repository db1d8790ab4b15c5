/// custom floor and principal, report saved to disk
use debt_repayment::{
    AmortizationCalculator, CalculatorConfig, FileReportSink, Money, RepaymentRequest, ReportSink,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // the form hands over raw text
    let request = RepaymentRequest::parse("2", "10")?;

    let config = CalculatorConfig::new(Money::from_major(25), Money::from_major(1_500));
    let calculator = AmortizationCalculator::new(config)?;
    let result = calculator.compute(request.interest, request.repayment)?;

    println!("{} months, {} repaid", result.months(), result.display_total());

    let mut sink = FileReportSink::default();
    sink.save(&result)?;
    println!("saved to {}", sink.path().display());

    Ok(())
}
