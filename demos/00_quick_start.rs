/// quick start - repay £100 at 10% interest with a 20% repayment
use debt_repayment::{compute_repayment, Money, Percentage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let result = compute_repayment(
        Money::from_major(100),
        Percentage::new(10)?,
        Percentage::new(20)?,
    )?;

    println!("Total amount repaid: {}", result.display_total());
    for line in result.lines() {
        println!("{}", line);
    }

    Ok(())
}
