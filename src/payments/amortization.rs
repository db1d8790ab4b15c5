use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::report::{RepaymentResult, ReportLine};
use crate::types::{Percentage, RepaymentPolicy};

/// outcome of one simulated month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthStep {
    pub month: u32,
    pub policy: RepaymentPolicy,
    pub repayment: Money,
    pub remaining_debt: Money,
}

/// balance carried between months of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanState {
    debt: Money,
    month: u32,
}

impl LoanState {
    pub fn new(debt: Money) -> Self {
        Self { debt, month: 1 }
    }

    pub fn debt(&self) -> Money {
        self.debt
    }

    /// month the next step will simulate
    pub fn month(&self) -> u32 {
        self.month
    }

    /// accrue interest, take the larger of the percentage repayment and the floor
    pub fn step(&mut self, interest: Rate, repayment: Rate, floor: Money) -> MonthStep {
        let accrued = self.debt.accrue(interest);
        let candidate = accrued.portion(repayment);

        // a tie at the floor pays the floor
        let (policy, paid, remaining) = if candidate > floor {
            let remaining = accrued * repayment.complement();
            (RepaymentPolicy::Percentage, accrued - remaining, remaining)
        } else {
            // not clamped at zero, a balance already under the floor goes negative
            (RepaymentPolicy::FixedFloor, floor, accrued - floor)
        };

        let step = MonthStep {
            month: self.month,
            policy,
            repayment: paid,
            remaining_debt: remaining,
        };

        self.debt = remaining;
        self.month += 1;
        step
    }
}

/// monthly repayment simulator
#[derive(Debug, Clone)]
pub struct AmortizationCalculator {
    config: CalculatorConfig,
}

impl Default for AmortizationCalculator {
    fn default() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }
}

impl AmortizationCalculator {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// repay the configured initial debt
    pub fn compute(&self, interest: Percentage, repayment: Percentage) -> Result<RepaymentResult> {
        self.compute_repayment(self.config.initial_debt, interest, repayment)
    }

    /// simulate months until the debt falls under the floor, then settle it
    pub fn compute_repayment(
        &self,
        debt: Money,
        interest: Percentage,
        repayment: Percentage,
    ) -> Result<RepaymentResult> {
        if debt.is_negative() {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("debt cannot be negative, got {}", debt),
            });
        }

        let floor = self.config.fixed_repayment_floor;
        let interest_rate = interest.as_rate();
        let repayment_rate = repayment.as_rate();

        log::debug!(
            "computing repayment of {} at {} interest, {} repayment, floor {}",
            debt,
            interest,
            repayment,
            floor
        );

        let mut state = LoanState::new(debt);
        let mut total_repaid = Money::ZERO;
        let mut report = Vec::new();

        loop {
            let opening = state.debt();
            let step = state.step(interest_rate, repayment_rate, floor);

            total_repaid += step.repayment;
            report.push(ReportLine::repaid(step.month, step.repayment, step.remaining_debt));
            log::debug!(
                "month {}: {:?} repayment {}, remaining {}",
                step.month,
                step.policy,
                step.repayment,
                step.remaining_debt
            );

            if state.debt() < floor {
                let payoff = state.debt().accrue(interest_rate);
                total_repaid += payoff;
                report.push(ReportLine::final_payment(state.month(), payoff));
                break;
            }

            // the monthly map is monotone, so a balance that did not fall never will
            if state.debt() >= opening {
                log::warn!(
                    "debt of {} is not amortizing at month {} ({} interest, {} repayment)",
                    state.debt(),
                    step.month,
                    interest,
                    repayment
                );
                return Err(CalculatorError::DebtNeverAmortizes {
                    month: step.month,
                    debt: state.debt(),
                });
            }

            if let Some(limit) = self.config.max_months {
                if step.month >= limit {
                    log::warn!("stopped after {} months with {} outstanding", step.month, state.debt());
                    return Err(CalculatorError::MonthLimitExceeded { limit });
                }
            }
        }

        log::info!(
            "repaid {} over {} months",
            total_repaid,
            report.len()
        );

        Ok(RepaymentResult {
            total_repaid,
            report,
        })
    }
}

/// compute with the default floor of £50.00
pub fn compute_repayment(
    debt: Money,
    interest: Percentage,
    repayment: Percentage,
) -> Result<RepaymentResult> {
    AmortizationCalculator::default().compute_repayment(debt, interest, repayment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parse_report;
    use crate::types::RepaymentKind;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn pct(value: u8) -> Percentage {
        Percentage::new(value).unwrap()
    }

    #[test]
    fn test_first_month_uses_floor() {
        let result = compute_repayment(Money::from_major(100), pct(10), pct(20)).unwrap();

        assert_eq!(
            result.lines(),
            vec![
                "Month 1: Repaid £50.00, Remaining Debt: £60.00",
                "Month 2: Repaid £50.00, Remaining Debt: £16.00",
                "Month 3: Final Payment £17.60, Remaining Debt: £0.00",
            ]
        );
        assert_eq!(result.total_repaid, Money::from_decimal(dec!(117.60)));
    }

    #[test]
    fn test_no_interest_no_percentage() {
        let result = compute_repayment(Money::from_major(100), pct(0), pct(0)).unwrap();

        assert_eq!(
            result.lines(),
            vec![
                "Month 1: Repaid £50.00, Remaining Debt: £50.00",
                "Month 2: Repaid £50.00, Remaining Debt: £0.00",
                "Month 3: Final Payment £0.00, Remaining Debt: £0.00",
            ]
        );
        assert_eq!(result.total_repaid, Money::from_major(100));
    }

    #[test]
    fn test_full_interest_full_repayment() {
        let result = compute_repayment(Money::from_major(100), pct(100), pct(100)).unwrap();

        assert_eq!(
            result.lines(),
            vec![
                "Month 1: Repaid £200.00, Remaining Debt: £0.00",
                "Month 2: Final Payment £0.00, Remaining Debt: £0.00",
            ]
        );
        // the whole accrued balance, counted once
        assert_eq!(result.total_repaid, Money::from_major(200));
    }

    #[test]
    fn test_percentage_then_floor() {
        let result = compute_repayment(Money::from_major(1_000), pct(0), pct(50)).unwrap();

        let lines = result.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Month 1: Repaid £500.00, Remaining Debt: £500.00");
        assert_eq!(lines[3], "Month 4: Repaid £62.50, Remaining Debt: £62.50");
        assert_eq!(lines[4], "Month 5: Repaid £50.00, Remaining Debt: £12.50");
        assert_eq!(lines[5], "Month 6: Final Payment £12.50, Remaining Debt: £0.00");
        assert_eq!(result.total_repaid, Money::from_major(1_000));
    }

    #[test]
    fn test_tie_at_floor_pays_floor() {
        let mut state = LoanState::new(Money::from_major(100));
        let step = state.step(Rate::ZERO, Rate::from_percentage(50), Money::from_major(50));

        assert_eq!(step.policy, RepaymentPolicy::FixedFloor);
        assert_eq!(step.repayment, Money::from_major(50));
        assert_eq!(state.debt(), Money::from_major(50));
        assert_eq!(state.month(), 2);
    }

    #[test]
    fn test_percentage_step() {
        let mut state = LoanState::new(Money::from_major(1_000));
        let step = state.step(Rate::from_percentage(10), Rate::from_percentage(20), Money::from_major(50));

        assert_eq!(step.month, 1);
        assert_eq!(step.policy, RepaymentPolicy::Percentage);
        assert_eq!(step.repayment, Money::from_major(220));
        assert_eq!(step.remaining_debt, Money::from_major(880));
    }

    #[test]
    fn test_zero_debt_goes_negative() {
        // a balance already under the floor overshoots into credit
        let result = compute_repayment(Money::ZERO, pct(10), pct(20)).unwrap();

        assert_eq!(
            result.lines(),
            vec![
                "Month 1: Repaid £50.00, Remaining Debt: £-50.00",
                "Month 2: Final Payment £-55.00, Remaining Debt: £0.00",
            ]
        );
        assert_eq!(result.total_repaid, Money::from_major(-5));
    }

    #[test]
    fn test_non_amortizing_debt() {
        let err = compute_repayment(Money::from_major(100), pct(100), pct(0)).unwrap_err();
        match err {
            CalculatorError::DebtNeverAmortizes { month, debt } => {
                assert_eq!(month, 1);
                assert_eq!(debt, Money::from_major(150));
            }
            other => panic!("unexpected error: {other}"),
        }

        // 1.25 * 0.80 holds the balance flat
        let err = compute_repayment(Money::from_major(1_000), pct(25), pct(20)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_month_limit() {
        let calculator = AmortizationCalculator::new(
            CalculatorConfig::default().with_max_months(12),
        )
        .unwrap();

        let err = calculator
            .compute_repayment(Money::from_major(1_000_000), pct(0), pct(0))
            .unwrap_err();
        assert!(matches!(err, CalculatorError::MonthLimitExceeded { limit: 12 }));
    }

    #[test]
    fn test_slow_amortization_runs_to_completion() {
        // 1.01 * 0.99 shrinks the balance by one part in ten thousand a month
        let debt = Money::from_major(10_000);
        let result = compute_repayment(debt, pct(1), pct(1)).unwrap();

        assert!(result.months() > 7_000, "{} months", result.months());
        assert!(result.total_repaid >= debt);
        assert_eq!(result.final_payment().unwrap().month, result.months());
        assert!(result.lines().last().unwrap().ends_with("Remaining Debt: £0.00"));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(AmortizationCalculator::new(CalculatorConfig::default().with_floor(Money::ZERO)).is_err());
        assert!(compute_repayment(Money::from_major(-1), pct(10), pct(10)).is_err());
    }

    #[test]
    fn test_custom_config() {
        let config = CalculatorConfig::new(Money::from_major(25), Money::from_major(100));
        let calculator = AmortizationCalculator::new(config).unwrap();
        let result = calculator.compute(pct(0), pct(0)).unwrap();

        assert_eq!(result.months(), 5);
        assert_eq!(result.total_repaid, Money::from_major(100));
    }

    #[rstest]
    #[case(100, 10, 20, dec!(117.60), 3)]
    #[case(100, 0, 0, dec!(100), 3)]
    #[case(100, 100, 100, dec!(200), 2)]
    #[case(1_000, 0, 50, dec!(1000), 6)]
    #[case(100, 0, 100, dec!(100), 2)]
    #[case(40, 10, 0, dec!(43.4), 2)]
    fn test_scenarios(
        #[case] debt: i64,
        #[case] interest: u8,
        #[case] repayment: u8,
        #[case] total: Decimal,
        #[case] months: u32,
    ) {
        let result = compute_repayment(Money::from_major(debt), pct(interest), pct(repayment)).unwrap();
        assert_eq!(result.total_repaid.as_decimal(), total);
        assert_eq!(result.months(), months);
    }

    #[test]
    fn test_report_properties_across_inputs() {
        let calculator = AmortizationCalculator::default();
        let debt = Money::from_major(100);

        for interest in (0..=100).step_by(5) {
            for repayment in (0..=100).step_by(5) {
                let result = match calculator.compute_repayment(debt, pct(interest), pct(repayment)) {
                    Ok(result) => result,
                    Err(err) => {
                        assert!(err.is_configuration(), "{interest}/{repayment}: {err}");
                        continue;
                    }
                };

                // consecutive months from 1
                for (i, line) in result.report.iter().enumerate() {
                    assert_eq!(line.month, i as u32 + 1);
                }

                let last = result.report.last().unwrap();
                assert_eq!(last.kind, RepaymentKind::FinalPayment);
                assert!(result.lines().last().unwrap().ends_with("Remaining Debt: £0.00"));
                assert_eq!(
                    result.report.iter().filter(|l| l.kind.is_final()).count(),
                    1
                );

                let exact: Money = result.report.iter().map(|l| l.amount).sum();
                assert_eq!(exact, result.total_repaid);

                // rendered lines reconcile to within a half penny each
                let parsed = parse_report(&result.lines().join("\n")).unwrap();
                let rendered: Money = parsed.iter().map(|l| l.amount).sum();
                let tolerance = Money::from_decimal(dec!(0.005) * Decimal::from(parsed.len()));
                assert!((rendered - result.total_repaid).abs() <= tolerance);

                if interest > 0 {
                    assert!(result.total_repaid >= debt, "{interest}/{repayment}");
                }
            }
        }
    }
}
