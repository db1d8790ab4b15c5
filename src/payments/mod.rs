pub mod amortization;

pub use amortization::{compute_repayment, AmortizationCalculator, LoanState, MonthStep};
