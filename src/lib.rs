pub mod config;
pub mod decimal;
pub mod errors;
pub mod input;
pub mod payments;
pub mod report;
pub mod types;

// re-export key types
pub use config::{CalculatorConfig, DEFAULT_REPORT_FILE};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use input::{numeric_mask, parse_percentage, RepaymentRequest};
pub use payments::{compute_repayment, AmortizationCalculator, LoanState, MonthStep};
pub use report::{
    parse_report, write_report, FileReportSink, RepaymentResult, ReportLine, ReportSink,
};
pub use types::{Percentage, RepaymentKind, RepaymentPolicy};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
