use std::path::PathBuf;

use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("debt never amortizes: balance {debt} at month {month} is not falling")]
    DebtNeverAmortizes {
        month: u32,
        debt: Money,
    },

    #[error("repayment did not finish within {limit} months")]
    MonthLimitExceeded {
        limit: u32,
    },

    #[error("invalid {field}: '{value}', enter a whole number between 0 and 100")]
    InvalidPercentage {
        field: String,
        value: String,
    },

    #[error("no report to save, please calculate repayment first")]
    EmptyReport,

    #[error("could not save report to {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognised report line: {line}")]
    ReportParse {
        line: String,
    },
}

impl CalculatorError {
    /// true for errors caused by parameters that can never produce a schedule
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CalculatorError::InvalidConfiguration { .. }
                | CalculatorError::DebtNeverAmortizes { .. }
                | CalculatorError::MonthLimitExceeded { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
