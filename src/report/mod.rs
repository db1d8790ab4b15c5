pub mod sink;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};
use crate::types::RepaymentKind;

pub use sink::{write_report, FileReportSink, ReportSink};

/// one month of the repayment report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub month: u32,
    pub kind: RepaymentKind,
    pub amount: Money,
    pub remaining_debt: Money,
}

impl ReportLine {
    pub fn repaid(month: u32, amount: Money, remaining_debt: Money) -> Self {
        Self {
            month,
            kind: RepaymentKind::Repaid,
            amount,
            remaining_debt,
        }
    }

    /// final line always reports a cleared balance
    pub fn final_payment(month: u32, amount: Money) -> Self {
        Self {
            month,
            kind: RepaymentKind::FinalPayment,
            amount,
            remaining_debt: Money::ZERO,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RepaymentKind::Repaid => write!(
                f,
                "Month {}: Repaid {}, Remaining Debt: {}",
                self.month, self.amount, self.remaining_debt
            ),
            RepaymentKind::FinalPayment => write!(
                f,
                "Month {}: Final Payment {}, Remaining Debt: {}",
                self.month, self.amount, Money::ZERO
            ),
        }
    }
}

impl FromStr for ReportLine {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        let line = s.trim_end();
        let malformed = || CalculatorError::ReportParse {
            line: line.to_string(),
        };

        let (month, rest) = line
            .strip_prefix("Month ")
            .and_then(|r| r.split_once(": "))
            .ok_or_else(malformed)?;
        let month: u32 = month.parse().map_err(|_| malformed())?;

        let (kind, rest) = if let Some(r) = rest.strip_prefix("Repaid ") {
            (RepaymentKind::Repaid, r)
        } else if let Some(r) = rest.strip_prefix("Final Payment ") {
            (RepaymentKind::FinalPayment, r)
        } else {
            return Err(malformed());
        };

        let (amount, remaining) = rest
            .split_once(", Remaining Debt: ")
            .ok_or_else(malformed)?;
        let amount: Money = amount.parse().map_err(|_| malformed())?;
        let remaining_debt: Money = remaining.parse().map_err(|_| malformed())?;

        Ok(Self {
            month,
            kind,
            amount,
            remaining_debt,
        })
    }
}

/// total repaid and the month-by-month report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RepaymentResult {
    pub total_repaid: Money,
    pub report: Vec<ReportLine>,
}

impl RepaymentResult {
    /// formatted report lines in order
    pub fn lines(&self) -> Vec<String> {
        self.report.iter().map(ToString::to_string).collect()
    }

    pub fn months(&self) -> u32 {
        self.report.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.report.is_empty()
    }

    pub fn final_payment(&self) -> Option<&ReportLine> {
        self.report.last().filter(|l| l.kind.is_final())
    }

    /// total as shown to the user, e.g. "£117.60"
    pub fn display_total(&self) -> String {
        self.total_repaid.to_string()
    }

    pub fn json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// parse a saved report back into lines
pub fn parse_report(text: &str) -> Result<Vec<ReportLine>> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::parse)
        .collect()
}
