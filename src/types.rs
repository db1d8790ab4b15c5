use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::Rate;
use crate::errors::{CalculatorError, Result};

/// whole-number percentage bounded to 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "i64", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);
    pub const HUNDRED: Percentage = Percentage(100);

    pub fn new(value: u8) -> Result<Self> {
        Self::try_from(i64::from(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_rate(&self) -> Rate {
        Rate::from_percentage(u32::from(self.0))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for Percentage {
    type Error = CalculatorError;

    fn try_from(value: i64) -> Result<Self> {
        if (0..=100).contains(&value) {
            Ok(Percentage(value as u8))
        } else {
            Err(CalculatorError::InvalidPercentage {
                field: "percentage".to_string(),
                value: value.to_string(),
            })
        }
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> u8 {
        p.0
    }
}

impl FromStr for Percentage {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        crate::input::parse_percentage("percentage", s)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// how a month's repayment amount was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentPolicy {
    /// percentage of the post-interest balance
    Percentage,
    /// the fixed repayment floor
    FixedFloor,
}

/// kind of report line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentKind {
    /// regular monthly repayment
    Repaid,
    /// terminal payoff of the remaining balance
    FinalPayment,
}

impl RepaymentKind {
    pub fn is_final(&self) -> bool {
        matches!(self, RepaymentKind::FinalPayment)
    }
}
