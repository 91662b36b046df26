//! Lenders' mortgage insurance approximation.
//!
//! Premiums are a flat share of the loan chosen by LVR band and loan size.
//! Real premiums vary by insurer and lender; the figures here are indicative.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::brackets::round_currency;

/// Insurance is not needed at or below this LVR.
pub const NO_INSURANCE_LVR: f64 = 80.0;
/// Largest loan the premium table covers.
pub const MAX_MODELLED_LOAN: f64 = 1_000_000.0;
/// Loans up to this size use the lower premium column.
const SMALL_LOAN_LIMIT: f64 = 500_000.0;

/// `(upper LVR, rate for small loans, rate for large loans)`.
const PREMIUM_BANDS: &[(f64, f64, f64)] = &[
    (85.0, 0.0110, 0.0145),
    (90.0, 0.0195, 0.0245),
    (95.0, 0.0340, 0.0410),
];

/// Wire value standing for "insurance required, ask the lender".
pub const CONTACT_LENDER_SENTINEL: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub enum LmiEstimate {
    /// LVR at or below 80%.
    NotRequired,
    /// Covered by the first home guarantee.
    Waived,
    Premium(f64),
    /// Insurance applies but this LVR or loan size is not modelled.
    ContactLender,
}

impl LmiEstimate {
    /// Premium as a number, with `-1` for [`LmiEstimate::ContactLender`].
    pub fn amount(self) -> f64 {
        match self {
            Self::NotRequired | Self::Waived => 0.0,
            Self::Premium(premium) => premium,
            Self::ContactLender => CONTACT_LENDER_SENTINEL,
        }
    }

    /// Amount to add to upfront costs; never negative.
    pub fn payable(self) -> f64 {
        self.amount().max(0.0)
    }

    pub fn requires_quote(self) -> bool {
        matches!(self, Self::ContactLender)
    }
}

impl From<LmiEstimate> for f64 {
    fn from(value: LmiEstimate) -> Self {
        value.amount()
    }
}

impl From<f64> for LmiEstimate {
    fn from(value: f64) -> Self {
        if value < 0.0 {
            Self::ContactLender
        } else if value == 0.0 {
            Self::NotRequired
        } else {
            Self::Premium(value)
        }
    }
}

impl fmt::Display for LmiEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRequired => f.write_str("not required"),
            Self::Waived => f.write_str("waived under the first home guarantee"),
            Self::Premium(premium) => write!(f, "${premium:.0}"),
            Self::ContactLender => f.write_str("contact lender"),
        }
    }
}

/// Estimates the premium for a loan of `loan_amount` at `lvr` percent.
///
/// `property_value` is accepted so callers can pass the full purchase context;
/// the table is keyed on the loan itself.
pub fn estimate_lmi(property_value: f64, loan_amount: f64, lvr: f64) -> LmiEstimate {
    if property_value <= 0.0 || loan_amount <= 0.0 || lvr <= NO_INSURANCE_LVR {
        return LmiEstimate::NotRequired;
    }
    if loan_amount > MAX_MODELLED_LOAN {
        return LmiEstimate::ContactLender;
    }

    let band = PREMIUM_BANDS.iter().find(|(upper, _, _)| lvr <= *upper);
    match band {
        Some((_, small, large)) => {
            let rate = if loan_amount <= SMALL_LOAN_LIMIT {
                small
            } else {
                large
            };
            LmiEstimate::Premium(round_currency(loan_amount * rate))
        }
        None => LmiEstimate::ContactLender,
    }
}
