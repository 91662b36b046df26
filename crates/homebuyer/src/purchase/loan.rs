use serde::{Deserialize, Serialize};

use super::brackets::round_cents;
use super::lmi::LmiEstimate;

/// Principal and interest repayment for an amortising loan, rounded to cents.
///
/// Uses `P * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and `n` the
/// number of monthly payments. A zero or negative rate repays principal in
/// equal instalments. Non-positive principals owe nothing.
pub fn monthly_repayment(principal: f64, term_years: u32, annual_rate_percent: f64) -> f64 {
    if principal <= 0.0 {
        return 0.0;
    }
    let payments = f64::from(term_years) * 12.0;
    if payments <= 0.0 {
        return round_cents(principal);
    }
    if annual_rate_percent <= 0.0 {
        return round_cents(principal / payments);
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powf(payments);
    round_cents(principal * (monthly_rate * growth) / (growth - 1.0))
}

/// Loan amount as a percentage of the purchase price.
///
/// Zero when the price is not positive or the deposit covers the whole price.
pub fn loan_to_value_ratio(price: f64, deposit: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    let loan = price - deposit;
    if loan <= 0.0 {
        return 0.0;
    }
    loan / price * 100.0
}

/// Loan figures for the purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub amount: f64,
    pub lvr: f64,
    pub monthly_repayment: f64,
    pub total_repayment: f64,
    pub total_interest: f64,
    /// Premium estimate; `-1` on the wire means the lender must quote.
    pub lmi: LmiEstimate,
}

impl LoanSummary {
    /// Builds the summary before any mortgage insurance is considered.
    ///
    /// Totals are accumulated in whole cents so that `total_repayment - amount`
    /// equals `total_interest` to the cent. A zero term is a single payment of
    /// the whole loan.
    pub fn from_terms(price: f64, deposit: f64, term_years: u32, annual_rate_percent: f64) -> Self {
        let amount = round_cents((price - deposit).max(0.0));
        let monthly = monthly_repayment(amount, term_years, annual_rate_percent);
        let payments = (i128::from(term_years) * 12).max(1);

        let monthly_cents = to_cents(monthly);
        let total_cents = if amount > 0.0 {
            monthly_cents.saturating_mul(payments)
        } else {
            0
        };
        let interest_cents = total_cents.saturating_sub(to_cents(amount));

        Self {
            amount,
            lvr: loan_to_value_ratio(price, deposit),
            monthly_repayment: monthly,
            total_repayment: from_cents(total_cents),
            total_interest: if amount > 0.0 {
                from_cents(interest_cents)
            } else {
                0.0
            },
            lmi: LmiEstimate::NotRequired,
        }
    }

    pub fn with_lmi(mut self, lmi: LmiEstimate) -> Self {
        self.lmi = lmi;
        self
    }
}

fn to_cents(amount: f64) -> i128 {
    (amount * 100.0).round() as i128
}

fn from_cents(cents: i128) -> f64 {
    cents as f64 / 100.0
}
