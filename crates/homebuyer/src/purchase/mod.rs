//! Purchase cost estimates for first-home buyers across the Australian states
//! and territories.
//!
//! A [`PurchaseInput`] goes through [`compute`], which dispatches to the
//! jurisdiction's policy table and combines the result with the loan, mortgage
//! insurance and guarantee checks into one [`PurchaseReport`].

pub mod brackets;
pub mod calculator;
pub mod domain;
pub mod guarantee;
pub mod jurisdictions;
pub mod lmi;
pub mod loan;
pub mod router;

#[cfg(test)]
pub(crate) mod tests;

pub use brackets::{evaluate, round_cents, round_currency, Bracket};
pub use calculator::{compute, CalculationError, PurchaseReport, ScheduleSummary, UpfrontCosts};
pub use domain::{
    BuyerType, ConcessionInfo, ConcessionStatus, FeesBreakdown, GrantOutcome, Jurisdiction,
    PropertyPurpose, PropertyType, PurchaseInput,
};
pub use guarantee::{check_guarantee_eligibility, GuaranteeEligibility, PriceCaps};
pub use jurisdictions::{DutyAssessment, InputProfile, ScheduleVersion};
pub use lmi::{estimate_lmi, LmiEstimate};
pub use loan::{loan_to_value_ratio, monthly_repayment, LoanSummary};
pub use router::{estimate_router, JurisdictionSummary};
