use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::brackets::round_cents;
use super::domain::{
    BuyerType, ConcessionInfo, FeesBreakdown, GrantOutcome, Jurisdiction, PurchaseInput,
};
use super::guarantee::{check_guarantee_eligibility, GuaranteeEligibility};
use super::lmi::{estimate_lmi, LmiEstimate};
use super::loan::LoanSummary;

/// Failure that prevents an estimate from being produced.
///
/// Ineligibility for a grant, concession or the guarantee is never an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("unknown jurisdiction code `{code}`")]
    UnknownJurisdiction { code: String },
    #[error("`{field}` must be a finite number")]
    NonFiniteInput { field: &'static str },
    #[error("{jurisdiction} schedule takes effect on {effective_from}, after {as_of}")]
    ScheduleNotInEffect {
        jurisdiction: Jurisdiction,
        as_of: NaiveDate,
        effective_from: NaiveDate,
    },
}

/// Itemised cash needed at settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpfrontCosts {
    pub deposit: f64,
    pub stamp_duty: f64,
    /// Payable premium; a lender quote counts as zero here.
    pub lmi: f64,
    pub mortgage_registration: f64,
    pub land_transfer: f64,
    pub transaction_fees: f64,
    pub foreign_surcharge: f64,
    pub grant_offset: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub jurisdiction: Jurisdiction,
    pub label: String,
    pub effective_from: NaiveDate,
}

impl From<Jurisdiction> for ScheduleSummary {
    fn from(jurisdiction: Jurisdiction) -> Self {
        let schedule = jurisdiction.schedule();
        Self {
            jurisdiction,
            label: schedule.label.to_string(),
            effective_from: schedule.effective_from(),
        }
    }
}

/// Everything computed for one purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseReport {
    pub state: Jurisdiction,
    pub buyer_type: BuyerType,
    pub schedule: ScheduleSummary,
    pub concession: GrantOutcome,
    pub fees: FeesBreakdown,
    pub stamp_duty_concession: ConcessionInfo,
    pub guarantee_eligibility: GuaranteeEligibility,
    pub loan: LoanSummary,
    pub upfront_costs: UpfrontCosts,
}

/// Produces the full cost estimate for a purchase.
///
/// Pure: the same input always yields the same report.
pub fn compute(input: &PurchaseInput) -> Result<PurchaseReport, CalculationError> {
    validate(input)?;
    let state = input.state;

    let grant = state.first_home_grant(input);
    let registration = state.registration_fee(input);
    let transfer = state.transfer_fee(input);
    let assessment = state.assess_duty(input);
    let surcharge = state.foreign_surcharge(input);

    let fees = FeesBreakdown {
        mortgage_registration: registration,
        land_transfer: transfer,
        stamp_duty: assessment.duty,
        foreign_surcharge: surcharge,
        total: round_cents(registration + transfer + assessment.duty + surcharge.unwrap_or(0.0)),
    };

    let deposit = input.deposit();
    let guarantee = check_guarantee_eligibility(input);
    let loan = LoanSummary::from_terms(
        input.property_value,
        deposit,
        input.loan_term,
        input.interest_rate,
    );
    let lmi = if guarantee.eligible {
        LmiEstimate::Waived
    } else {
        estimate_lmi(input.property_value, loan.amount, loan.lvr)
    };
    let loan = loan.with_lmi(lmi);

    let upfront = UpfrontCosts {
        deposit,
        stamp_duty: fees.stamp_duty,
        lmi: lmi.payable(),
        mortgage_registration: registration,
        land_transfer: transfer,
        transaction_fees: input.transaction_fees.max(0.0),
        foreign_surcharge: surcharge.unwrap_or(0.0),
        grant_offset: grant.amount,
        total: 0.0,
    };
    let upfront = UpfrontCosts {
        total: round_cents(
            upfront.deposit
                + upfront.stamp_duty
                + upfront.lmi
                + upfront.mortgage_registration
                + upfront.land_transfer
                + upfront.transaction_fees
                + upfront.foreign_surcharge
                - upfront.grant_offset,
        ),
        ..upfront
    };

    debug!(
        state = %state,
        property_value = input.property_value,
        stamp_duty = fees.stamp_duty,
        concession = assessment.concession.status.label(),
        guarantee = guarantee.eligible,
        lmi = lmi.amount(),
        upfront_total = upfront.total,
        "purchase estimate computed"
    );

    Ok(PurchaseReport {
        state,
        buyer_type: input.buyer_type,
        schedule: ScheduleSummary::from(state),
        concession: grant,
        fees,
        stamp_duty_concession: assessment.concession,
        guarantee_eligibility: guarantee,
        loan,
        upfront_costs: upfront,
    })
}

fn validate(input: &PurchaseInput) -> Result<(), CalculationError> {
    let numbers = [
        ("property_value", input.property_value),
        ("yearly_income", input.yearly_income),
        ("deposit_savings", input.deposit_savings),
        ("interest_rate", input.interest_rate),
        ("transaction_fees", input.transaction_fees),
    ];
    if let Some(&(field, _)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
        return Err(CalculationError::NonFiniteInput { field });
    }

    if let Some(as_of) = input.as_of {
        let effective_from = input.state.schedule().effective_from();
        if as_of < effective_from {
            return Err(CalculationError::ScheduleNotInEffect {
                jurisdiction: input.state,
                as_of,
                effective_from,
            });
        }
    }
    Ok(())
}
