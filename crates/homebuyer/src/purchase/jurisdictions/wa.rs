//! Western Australia: transfer duty, first home owner rate and FHOG.

use super::{new_build_grant, taper, DutyAssessment, InputProfile, ScheduleVersion, StateRules};
use crate::purchase::brackets::{evaluate, round_cents, round_currency, Bracket};
use crate::purchase::domain::PurchaseInput;

/// Residential and general rates are unified from 2025-26.
pub(crate) const GENERAL_BRACKETS: &[Bracket] = &[
    Bracket::new(0.0, 120_000.0, 0.0, 0.019),
    Bracket::new(120_001.0, 150_000.0, 2_280.0, 0.0285),
    Bracket::new(150_001.0, 360_000.0, 3_135.0, 0.038),
    Bracket::new(360_001.0, 725_000.0, 11_115.0, 0.0475),
    Bracket::new(725_001.0, f64::INFINITY, 28_454.0, 0.0515),
];

const FHB_EXEMPT_TO: f64 = 450_000.0;
const FHB_TAPER_TO: f64 = 600_000.0;

const GRANT_AMOUNT: f64 = 10_000.0;
// South of the 26th parallel. The $1M northern cap is not modelled.
const GRANT_CAP: f64 = 750_000.0;
const MORTGAGE_REGISTRATION_FEE: f64 = 210.30;

pub(crate) static RULES: StateRules = StateRules {
    schedule: ScheduleVersion::new("WA transfer duty 2025-26", 2025, 7, 1),
    inputs: InputProfile {
        foreign_purchaser: true,
        income: false,
        pensioner: false,
        children: false,
        foreign_surcharge: true,
    },
    assess,
    grant: |input| new_build_grant(input, GRANT_AMOUNT, Some(GRANT_CAP)),
    registration_fee: |_| MORTGAGE_REGISTRATION_FEE,
    transfer_fee,
    foreign_surcharge_rate: Some(0.07),
};

pub(crate) fn general_duty(value: f64) -> f64 {
    round_currency(evaluate(value, GENERAL_BRACKETS))
}

fn assess(input: &PurchaseInput) -> DutyAssessment {
    let value = input.property_value;
    let full = general_duty(value);

    if !input.is_first_home_owner_occupier() {
        return DutyAssessment::full_rate(full, "No stamp duty concession applies");
    }
    if value <= FHB_EXEMPT_TO {
        return DutyAssessment::exempt(
            full,
            "FHB: Full stamp duty exemption for properties up to $450k",
        );
    }
    if value <= FHB_TAPER_TO {
        let duty = taper(value, FHB_EXEMPT_TO, FHB_TAPER_TO, general_duty);
        return DutyAssessment::concession(
            full,
            duty,
            "FHB: Sliding scale concession ($450k to $600k)",
        );
    }

    DutyAssessment::full_rate(full, "Property value exceeds FHB concession threshold")
}

/// $210.30 below $100k, $220.30 to $150k, then $20 more per $100k step.
fn transfer_fee(input: &PurchaseInput) -> f64 {
    let value = input.property_value;
    if value < 100_000.0 {
        return 210.30;
    }
    if value < 150_000.0 {
        return 220.30;
    }
    let steps = ((value - 150_000.0) / 100_000.0).floor() + 1.0;
    round_cents(220.30 + steps * 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_schedule_matches_published_figures() {
        assert_eq!(general_duty(450_000.0), 15_390.0);
        assert_eq!(general_duty(600_000.0), 22_515.0);
    }
}
