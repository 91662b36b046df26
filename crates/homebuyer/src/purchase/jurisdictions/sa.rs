//! South Australia: stamp duty, first home buyer relief on new builds and FHOG.

use super::{new_build_grant, DutyAssessment, InputProfile, ScheduleVersion, StateRules};
use crate::purchase::brackets::{evaluate, round_currency, Bracket};
use crate::purchase::domain::{PropertyType, PurchaseInput};

pub(crate) const GENERAL_BRACKETS: &[Bracket] = &[
    Bracket::new(0.0, 12_000.0, 0.0, 0.01),
    Bracket::new(12_001.0, 30_000.0, 120.0, 0.02),
    Bracket::new(30_001.0, 50_000.0, 480.0, 0.03),
    Bracket::new(50_001.0, 100_000.0, 1_080.0, 0.035),
    Bracket::new(100_001.0, 200_000.0, 2_830.0, 0.04),
    Bracket::new(200_001.0, 250_000.0, 6_830.0, 0.0425),
    Bracket::new(250_001.0, 300_000.0, 8_955.0, 0.0475),
    Bracket::new(300_001.0, 500_000.0, 11_330.0, 0.05),
    Bracket::new(500_001.0, f64::INFINITY, 21_330.0, 0.055),
];

const GRANT_AMOUNT: f64 = 15_000.0;
const MORTGAGE_REGISTRATION_FEE: f64 = 198.0;

/// Flat transfer fees for low values, as `(upper bound, fee)`.
const TRANSFER_FEE_TIERS: &[(f64, f64)] = &[
    (5_000.0, 198.0),
    (20_000.0, 297.0),
    (40_000.0, 396.0),
    (50_000.0, 594.0),
];
const TRANSFER_FEE_STEPPED_FROM: f64 = 50_000.0;
const TRANSFER_FEE_STEPPED_BASE: f64 = 594.0;
const TRANSFER_FEE_PER_STEP: f64 = 98.0;
const TRANSFER_FEE_STEP_WIDTH: f64 = 10_000.0;
const TRANSFER_FEE_CAP: f64 = 10_000.0;

pub(crate) static RULES: StateRules = StateRules {
    // The temporary established-home exemption ended on 30 June 2025.
    schedule: ScheduleVersion::new("SA stamp duty, new build relief from 1 July 2025", 2025, 7, 1),
    inputs: InputProfile {
        foreign_purchaser: true,
        income: false,
        pensioner: false,
        children: false,
        foreign_surcharge: true,
    },
    assess,
    grant: |input| new_build_grant(input, GRANT_AMOUNT, None),
    registration_fee: |_| MORTGAGE_REGISTRATION_FEE,
    transfer_fee,
    foreign_surcharge_rate: Some(0.07),
};

pub(crate) fn general_duty(value: f64) -> f64 {
    round_currency(evaluate(value, GENERAL_BRACKETS))
}

fn assess(input: &PurchaseInput) -> DutyAssessment {
    let full = general_duty(input.property_value);

    if !input.is_first_home_owner_occupier() {
        return DutyAssessment::full_rate(full, "No stamp duty concession applies");
    }
    match input.property_type {
        PropertyType::NewlyConstructed | PropertyType::VacantLand => DutyAssessment::exempt(
            full,
            "FHB: Full stamp duty exemption for new homes and vacant land",
        ),
        PropertyType::Established => {
            DutyAssessment::full_rate(full, "No stamp duty concession for established homes")
        }
    }
}

fn transfer_fee(input: &PurchaseInput) -> f64 {
    let value = input.property_value;
    if let Some((_, fee)) = TRANSFER_FEE_TIERS.iter().find(|(upper, _)| value <= *upper) {
        return *fee;
    }
    let steps = ((value - TRANSFER_FEE_STEPPED_FROM) / TRANSFER_FEE_STEP_WIDTH).ceil();
    let fee = TRANSFER_FEE_STEPPED_BASE + steps * TRANSFER_FEE_PER_STEP;
    round_currency(fee.min(TRANSFER_FEE_CAP))
}
