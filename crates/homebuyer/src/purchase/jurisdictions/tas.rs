//! Tasmania: transfer duty, first home buyer duty relief and FHOG.

use super::{new_build_grant, DutyAssessment, InputProfile, ScheduleVersion, StateRules};
use crate::purchase::brackets::{evaluate, round_currency, Bracket};
use crate::purchase::domain::{PropertyType, PurchaseInput};

pub(crate) const GENERAL_BRACKETS: &[Bracket] = &[
    Bracket::new(0.0, 3_000.0, 50.0, 0.0),
    Bracket::new(3_001.0, 25_000.0, 50.0, 0.0175),
    Bracket::new(25_001.0, 75_000.0, 435.0, 0.0225),
    Bracket::new(75_001.0, 200_000.0, 1_560.0, 0.035),
    Bracket::new(200_001.0, 375_000.0, 5_935.0, 0.04),
    Bracket::new(375_001.0, 725_000.0, 12_935.0, 0.0425),
    Bracket::new(725_001.0, f64::INFINITY, 27_810.0, 0.045),
];

const GRANT_AMOUNT: f64 = 10_000.0;

pub(crate) static RULES: StateRules = StateRules {
    schedule: ScheduleVersion::new("TAS transfer duty, established home relief", 2025, 7, 1),
    inputs: InputProfile {
        foreign_purchaser: true,
        income: false,
        pensioner: false,
        children: false,
        foreign_surcharge: true,
    },
    assess,
    grant: |input| new_build_grant(input, GRANT_AMOUNT, None),
    registration_fee: |_| 163.0,
    transfer_fee: |_| 250.0,
    foreign_surcharge_rate: Some(0.08),
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
        PropertyType::Established => {
            DutyAssessment::exempt(full, "FHB: Full stamp duty exemption for established homes")
        }
        // New builds get the grant instead.
        PropertyType::NewlyConstructed | PropertyType::VacantLand => {
            DutyAssessment::full_rate(full, "No stamp duty concession for this property type")
        }
    }
}
