//! Northern Territory: formula-based stamp duty, House and Land Package
//! Exemption (HLPE) and the territory's grants.

use super::{DutyAssessment, InputProfile, ScheduleVersion, StateRules};
use crate::purchase::brackets::round_currency;
use crate::purchase::domain::{GrantOutcome, PropertyType, PurchaseInput};

// Up to $525k duty is (0.06571441 * V^2) + 15V with V = value / 1000.
const FORMULA_CEILING: f64 = 525_000.0;
const FORMULA_QUADRATIC: f64 = 0.06571441;
const FORMULA_LINEAR: f64 = 15.0;

/// Flat share of the whole value, as `(upper bound, rate)`.
const FLAT_RATE_TIERS: &[(f64, f64)] = &[(3_000_000.0, 0.0495), (5_000_000.0, 0.0575)];
const TOP_FLAT_RATE: f64 = 0.0595;

const NEW_BUILD_GRANT: f64 = 50_000.0;
const ESTABLISHED_GRANT: f64 = 10_000.0;

pub(crate) static RULES: StateRules = StateRules {
    // HLPE runs until 30 June 2027.
    schedule: ScheduleVersion::new("NT stamp duty, HLPE to 30 June 2027", 2025, 7, 1),
    inputs: InputProfile {
        foreign_purchaser: false,
        income: false,
        pensioner: true,
        children: false,
        foreign_surcharge: false,
    },
    assess,
    grant,
    registration_fee: |_| 176.0,
    transfer_fee: |_| 176.0,
    foreign_surcharge_rate: None,
};

pub(crate) fn general_duty(value: f64) -> f64 {
    if value <= FORMULA_CEILING {
        let v = value / 1_000.0;
        let duty = FORMULA_QUADRATIC * v * v + FORMULA_LINEAR * v;
        return round_currency(duty.max(0.0));
    }
    let rate = FLAT_RATE_TIERS
        .iter()
        .find(|(upper, _)| value <= *upper)
        .map(|(_, rate)| *rate)
        .unwrap_or(TOP_FLAT_RATE);
    round_currency(value * rate)
}

fn assess(input: &PurchaseInput) -> DutyAssessment {
    let full = general_duty(input.property_value);

    if input.is_first_home_owner_occupier() && input.property_type.is_new_build() {
        return DutyAssessment::exempt(
            full,
            "HLPE: Full stamp duty exemption for new homes (until June 2027)",
        );
    }

    DutyAssessment::full_rate(full, "No stamp duty concession applies")
}

/// The territory also pays a grant on established homes, with no value cap.
fn grant(input: &PurchaseInput) -> GrantOutcome {
    if !input.is_first_home_owner_occupier() {
        return GrantOutcome::ineligible();
    }
    match input.property_type {
        PropertyType::NewlyConstructed | PropertyType::VacantLand => {
            GrantOutcome::eligible(NEW_BUILD_GRANT)
        }
        PropertyType::Established => GrantOutcome::eligible(ESTABLISHED_GRANT),
    }
}
