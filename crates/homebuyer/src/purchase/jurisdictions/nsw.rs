//! New South Wales: transfer duty, First Home Buyers Assistance Scheme, FHOG.

use super::{new_build_grant, taper, DutyAssessment, InputProfile, ScheduleVersion, StateRules};
use crate::purchase::brackets::{evaluate, round_currency, Bracket};
use crate::purchase::domain::{GrantOutcome, PropertyType, PurchaseInput};

pub(crate) const GENERAL_BRACKETS: &[Bracket] = &[
    Bracket::new(0.0, 17_000.0, 0.0, 0.0125),
    Bracket::new(17_001.0, 36_000.0, 212.0, 0.015),
    Bracket::new(36_001.0, 97_000.0, 497.0, 0.0175),
    Bracket::new(97_001.0, 364_000.0, 1_564.0, 0.035),
    Bracket::new(364_001.0, 1_212_000.0, 10_909.0, 0.045),
    Bracket::new(1_212_001.0, f64::INFINITY, 49_069.0, 0.055),
];

struct FhbasWindow {
    exempt_to: f64,
    taper_to: f64,
    exempt_note: &'static str,
    taper_note: &'static str,
}

const HOME_WINDOW: FhbasWindow = FhbasWindow {
    exempt_to: 800_000.0,
    taper_to: 1_000_000.0,
    exempt_note: "FHBAS: Full stamp duty exemption for properties up to $800k",
    taper_note: "FHBAS: Sliding scale concession ($800k to $1M)",
};

const VACANT_LAND_WINDOW: FhbasWindow = FhbasWindow {
    exempt_to: 350_000.0,
    taper_to: 450_000.0,
    exempt_note: "FHBAS: Full stamp duty exemption for vacant land up to $350k",
    taper_note: "FHBAS: Sliding scale concession for vacant land ($350k to $450k)",
};

const GRANT_AMOUNT: f64 = 10_000.0;
const GRANT_CAP_NEW_HOME: f64 = 600_000.0;
const GRANT_CAP_VACANT_LAND: f64 = 750_000.0;
const MORTGAGE_REGISTRATION_FEE: f64 = 171.70;
const TRANSFER_FEE: f64 = 171.70;

pub(crate) static RULES: StateRules = StateRules {
    schedule: ScheduleVersion::new("NSW transfer duty 2025-26, FHBAS from 1 August 2023", 2025, 7, 1),
    inputs: InputProfile {
        foreign_purchaser: true,
        income: false,
        pensioner: false,
        children: false,
        foreign_surcharge: true,
    },
    assess,
    grant,
    registration_fee: |_| MORTGAGE_REGISTRATION_FEE,
    transfer_fee: |_| TRANSFER_FEE,
    foreign_surcharge_rate: Some(0.09),
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

    let window = match input.property_type {
        PropertyType::VacantLand => &VACANT_LAND_WINDOW,
        PropertyType::Established | PropertyType::NewlyConstructed => &HOME_WINDOW,
    };

    if value <= window.exempt_to {
        return DutyAssessment::exempt(full, window.exempt_note);
    }
    if value <= window.taper_to {
        let duty = taper(value, window.exempt_to, window.taper_to, general_duty);
        return DutyAssessment::concession(full, duty, window.taper_note);
    }

    DutyAssessment::full_rate(full, "Property value exceeds FHBAS threshold")
}

fn grant(input: &PurchaseInput) -> GrantOutcome {
    let cap = match input.property_type {
        PropertyType::VacantLand => GRANT_CAP_VACANT_LAND,
        _ => GRANT_CAP_NEW_HOME,
    };
    new_build_grant(input, GRANT_AMOUNT, Some(cap))
}
