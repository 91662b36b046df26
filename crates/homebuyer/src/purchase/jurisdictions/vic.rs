//! Victoria: land transfer duty, first home buyer exemption, PPR and pensioner concessions.

use super::{new_build_grant, DutyAssessment, InputProfile, ScheduleVersion, StateRules};
use crate::purchase::brackets::{evaluate, round_currency, Bracket};
use crate::purchase::domain::PurchaseInput;

pub(crate) const GENERAL_BRACKETS: &[Bracket] = &[
    Bracket::new(0.0, 25_000.0, 0.0, 0.014),
    Bracket::new(25_001.0, 130_000.0, 350.0, 0.024),
    Bracket::new(130_001.0, 960_000.0, 2_870.0, 0.06),
];

/// Principal place of residence rates for owner-occupiers.
pub(crate) const PPR_BRACKETS: &[Bracket] = &[
    Bracket::new(0.0, 25_000.0, 0.0, 0.014),
    Bracket::new(25_001.0, 130_000.0, 350.0, 0.024),
    Bracket::new(130_001.0, 440_000.0, 2_870.0, 0.05),
    Bracket::new(440_001.0, 550_000.0, 18_370.0, 0.06),
    Bracket::new(550_001.0, 960_000.0, 24_970.0, 0.06),
];

// Above $960k duty is a flat share of the whole value, with a higher marginal
// rate past $2M. Both schedules converge there.
const FLAT_RATE_THRESHOLD: f64 = 960_000.0;
const FLAT_RATE: f64 = 0.055;
const PREMIUM_THRESHOLD: f64 = 2_000_000.0;
const PREMIUM_BASE: f64 = 110_000.0;
const PREMIUM_RATE: f64 = 0.065;

const FHB_EXEMPT_TO: f64 = 600_000.0;
const FHB_TAPER_TO: f64 = 750_000.0;
const PENSIONER_EXEMPT_TO: f64 = 750_000.0;

const GRANT_AMOUNT: f64 = 10_000.0;
const GRANT_CAP: f64 = 750_000.0;
const MORTGAGE_REGISTRATION_FEE: f64 = 136.0;
const TRANSFER_FEE_BASE: f64 = 111.80;
const TRANSFER_FEE_PER_THOUSAND: f64 = 2.34;
const TRANSFER_FEE_CAP: f64 = 3_621.0;

pub(crate) static RULES: StateRules = StateRules {
    schedule: ScheduleVersion::new("VIC land transfer duty 2025-26", 2025, 7, 1),
    inputs: InputProfile {
        foreign_purchaser: true,
        income: false,
        pensioner: true,
        children: false,
        foreign_surcharge: true,
    },
    assess,
    grant: |input| new_build_grant(input, GRANT_AMOUNT, Some(GRANT_CAP)),
    registration_fee: |_| MORTGAGE_REGISTRATION_FEE,
    transfer_fee,
    foreign_surcharge_rate: Some(0.08),
};

fn duty_on(value: f64, brackets: &[Bracket]) -> f64 {
    if value > PREMIUM_THRESHOLD {
        return round_currency(PREMIUM_BASE + (value - PREMIUM_THRESHOLD) * PREMIUM_RATE);
    }
    if value > FLAT_RATE_THRESHOLD {
        return round_currency(value * FLAT_RATE);
    }
    round_currency(evaluate(value, brackets))
}

pub(crate) fn general_duty(value: f64) -> f64 {
    duty_on(value, GENERAL_BRACKETS)
}

pub(crate) fn ppr_duty(value: f64) -> f64 {
    duty_on(value, PPR_BRACKETS)
}

fn assess(input: &PurchaseInput) -> DutyAssessment {
    let value = input.property_value;
    let general = general_duty(value);

    if input.is_first_home_owner_occupier() {
        if value <= FHB_EXEMPT_TO {
            return DutyAssessment::exempt(
                general,
                "FHB: Full stamp duty exemption for properties up to $600k",
            );
        }
        if value <= FHB_TAPER_TO {
            let remaining = 1.0 - (FHB_TAPER_TO - value) / (FHB_TAPER_TO - FHB_EXEMPT_TO);
            let duty = round_currency(general * remaining);
            return DutyAssessment::concession(
                general,
                duty,
                "FHB: Sliding scale concession ($600k to $750k)",
            );
        }
    }

    if !input.is_owner_occupier() {
        return DutyAssessment::full_rate(general, "No stamp duty concession applies");
    }

    let ppr = ppr_duty(value);
    if input.is_eligible_pensioner && value <= PENSIONER_EXEMPT_TO {
        return DutyAssessment::exempt(
            ppr,
            "Pensioner concession: Full stamp duty exemption up to $750k",
        );
    }

    if ppr < general {
        DutyAssessment::concession(general, ppr, "PPR concession for owner-occupiers")
    } else {
        DutyAssessment::full_rate(ppr, "No stamp duty concession applies")
    }
}

fn transfer_fee(input: &PurchaseInput) -> f64 {
    let fee = TRANSFER_FEE_BASE + (input.property_value / 1_000.0) * TRANSFER_FEE_PER_THOUSAND;
    round_currency(fee.min(TRANSFER_FEE_CAP))
}
