//! Australian Capital Territory: conveyance duty, Home Buyer Concession Scheme
//! (HBCS) and the pensioner duty concession.
//!
//! The territory replaced its grant with the HBCS, so no grant is ever payable
//! here, and it levies no foreign purchaser surcharge on this kind of transfer.

use super::{DutyAssessment, InputProfile, ScheduleVersion, StateRules};
use crate::purchase::brackets::{evaluate, round_currency, Bracket};
use crate::purchase::domain::{GrantOutcome, PurchaseInput};

/// Investor and non-residential rates. Above the last bracket the whole value
/// is charged at a flat rate, which drops duty slightly at the threshold.
pub(crate) const GENERAL_BRACKETS: &[Bracket] = &[
    Bracket::new(0.0, 200_000.0, 0.0, 0.012),
    Bracket::new(200_001.0, 300_000.0, 2_400.0, 0.022),
    Bracket::new(300_001.0, 500_000.0, 4_600.0, 0.034),
    Bracket::new(500_001.0, 750_000.0, 11_400.0, 0.0432),
    Bracket::new(750_001.0, 1_000_000.0, 22_200.0, 0.059),
    Bracket::new(1_000_001.0, 1_455_000.0, 36_950.0, 0.064),
];
const GENERAL_FLAT_RATE_THRESHOLD: f64 = 1_455_000.0;
const GENERAL_FLAT_RATE: f64 = 0.0454;

/// Owner-occupier rates.
pub(crate) const RESIDENTIAL_BRACKETS: &[Bracket] = &[
    Bracket::new(0.0, 260_000.0, 0.0, 0.0028),
    Bracket::new(260_001.0, 300_000.0, 728.0, 0.022),
    Bracket::new(300_001.0, 500_000.0, 1_608.0, 0.034),
    Bracket::new(500_001.0, 750_000.0, 8_408.0, 0.0432),
    Bracket::new(750_001.0, 1_000_000.0, 19_208.0, 0.059),
    Bracket::new(1_000_001.0, 1_455_000.0, 33_958.0, 0.064),
    Bracket::new(1_455_001.0, f64::INFINITY, 66_057.0, 0.0454),
];

const CONCESSION_EXEMPT_TO: f64 = 1_020_000.0;
const CONCESSION_TAPER_TO: f64 = 1_455_000.0;
/// Dollars per $100 above the exemption threshold.
const CONCESSION_TAPER_RATE: f64 = 6.40;
const CONCESSION_UPPER_RATE: f64 = 0.0454;
const CONCESSION_MAX: f64 = 35_238.0;

// HBCS household income test, from 1 July 2024.
const INCOME_THRESHOLD_BASE: f64 = 250_000.0;
const INCOME_THRESHOLD_PER_CHILD: f64 = 4_600.0;

pub(crate) static RULES: StateRules = StateRules {
    schedule: ScheduleVersion::new("ACT conveyance duty and HBCS 2025-26", 2025, 7, 1),
    inputs: InputProfile {
        foreign_purchaser: false,
        income: true,
        pensioner: true,
        children: true,
        foreign_surcharge: false,
    },
    assess,
    grant: |_| GrantOutcome::ineligible(),
    registration_fee: |_| 178.0,
    transfer_fee: |_| 479.0,
    foreign_surcharge_rate: None,
};

pub(crate) fn residential_duty(value: f64) -> f64 {
    round_currency(evaluate(value, RESIDENTIAL_BRACKETS))
}

pub(crate) fn general_duty(value: f64) -> f64 {
    if value > GENERAL_FLAT_RATE_THRESHOLD {
        return round_currency(value * GENERAL_FLAT_RATE);
    }
    round_currency(evaluate(value, GENERAL_BRACKETS))
}

pub(crate) fn income_threshold(children: u8) -> f64 {
    INCOME_THRESHOLD_BASE + f64::from(children) * INCOME_THRESHOLD_PER_CHILD
}

/// Duty payable under the HBCS or pensioner concession.
pub(crate) fn concessional_duty(value: f64) -> f64 {
    if value <= CONCESSION_EXEMPT_TO {
        return 0.0;
    }
    if value <= CONCESSION_TAPER_TO {
        return round_currency((value - CONCESSION_EXEMPT_TO) / 100.0 * CONCESSION_TAPER_RATE);
    }
    round_currency(CONCESSION_UPPER_RATE * value - CONCESSION_MAX)
}

fn assess(input: &PurchaseInput) -> DutyAssessment {
    let value = input.property_value;

    if !input.is_owner_occupier() {
        return DutyAssessment::full_rate(general_duty(value), "No stamp duty concession applies");
    }

    let full = residential_duty(value);
    let scheme = if input.is_first_home_buyer
        && input.yearly_income <= income_threshold(input.children())
    {
        Some("HBCS")
    } else if input.is_eligible_pensioner {
        Some("Pensioner concession")
    } else {
        None
    };

    let Some(scheme) = scheme else {
        return DutyAssessment::full_rate(full, "No stamp duty concession applies");
    };

    if value <= CONCESSION_EXEMPT_TO {
        return DutyAssessment::exempt(
            full,
            format!("{scheme}: Full stamp duty exemption (property up to $1,020k)"),
        );
    }
    DutyAssessment::concession(
        full,
        concessional_duty(value),
        format!("{scheme}: Reduced stamp duty (property above $1,020k threshold)"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_threshold_grows_with_children() {
        assert_eq!(income_threshold(0), 250_000.0);
        assert_eq!(income_threshold(2), 259_200.0);
        assert_eq!(income_threshold(5), 273_000.0);
    }

    #[test]
    fn concessional_duty_tapers_then_switches_to_flat_rate() {
        assert_eq!(concessional_duty(1_020_000.0), 0.0);
        assert_eq!(concessional_duty(1_120_000.0), 6_400.0);
        assert_eq!(concessional_duty(2_000_000.0), 55_562.0);
    }

    #[test]
    fn investors_pay_flat_rate_above_threshold() {
        assert_eq!(general_duty(2_000_000.0), 90_800.0);
        assert_eq!(residential_duty(600_000.0), 12_728.0);
        assert_eq!(general_duty(600_000.0), 15_720.0);
    }
}
