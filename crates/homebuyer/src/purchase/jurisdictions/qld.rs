//! Queensland: transfer duty, home concession, first home concession and FHOG.

use super::{new_build_grant, DutyAssessment, InputProfile, ScheduleVersion, StateRules};
use crate::purchase::brackets::{evaluate, format_dollars, round_currency, Bracket};
use crate::purchase::domain::{ConcessionInfo, PurchaseInput};

pub(crate) const TRANSFER_DUTY_BRACKETS: &[Bracket] = &[
    Bracket::new(0.0, 5_000.0, 0.0, 0.0),
    Bracket::new(5_001.0, 75_000.0, 0.0, 0.015),
    Bracket::new(75_001.0, 540_000.0, 1_050.0, 0.035),
    Bracket::new(540_001.0, 1_000_000.0, 17_325.0, 0.045),
    Bracket::new(1_000_001.0, f64::INFINITY, 38_025.0, 0.0575),
];

/// Home concession rates for owner-occupiers.
pub(crate) const HOME_CONCESSION_BRACKETS: &[Bracket] = &[
    Bracket::new(0.0, 350_000.0, 0.0, 0.01),
    Bracket::new(350_001.0, 540_000.0, 3_500.0, 0.035),
    Bracket::new(540_001.0, 1_000_000.0, 10_150.0, 0.045),
    Bracket::new(1_000_001.0, f64::INFINITY, 30_850.0, 0.0575),
];

// First home concession on established homes is a fixed dollar amount that
// steps down by 1,735 for each $10k band from $710k and is gone at $800k.
const FHB_CONCESSION_MAX: f64 = 17_350.0;
const FHB_CONCESSION_STEP: f64 = 1_735.0;
const FHB_PHASE_OUT_FROM: f64 = 710_000.0;
const FHB_PHASE_OUT_TO: f64 = 800_000.0;
const FHB_STEP_WIDTH: f64 = 10_000.0;

const GRANT_AMOUNT: f64 = 30_000.0;
const GRANT_CAP: f64 = 750_000.0;
const MORTGAGE_REGISTRATION_FEE: f64 = 238.0;
const TRANSFER_FEE_FLOOR: f64 = 238.0;
const TRANSFER_FEE_BASE: f64 = 238.14;
const TRANSFER_FEE_FREE_TO: f64 = 180_000.0;
const TRANSFER_FEE_PER_STEP: f64 = 44.71;
const TRANSFER_FEE_STEP_WIDTH: f64 = 10_000.0;

pub(crate) static RULES: StateRules = StateRules {
    schedule: ScheduleVersion::new(
        "QLD transfer duty, first home new build exemption from 1 May 2025",
        2025,
        5,
        1,
    ),
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
    foreign_surcharge_rate: Some(0.08),
};

pub(crate) fn transfer_duty(value: f64) -> f64 {
    round_currency(evaluate(value, TRANSFER_DUTY_BRACKETS))
}

pub(crate) fn home_concession_duty(value: f64) -> f64 {
    round_currency(evaluate(value, HOME_CONCESSION_BRACKETS))
}

pub(crate) fn established_first_home_concession(value: f64) -> f64 {
    if value < FHB_PHASE_OUT_FROM {
        return FHB_CONCESSION_MAX;
    }
    if value >= FHB_PHASE_OUT_TO {
        return 0.0;
    }
    let step = ((value - FHB_PHASE_OUT_FROM) / FHB_STEP_WIDTH).floor();
    (FHB_CONCESSION_MAX - (step + 1.0) * FHB_CONCESSION_STEP).max(0.0)
}

fn assess(input: &PurchaseInput) -> DutyAssessment {
    let value = input.property_value;

    if input.is_first_home_owner_occupier() {
        let home_duty = home_concession_duty(value);

        if input.property_type.is_new_build() {
            return DutyAssessment::exempt(
                home_duty,
                "FHB: Full stamp duty exemption for new homes and vacant land (from May 2025)",
            );
        }

        let concession = established_first_home_concession(value);
        let duty = round_currency((home_duty - concession).max(0.0));
        if concession >= home_duty {
            return DutyAssessment::exempt(
                home_duty,
                "FHB: Full stamp duty exemption for established homes up to $710k",
            );
        }
        if concession > 0.0 {
            return DutyAssessment {
                duty,
                concession: ConcessionInfo::concession(
                    concession,
                    format!(
                        "FHB: ${} concession for established homes ($710k to $800k)",
                        format_dollars(concession)
                    ),
                ),
            };
        }
        return DutyAssessment::full_rate(duty, "Property value exceeds FHB concession threshold");
    }

    // The home concession rate is the owner-occupier schedule itself, not a
    // first home concession.
    let duty = if input.is_owner_occupier() {
        home_concession_duty(value)
    } else {
        transfer_duty(value)
    };
    DutyAssessment::full_rate(duty, "No stamp duty concession applies")
}

fn transfer_fee(input: &PurchaseInput) -> f64 {
    let value = input.property_value;
    if value <= TRANSFER_FEE_FREE_TO {
        return TRANSFER_FEE_FLOOR;
    }
    let steps = ((value - TRANSFER_FEE_FREE_TO) / TRANSFER_FEE_STEP_WIDTH).ceil();
    round_currency(TRANSFER_FEE_BASE + steps * TRANSFER_FEE_PER_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concession_steps_down_in_10k_bands() {
        assert_eq!(established_first_home_concession(709_999.0), 17_350.0);
        assert_eq!(established_first_home_concession(710_000.0), 15_615.0);
        assert_eq!(established_first_home_concession(719_999.0), 15_615.0);
        assert_eq!(established_first_home_concession(720_000.0), 13_880.0);
        assert_eq!(established_first_home_concession(799_999.0), 1_735.0);
        assert_eq!(established_first_home_concession(800_000.0), 0.0);
    }

    #[test]
    fn repeat_owner_occupiers_pay_the_home_rate_without_a_concession() {
        let buyer = crate::purchase::tests::common::input(crate::purchase::Jurisdiction::Qld);

        let assessment = assess(&buyer);

        assert_eq!(assessment.duty, 8_750.0);
        assert_eq!(
            assessment.concession.status,
            crate::purchase::ConcessionStatus::FullRate
        );
        assert_eq!(assessment.concession.savings, 0.0);
        assert_eq!(
            assessment.concession.description,
            "No stamp duty concession applies"
        );
    }

    #[test]
    fn home_concession_undercuts_transfer_duty() {
        assert_eq!(home_concession_duty(500_000.0), 8_750.0);
        assert_eq!(transfer_duty(500_000.0), 15_925.0);
    }
}
