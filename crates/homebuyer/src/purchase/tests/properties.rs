use proptest::prelude::*;

use super::common::input;
use crate::purchase::brackets::Bracket;
use crate::purchase::domain::{
    BuyerType, ConcessionStatus, Jurisdiction, PropertyPurpose, PropertyType, PurchaseInput,
};
use crate::purchase::jurisdictions::{act, nsw, nt, qld, sa, tas, vic, wa};
use crate::purchase::compute;

const DUTY_SCHEDULES: [(&str, fn(f64) -> f64); 11] = [
    ("NSW general", nsw::general_duty),
    ("VIC general", vic::general_duty),
    ("VIC PPR", vic::ppr_duty),
    ("QLD transfer", qld::transfer_duty),
    ("QLD home concession", qld::home_concession_duty),
    ("WA general", wa::general_duty),
    ("SA general", sa::general_duty),
    ("TAS general", tas::general_duty),
    ("ACT general", act::general_duty),
    ("ACT residential", act::residential_duty),
    ("NT general", nt::general_duty),
];

const BRACKET_SCHEDULES: [(&str, &[Bracket]); 10] = [
    ("NSW general", nsw::GENERAL_BRACKETS),
    ("VIC general", vic::GENERAL_BRACKETS),
    ("VIC PPR", vic::PPR_BRACKETS),
    ("QLD transfer", qld::TRANSFER_DUTY_BRACKETS),
    ("QLD home concession", qld::HOME_CONCESSION_BRACKETS),
    ("WA general", wa::GENERAL_BRACKETS),
    ("SA general", sa::GENERAL_BRACKETS),
    ("TAS general", tas::GENERAL_BRACKETS),
    ("ACT general", act::GENERAL_BRACKETS),
    ("ACT residential", act::RESIDENTIAL_BRACKETS),
];

/// ACT residential rates jump to the top bracket base at $1.455M.
const DOCUMENTED_CLIFFS: [(&str, f64); 1] = [("ACT residential", 1_455_001.0)];

#[test]
fn bracket_schedules_start_at_zero_and_ascend() {
    for (name, brackets) in BRACKET_SCHEDULES {
        assert_eq!(brackets[0].min, 0.0, "{name} starts above zero");
        for pair in brackets.windows(2) {
            assert_eq!(pair[1].min, pair[0].max + 1.0, "{name} gap at {}", pair[0].max);
        }
    }
}

#[test]
fn brackets_join_within_a_couple_of_dollars() {
    for (name, brackets) in BRACKET_SCHEDULES {
        for pair in brackets.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            if DOCUMENTED_CLIFFS.contains(&(name, next.min)) {
                continue;
            }
            let end_of_previous = previous.base + previous.rate * (previous.max - previous.min);
            let jump = (next.base - end_of_previous).abs();
            assert!(jump < 2.0, "{name} jumps by {jump} at {}", next.min);
        }
    }
}

fn jurisdiction() -> impl Strategy<Value = Jurisdiction> {
    prop::sample::select(Jurisdiction::ALL.to_vec())
}

fn property_type() -> impl Strategy<Value = PropertyType> {
    prop::sample::select(vec![
        PropertyType::Established,
        PropertyType::NewlyConstructed,
        PropertyType::VacantLand,
    ])
}

prop_compose! {
    fn purchase()(
        state in jurisdiction(),
        property_type in property_type(),
        value in 0u32..4_000_000,
        deposit_share in 0.0f64..0.6,
        (home, first_home, foreign, pensioner, metro) in any::<(bool, bool, bool, bool, bool)>(),
        children in 0u8..8,
        income in 0u32..400_000,
        loan_term in 1u32..40,
        interest_rate in 0.0f64..12.0,
    ) -> PurchaseInput {
        let property_value = f64::from(value);
        PurchaseInput {
            property_purpose: if home { PropertyPurpose::Home } else { PropertyPurpose::Investment },
            property_value,
            property_type,
            is_first_home_buyer: first_home,
            is_foreign_purchaser: foreign,
            is_eligible_pensioner: pensioner,
            children_count: children,
            yearly_income: f64::from(income),
            deposit_savings: (property_value * deposit_share).floor(),
            loan_term,
            interest_rate,
            is_metro: metro,
            buyer_type: BuyerType::Couple,
            ..input(state)
        }
    }
}

proptest! {
    #[test]
    fn duty_never_decreases_in_whole_thousands(a in 0u32..8_000, b in 0u32..8_000) {
        let (low, high) = (f64::from(a.min(b)) * 1_000.0, f64::from(a.max(b)) * 1_000.0);
        for (name, duty) in DUTY_SCHEDULES {
            prop_assert!(
                duty(low) <= duty(high),
                "{} duty at {} exceeds duty at {}", name, low, high
            );
        }
    }

    #[test]
    fn compute_is_idempotent(input in purchase()) {
        let first = compute(&input).expect("estimate");
        let second = compute(&input).expect("estimate");
        prop_assert_eq!(
            serde_json::to_vec(&first).expect("serializes"),
            serde_json::to_vec(&second).expect("serializes")
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn reports_are_internally_consistent(input in purchase()) {
        let report = compute(&input).expect("estimate");

        prop_assert!(report.fees.stamp_duty >= 0.0);
        prop_assert!(report.stamp_duty_concession.savings >= 0.0);
        prop_assert!(report.upfront_costs.lmi >= 0.0);
        if report.stamp_duty_concession.status == ConcessionStatus::Exempt {
            prop_assert_eq!(report.fees.stamp_duty, 0.0);
        }
        if report.guarantee_eligibility.eligible {
            prop_assert_eq!(report.upfront_costs.lmi, 0.0);
        }
        prop_assert_eq!(
            report.fees.foreign_surcharge.is_some(),
            report.state.input_profile().foreign_surcharge
        );

        let cents = |amount: f64| (amount * 100.0).round() as i64;
        prop_assert_eq!(
            cents(report.loan.total_repayment) - cents(report.loan.amount),
            cents(report.loan.total_interest)
        );
    }
}
