//! Per-jurisdiction duty, grant and fee policy tables.
//!
//! Every state and territory is described by one static [`StateRules`] table.
//! [`Jurisdiction`] dispatches the six calculator operations to the table for
//! its code, so adding a schedule version is an edit to a single module.

pub(crate) mod act;
pub(crate) mod nsw;
pub(crate) mod nt;
pub(crate) mod qld;
pub(crate) mod sa;
pub(crate) mod tas;
pub(crate) mod vic;
pub(crate) mod wa;

use chrono::NaiveDate;
use serde::Serialize;

use super::brackets::round_currency;
use super::domain::{ConcessionInfo, GrantOutcome, Jurisdiction, PurchaseInput};

/// Legislative schedule a rules table encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleVersion {
    pub label: &'static str,
    year: i32,
    month: u32,
    day: u32,
}

impl ScheduleVersion {
    pub(crate) const fn new(label: &'static str, year: i32, month: u32, day: u32) -> Self {
        Self {
            label,
            year,
            month,
            day,
        }
    }

    /// First day the schedule applies to contracts.
    pub fn effective_from(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }
}

/// Which buyer inputs a jurisdiction's form asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputProfile {
    pub foreign_purchaser: bool,
    pub income: bool,
    pub pensioner: bool,
    pub children: bool,
    pub foreign_surcharge: bool,
}

/// Stamp duty payable together with the explanation of how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct DutyAssessment {
    pub duty: f64,
    pub concession: ConcessionInfo,
}

impl DutyAssessment {
    pub(crate) fn full_rate(duty: f64, description: impl Into<String>) -> Self {
        Self {
            duty,
            concession: ConcessionInfo::full_rate(description),
        }
    }

    pub(crate) fn exempt(full_duty: f64, description: impl Into<String>) -> Self {
        Self {
            duty: 0.0,
            concession: ConcessionInfo::exempt(full_duty, description),
        }
    }

    pub(crate) fn concession(full_duty: f64, duty: f64, description: impl Into<String>) -> Self {
        Self {
            duty,
            concession: ConcessionInfo::concession(full_duty - duty, description),
        }
    }
}

pub(crate) struct StateRules {
    pub schedule: ScheduleVersion,
    pub inputs: InputProfile,
    pub assess: fn(&PurchaseInput) -> DutyAssessment,
    pub grant: fn(&PurchaseInput) -> GrantOutcome,
    pub registration_fee: fn(&PurchaseInput) -> f64,
    pub transfer_fee: fn(&PurchaseInput) -> f64,
    /// `None` when the jurisdiction has no foreign purchaser surcharge.
    pub foreign_surcharge_rate: Option<f64>,
}

impl Jurisdiction {
    fn rules(self) -> &'static StateRules {
        match self {
            Self::Nsw => &nsw::RULES,
            Self::Vic => &vic::RULES,
            Self::Qld => &qld::RULES,
            Self::Wa => &wa::RULES,
            Self::Sa => &sa::RULES,
            Self::Tas => &tas::RULES,
            Self::Act => &act::RULES,
            Self::Nt => &nt::RULES,
        }
    }

    pub fn schedule(self) -> ScheduleVersion {
        self.rules().schedule
    }

    pub fn input_profile(self) -> InputProfile {
        self.rules().inputs
    }

    /// Duty and concession explanation computed in one pass.
    pub fn assess_duty(self, input: &PurchaseInput) -> DutyAssessment {
        (self.rules().assess)(input)
    }

    pub fn stamp_duty(self, input: &PurchaseInput) -> f64 {
        self.assess_duty(input).duty
    }

    pub fn concession_info(self, input: &PurchaseInput) -> ConcessionInfo {
        self.assess_duty(input).concession
    }

    pub fn first_home_grant(self, input: &PurchaseInput) -> GrantOutcome {
        (self.rules().grant)(input)
    }

    pub fn registration_fee(self, input: &PurchaseInput) -> f64 {
        (self.rules().registration_fee)(input)
    }

    pub fn transfer_fee(self, input: &PurchaseInput) -> f64 {
        (self.rules().transfer_fee)(input)
    }

    /// `Some(0.0)` for local buyers where a surcharge exists, `None` where it does not.
    pub fn foreign_surcharge(self, input: &PurchaseInput) -> Option<f64> {
        self.rules().foreign_surcharge_rate.map(|rate| {
            if input.is_foreign_purchaser {
                round_currency(input.property_value.max(0.0) * rate)
            } else {
                0.0
            }
        })
    }
}

/// Linear taper between a full-exemption ceiling and an upper bound:
/// `duty(value) - duty(ceiling) * (upper - value) / (upper - ceiling)`.
///
/// Callers only use it inside the closed window `[ceiling, upper]`.
pub(crate) fn taper(value: f64, ceiling: f64, upper: f64, duty: fn(f64) -> f64) -> f64 {
    let factor = (upper - value) / (upper - ceiling);
    round_currency(duty(value) - duty(ceiling) * factor)
}

/// Grant gated on a first-home owner-occupier buying a new build under a cap.
pub(crate) fn new_build_grant(input: &PurchaseInput, amount: f64, cap: Option<f64>) -> GrantOutcome {
    if !input.is_first_home_owner_occupier() || !input.property_type.is_new_build() {
        return GrantOutcome::ineligible();
    }
    match cap {
        Some(cap) if input.property_value > cap => GrantOutcome::ineligible(),
        _ => GrantOutcome::eligible(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_schedule_has_a_real_effective_date() {
        for jurisdiction in Jurisdiction::ALL {
            let schedule = jurisdiction.schedule();
            assert!(
                NaiveDate::from_ymd_opt(schedule.year, schedule.month, schedule.day).is_some(),
                "{jurisdiction} schedule date is invalid"
            );
            assert!(!schedule.label.is_empty());
        }
    }

    #[test]
    fn pensioner_question_is_asked_in_vic_act_and_nt() {
        let asked: Vec<_> = Jurisdiction::ALL
            .into_iter()
            .filter(|jurisdiction| jurisdiction.input_profile().pensioner)
            .collect();
        assert_eq!(
            asked,
            vec![Jurisdiction::Vic, Jurisdiction::Act, Jurisdiction::Nt]
        );
    }

    #[test]
    fn taper_hits_both_ends_of_the_window() {
        fn flat(value: f64) -> f64 {
            round_currency(value * 0.04)
        }
        assert_eq!(taper(100_000.0, 100_000.0, 200_000.0, flat), 0.0);
        assert_eq!(taper(200_000.0, 100_000.0, 200_000.0, flat), 8_000.0);
        assert_eq!(taper(150_000.0, 100_000.0, 200_000.0, flat), 4_000.0);
    }

    #[test]
    fn surcharge_is_absent_only_in_the_territories() {
        let without: Vec<_> = Jurisdiction::ALL
            .into_iter()
            .filter(|jurisdiction| jurisdiction.rules().foreign_surcharge_rate.is_none())
            .collect();
        assert_eq!(without, vec![Jurisdiction::Act, Jurisdiction::Nt]);
        for jurisdiction in Jurisdiction::ALL {
            assert_eq!(
                jurisdiction.input_profile().foreign_surcharge,
                jurisdiction.rules().foreign_surcharge_rate.is_some()
            );
        }
    }
}
