//! First Home Guarantee eligibility.
//!
//! The guarantee lets an eligible buyer borrow above 80% LVR without paying
//! mortgage insurance. Gates are checked in a fixed order and the first one
//! that fails supplies the reason.

use serde::{Deserialize, Serialize};

use super::brackets::format_dollars;
use super::domain::{Jurisdiction, PurchaseInput};
use super::lmi::NO_INSURANCE_LVR;
use super::loan::loan_to_value_ratio;

/// Highest LVR the guarantee supports (a 5% deposit).
pub const MAX_GUARANTEED_LVR: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceCaps {
    pub metro: f64,
    pub regional: f64,
}

impl PriceCaps {
    const fn new(metro: f64, regional: f64) -> Self {
        Self { metro, regional }
    }

    pub fn for_location(self, is_metro: bool) -> f64 {
        if is_metro {
            self.metro
        } else {
            self.regional
        }
    }
}

impl Jurisdiction {
    /// Guarantee property price caps applying from 1 October 2025.
    pub const fn guarantee_price_caps(self) -> PriceCaps {
        match self {
            Self::Nsw => PriceCaps::new(1_500_000.0, 800_000.0),
            Self::Vic => PriceCaps::new(950_000.0, 650_000.0),
            Self::Qld => PriceCaps::new(1_000_000.0, 700_000.0),
            Self::Wa => PriceCaps::new(850_000.0, 600_000.0),
            Self::Sa => PriceCaps::new(900_000.0, 500_000.0),
            Self::Tas => PriceCaps::new(700_000.0, 550_000.0),
            Self::Act => PriceCaps::new(1_000_000.0, 1_000_000.0),
            Self::Nt => PriceCaps::new(600_000.0, 600_000.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuaranteeEligibility {
    pub eligible: bool,
    pub reason: String,
}

impl GuaranteeEligibility {
    fn eligible() -> Self {
        Self {
            eligible: true,
            reason: "You may be eligible for the First Home Guarantee".to_string(),
        }
    }

    fn ineligible(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            reason: reason.into(),
        }
    }
}

pub fn check_guarantee_eligibility(input: &PurchaseInput) -> GuaranteeEligibility {
    if !input.is_first_home_buyer {
        return GuaranteeEligibility::ineligible("Only available for first home buyers");
    }
    if !input.is_owner_occupier() {
        return GuaranteeEligibility::ineligible("Only available for owner-occupied properties");
    }

    let cap = input
        .state
        .guarantee_price_caps()
        .for_location(input.is_metro);
    if input.property_value > cap {
        let location = if input.is_metro { "metro" } else { "regional" };
        return GuaranteeEligibility::ineligible(format!(
            "Property exceeds {location} price cap of ${}k for {}",
            format_dollars(cap / 1000.0),
            input.state
        ));
    }

    let lvr = loan_to_value_ratio(input.property_value, input.deposit());
    if lvr <= NO_INSURANCE_LVR {
        return GuaranteeEligibility::ineligible("Deposit exceeds 20%; LMI not required");
    }
    if lvr > MAX_GUARANTEED_LVR {
        return GuaranteeEligibility::ineligible("Minimum 5% deposit required");
    }

    GuaranteeEligibility::eligible()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::purchase::domain::PropertyPurpose;
    use crate::purchase::tests::common::{first_home, input};
    use crate::purchase::PropertyType;

    fn reason(input: &PurchaseInput) -> String {
        check_guarantee_eligibility(input).reason
    }

    #[test]
    fn first_failing_gate_supplies_the_reason() {
        let everything_wrong = PurchaseInput {
            property_purpose: PropertyPurpose::Investment,
            property_value: 5_000_000.0,
            deposit_savings: 0.0,
            ..input(Jurisdiction::Nsw)
        };
        assert_eq!(reason(&everything_wrong), "Only available for first home buyers");

        let investor = PurchaseInput {
            is_first_home_buyer: true,
            ..everything_wrong.clone()
        };
        assert_eq!(reason(&investor), "Only available for owner-occupied properties");

        let over_cap = PurchaseInput {
            property_purpose: PropertyPurpose::Home,
            ..investor
        };
        assert_eq!(
            reason(&over_cap),
            "Property exceeds metro price cap of $1,500k for NSW"
        );
    }

    #[test]
    fn regional_caps_apply_outside_capitals() {
        let regional = PurchaseInput {
            is_metro: false,
            ..first_home(Jurisdiction::Nsw, PropertyType::Established, 900_000.0)
        };
        assert_eq!(
            reason(&regional),
            "Property exceeds regional price cap of $800k for NSW"
        );
    }

    #[test]
    fn deposit_must_sit_between_five_and_twenty_percent() {
        let base = first_home(Jurisdiction::Vic, PropertyType::Established, 600_000.0);

        let large_deposit = PurchaseInput {
            deposit_savings: 150_000.0,
            ..base.clone()
        };
        assert_eq!(reason(&large_deposit), "Deposit exceeds 20%; LMI not required");

        let small_deposit = PurchaseInput {
            deposit_savings: 12_000.0,
            ..base.clone()
        };
        assert_eq!(reason(&small_deposit), "Minimum 5% deposit required");

        let five_percent = PurchaseInput {
            deposit_savings: 30_000.0,
            ..base
        };
        assert!(check_guarantee_eligibility(&five_percent).eligible);
    }

    #[test]
    fn property_at_the_cap_is_still_eligible() {
        let at_cap = first_home(Jurisdiction::Qld, PropertyType::Established, 1_000_000.0);
        let outcome = check_guarantee_eligibility(&at_cap);
        assert!(outcome.eligible);
        assert_eq!(outcome.reason, "You may be eligible for the First Home Guarantee");
    }
}
