use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::brackets::format_dollars;
use super::calculator::CalculationError;

/// Australian state or territory whose duty and grant rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Jurisdiction {
    Nsw,
    Vic,
    Qld,
    Wa,
    Sa,
    Tas,
    Act,
    Nt,
}

impl Jurisdiction {
    pub const ALL: [Self; 8] = [
        Self::Nsw,
        Self::Vic,
        Self::Qld,
        Self::Wa,
        Self::Sa,
        Self::Tas,
        Self::Act,
        Self::Nt,
    ];

    /// Parses a jurisdiction code such as `NSW` or `act`.
    pub fn from_code(code: &str) -> Result<Self, CalculationError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "NSW" => Ok(Self::Nsw),
            "VIC" => Ok(Self::Vic),
            "QLD" => Ok(Self::Qld),
            "WA" => Ok(Self::Wa),
            "SA" => Ok(Self::Sa),
            "TAS" => Ok(Self::Tas),
            "ACT" => Ok(Self::Act),
            "NT" => Ok(Self::Nt),
            _ => Err(CalculationError::UnknownJurisdiction {
                code: code.to_string(),
            }),
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Nsw => "NSW",
            Self::Vic => "VIC",
            Self::Qld => "QLD",
            Self::Wa => "WA",
            Self::Sa => "SA",
            Self::Tas => "TAS",
            Self::Act => "ACT",
            Self::Nt => "NT",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Nsw => "New South Wales",
            Self::Vic => "Victoria",
            Self::Qld => "Queensland",
            Self::Wa => "Western Australia",
            Self::Sa => "South Australia",
            Self::Tas => "Tasmania",
            Self::Act => "Australian Capital Territory",
            Self::Nt => "Northern Territory",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Jurisdiction {
    type Err = CalculationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_code(value)
    }
}

impl TryFrom<String> for Jurisdiction {
    type Error = CalculationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyPurpose {
    Home,
    Investment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Established,
    NewlyConstructed,
    VacantLand,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Established => "Established",
            Self::NewlyConstructed => "Newly Constructed",
            Self::VacantLand => "Vacant Land",
        }
    }

    /// New builds and vacant land, the property types most grants target.
    pub const fn is_new_build(self) -> bool {
        matches!(self, Self::NewlyConstructed | Self::VacantLand)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyerType {
    Single,
    Couple,
}

impl BuyerType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Couple => "Couple",
        }
    }
}

/// Everything a buyer tells us about a single purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInput {
    pub state: Jurisdiction,
    pub property_purpose: PropertyPurpose,
    pub property_value: f64,
    pub property_type: PropertyType,
    pub is_first_home_buyer: bool,
    pub is_foreign_purchaser: bool,
    pub is_eligible_pensioner: bool,
    /// Dependent children; 5 stands for five or more.
    pub children_count: u8,
    pub yearly_income: f64,
    pub deposit_savings: f64,
    /// Loan term in years.
    pub loan_term: u32,
    /// Annual interest rate in percent.
    pub interest_rate: f64,
    pub transaction_fees: f64,
    pub is_metro: bool,
    pub buyer_type: BuyerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}

impl PurchaseInput {
    pub const MAX_CHILDREN: u8 = 5;

    pub fn is_owner_occupier(&self) -> bool {
        self.property_purpose == PropertyPurpose::Home
    }

    /// First-home buyer who will live in the property.
    pub fn is_first_home_owner_occupier(&self) -> bool {
        self.is_first_home_buyer && self.is_owner_occupier()
    }

    pub fn children(&self) -> u8 {
        self.children_count.min(Self::MAX_CHILDREN)
    }

    /// Savings put towards the price, between nothing and the whole price.
    pub fn deposit(&self) -> f64 {
        self.deposit_savings
            .clamp(0.0, self.property_value.max(0.0))
    }
}

/// First Home Owner Grant outcome. Ineligibility is a normal result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantOutcome {
    pub eligible: bool,
    pub amount: f64,
    pub message: String,
}

impl GrantOutcome {
    pub fn eligible(amount: f64) -> Self {
        Self {
            eligible: true,
            amount,
            message: format!(
                "You may be eligible for a ${} First Home Owners Grant.*",
                format_dollars(amount)
            ),
        }
    }

    pub fn ineligible() -> Self {
        Self {
            eligible: false,
            amount: 0.0,
            message: "You are not eligible for a First Home Owners Grant.*".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcessionStatus {
    Exempt,
    Concession,
    FullRate,
}

impl ConcessionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exempt => "Exemption",
            Self::Concession => "Concession",
            Self::FullRate => "Full rate",
        }
    }
}

/// Explains why the stamp duty figure is what it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcessionInfo {
    pub status: ConcessionStatus,
    pub savings: f64,
    pub description: String,
}

impl ConcessionInfo {
    pub fn exempt(savings: f64, description: impl Into<String>) -> Self {
        Self {
            status: ConcessionStatus::Exempt,
            savings: savings.max(0.0),
            description: description.into(),
        }
    }

    pub fn concession(savings: f64, description: impl Into<String>) -> Self {
        Self {
            status: ConcessionStatus::Concession,
            savings: savings.max(0.0),
            description: description.into(),
        }
    }

    pub fn full_rate(description: impl Into<String>) -> Self {
        Self {
            status: ConcessionStatus::FullRate,
            savings: 0.0,
            description: description.into(),
        }
    }
}

/// Government charges on the transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeesBreakdown {
    pub mortgage_registration: f64,
    pub land_transfer: f64,
    pub stamp_duty: f64,
    /// `None` where the jurisdiction levies no foreign purchaser surcharge.
    pub foreign_surcharge: Option<f64>,
    pub total: f64,
}
