use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Maximum number of dependent children a household may declare.
pub const MAX_DEPENDENT_CHILDREN: i32 = 7;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HouseholdError {
    #[error("net income cannot be negative")]
    NegativeIncome,
    #[error("family status is required")]
    MissingFamilyStatus,
    #[error("number of dependent children cannot be negative")]
    NegativeChildCount,
    #[error("number of disabled children cannot be negative")]
    NegativeDisabledChildCount,
    #[error("disabled children cannot exceed dependent children")]
    DisabledExceedsTotal,
    #[error("dependent children cannot exceed {}", MAX_DEPENDENT_CHILDREN)]
    TooManyChildren,
    #[error("an isolated parent cannot be married or in a registered partnership")]
    IsolatedParentConflict,
    #[error("second declarant income must be zero for a single, divorced or widowed household")]
    InvalidSecondIncome,
}

/// Marital/family status of the declarants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FamilyStatus {
    Single,
    Married,
    RegisteredPartnership,
    Divorced,
    Widowed,
}

impl FamilyStatus {
    /// Two declarants file jointly
    pub fn is_couple(&self) -> bool {
        matches!(self, FamilyStatus::Married | FamilyStatus::RegisteredPartnership)
    }

    pub fn display(&self) -> &'static str {
        match self {
            FamilyStatus::Single => "Single",
            FamilyStatus::Married => "Married",
            FamilyStatus::RegisteredPartnership => "Pacs",
            FamilyStatus::Divorced => "Divorced",
            FamilyStatus::Widowed => "Widowed",
        }
    }
}

impl std::fmt::Display for FamilyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Raw household facts as declared (CSV row or JSON object), unvalidated
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HouseholdRecord {
    /// Net income of the first declarant
    pub income1: i64,
    /// Net income of the second declarant (couples only)
    #[serde(default)]
    pub income2: i64,
    /// Family status (Single, Married, RegisteredPartnership, Divorced, Widowed)
    #[serde(default)]
    pub family_status: Option<FamilyStatus>,
    /// Number of dependent children, 0..=7
    #[serde(default)]
    pub dependent_children: i32,
    /// Number of dependent children with a disability
    #[serde(default)]
    pub disabled_children: i32,
    /// Whether the declarant raises the children alone
    #[serde(default)]
    pub isolated_parent: bool,
}

/// JSON input root for batch computation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HouseholdInput {
    pub households: Vec<HouseholdRecord>,
}

/// Read household records from CSV
pub fn read_csv<R: Read>(reader: R) -> anyhow::Result<Vec<HouseholdRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let records: Result<Vec<HouseholdRecord>, _> = rdr.deserialize().collect();
    Ok(records?)
}

/// Read household records from JSON
pub fn read_json<R: Read>(reader: R) -> anyhow::Result<Vec<HouseholdRecord>> {
    let input: HouseholdInput = serde_json::from_reader(reader)?;
    Ok(input.households)
}

/// Validated fiscal household, immutable for the duration of one computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    pub income1: Decimal,
    pub income2: Decimal,
    pub status: FamilyStatus,
    pub dependent_children: u8,
    pub disabled_children: u8,
    pub isolated_parent: bool,
}

impl TryFrom<&HouseholdRecord> for Household {
    type Error = HouseholdError;

    fn try_from(record: &HouseholdRecord) -> Result<Self, Self::Error> {
        if record.income1 < 0 || record.income2 < 0 {
            return Err(HouseholdError::NegativeIncome);
        }
        let status = record
            .family_status
            .ok_or(HouseholdError::MissingFamilyStatus)?;
        if record.dependent_children < 0 {
            return Err(HouseholdError::NegativeChildCount);
        }
        if record.disabled_children < 0 {
            return Err(HouseholdError::NegativeDisabledChildCount);
        }
        if record.disabled_children > record.dependent_children {
            return Err(HouseholdError::DisabledExceedsTotal);
        }
        if record.dependent_children > MAX_DEPENDENT_CHILDREN {
            return Err(HouseholdError::TooManyChildren);
        }
        if record.isolated_parent && status.is_couple() {
            return Err(HouseholdError::IsolatedParentConflict);
        }
        if !status.is_couple() && record.income2 > 0 {
            return Err(HouseholdError::InvalidSecondIncome);
        }

        Ok(Household {
            income1: Decimal::from(record.income1),
            income2: Decimal::from(record.income2),
            status,
            dependent_children: record.dependent_children as u8,
            disabled_children: record.disabled_children as u8,
            isolated_parent: record.isolated_parent,
        })
    }
}
