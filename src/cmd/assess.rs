//! Assess command - compute the tax owed by a single fiscal household

use crate::household::{FamilyStatus, Household, HouseholdRecord};
use crate::tax::{calculate_tax, Assessment};
use clap::{Args, ValueEnum};

#[derive(Args, Debug)]
pub struct AssessCommand {
    /// Net income of the first declarant
    #[arg(long, allow_negative_numbers = true)]
    income1: i64,

    /// Net income of the second declarant (couples only)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    income2: i64,

    /// Family status of the household
    #[arg(short, long, value_enum)]
    status: StatusArg,

    /// Number of dependent children
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    children: i32,

    /// Number of dependent children with a disability
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    disabled_children: i32,

    /// The declarant raises the children alone
    #[arg(long)]
    isolated_parent: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Single,
    Married,
    /// Registered partnership (PACS)
    Pacs,
    Divorced,
    Widowed,
}

impl From<StatusArg> for FamilyStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Single => FamilyStatus::Single,
            StatusArg::Married => FamilyStatus::Married,
            StatusArg::Pacs => FamilyStatus::RegisteredPartnership,
            StatusArg::Divorced => FamilyStatus::Divorced,
            StatusArg::Widowed => FamilyStatus::Widowed,
        }
    }
}

impl AssessCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let record = HouseholdRecord {
            income1: self.income1,
            income2: self.income2,
            family_status: Some(self.status.into()),
            dependent_children: self.children,
            disabled_children: self.disabled_children,
            isolated_parent: self.isolated_parent,
        };
        let household = Household::try_from(&record)?;
        let assessment = calculate_tax(&household);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        } else {
            self.print_assessment(&household, &assessment);
        }
        Ok(())
    }

    fn print_assessment(&self, household: &Household, assessment: &Assessment) {
        println!();
        println!("INCOME TAX ASSESSMENT ({})", household.status);
        println!();
        println!("  Net income declarant 1:   {:>12}", household.income1);
        println!("  Net income declarant 2:   {:>12}", household.income2);
        println!(
            "  Dependent children:       {:>12}",
            household.dependent_children
        );
        println!(
            "  Household parts:          {:>12}",
            assessment.household_parts
        );
        println!();
        println!(
            "  Total abatement:          {:>12}",
            assessment.total_abatement
        );
        println!(
            "  Reference income:         {:>12}",
            assessment.reference_income
        );
        println!(
            "  Tax at declarant parts:   {:>12}",
            assessment.tax_at_declarant_parts
        );
        println!(
            "  Tax before decote:        {:>12}",
            assessment.tax_before_decote
        );
        println!("  Decote:                   {:>12}", assessment.decote);
        println!(
            "  Exceptional contribution: {:>12}",
            assessment.exceptional_contribution
        );
        println!();
        println!("  Net tax:                  {:>12}", assessment.net_tax);
    }
}
