use crate::household::Household;
use crate::tax::brackets::{progressive_tax, quotient_tax, round_unit};
use crate::tax::parts;
use crate::tax::schedule;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Full breakdown of one household's income tax computation.
///
/// Monetary fields are whole units; parts are multiples of 0.5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub total_abatement: Decimal,
    pub reference_income: Decimal,
    pub declarant_parts: Decimal,
    pub household_parts: Decimal,
    pub tax_at_declarant_parts: Decimal,
    pub tax_before_decote: Decimal,
    pub decote: Decimal,
    pub exceptional_contribution: Decimal,
    pub net_tax: Decimal,
}

/// Compute the income tax owed by a validated household.
///
/// Pure function of its input: every call produces a fresh `Assessment` and
/// no state survives between calls.
pub fn calculate_tax(household: &Household) -> Assessment {
    let declarant_parts = parts::declarant_parts(household.status);
    let household_parts = parts::household_parts(household);
    log::debug!(
        "parts: declarants={}, household={}",
        declarant_parts,
        household_parts
    );

    let total_abatement =
        declarant_abatement(household.income1) + declarant_abatement(household.income2);
    let reference_income =
        (household.income1 + household.income2 - total_abatement).max(Decimal::ZERO);
    log::debug!(
        "abatement={}, reference income={}",
        total_abatement,
        reference_income
    );

    let tax_at_declarant_parts =
        quotient_tax(&schedule::INCOME_BRACKETS, reference_income, declarant_parts);
    let household_tax =
        quotient_tax(&schedule::INCOME_BRACKETS, reference_income, household_parts);
    let tax_before_decote = apply_quotient_cap(
        tax_at_declarant_parts,
        household_tax,
        declarant_parts,
        household_parts,
    );

    let decote = decote(tax_before_decote, declarant_parts);
    let exceptional_contribution = exceptional_contribution(reference_income, declarant_parts);
    let net_tax = round_unit(tax_before_decote - decote + exceptional_contribution);
    log::debug!(
        "tax before decote={}, decote={}, contribution={}, net tax={}",
        tax_before_decote,
        decote,
        exceptional_contribution,
        net_tax
    );

    Assessment {
        total_abatement,
        reference_income,
        declarant_parts,
        household_parts,
        tax_at_declarant_parts,
        tax_before_decote,
        decote,
        exceptional_contribution,
        net_tax,
    }
}

/// Standard deduction for one declarant: 10% of income, clamped.
///
/// A declarant without income contributes nothing, not the floor.
fn declarant_abatement(income: Decimal) -> Decimal {
    if income.is_zero() {
        return Decimal::ZERO;
    }
    round_unit(income * schedule::ABATEMENT_RATE)
        .clamp(schedule::ABATEMENT_FLOOR, schedule::ABATEMENT_CEILING)
}

/// Limit the tax benefit of parts beyond the declarant baseline.
fn apply_quotient_cap(
    tax_at_declarant_parts: Decimal,
    household_tax: Decimal,
    declarant_parts: Decimal,
    household_parts: Decimal,
) -> Decimal {
    let benefit = tax_at_declarant_parts - household_tax;
    let extra_half_parts = (household_parts - declarant_parts) / dec!(0.5);
    let cap = round_unit(extra_half_parts * schedule::CAP_PER_EXTRA_HALF_PART);
    if benefit >= cap {
        log::debug!("family quotient benefit {} capped at {}", benefit, cap);
        tax_at_declarant_parts - cap
    } else {
        household_tax
    }
}

/// Tax reducer for low and moderate tax amounts; never exceeds the tax itself
fn decote(tax_before_decote: Decimal, declarant_parts: Decimal) -> Decimal {
    let (threshold, base) = if declarant_parts == dec!(1) {
        (
            schedule::DECOTE_THRESHOLD_SINGLE,
            schedule::DECOTE_BASE_SINGLE,
        )
    } else {
        (
            schedule::DECOTE_THRESHOLD_COUPLE,
            schedule::DECOTE_BASE_COUPLE,
        )
    };
    if tax_before_decote >= threshold {
        return Decimal::ZERO;
    }
    round_unit(base - tax_before_decote * schedule::DECOTE_RATE).min(tax_before_decote)
}

/// Surtax on reference income above the high-income thresholds.
///
/// Applied to the full reference income, undivided by parts.
fn exceptional_contribution(reference_income: Decimal, declarant_parts: Decimal) -> Decimal {
    let brackets = schedule::contribution_brackets(declarant_parts == dec!(1));
    round_unit(progressive_tax(brackets, reference_income))
}
