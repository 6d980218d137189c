use crate::household::{FamilyStatus, Household};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Parts for the declarants alone: one for solo statuses, two for couples
pub fn declarant_parts(status: FamilyStatus) -> Decimal {
    match status {
        FamilyStatus::Single | FamilyStatus::Divorced | FamilyStatus::Widowed => dec!(1),
        FamilyStatus::Married | FamilyStatus::RegisteredPartnership => dec!(2),
    }
}

/// Full family quotient: declarant parts plus child and status increments.
///
/// The first two children count half a part each, every further child a full
/// part. An isolated parent with children gains a half part, a widowed
/// declarant with children a full part, and each disabled child a half part.
pub fn household_parts(household: &Household) -> Decimal {
    let children = Decimal::from(household.dependent_children);
    let mut parts = declarant_parts(household.status);

    if household.dependent_children <= 2 {
        parts += children * dec!(0.5);
    } else {
        parts += dec!(1) + (children - dec!(2));
    }
    if household.isolated_parent && household.dependent_children > 0 {
        parts += dec!(0.5);
    }
    if household.status == FamilyStatus::Widowed && household.dependent_children > 0 {
        parts += dec!(1);
    }
    parts += Decimal::from(household.disabled_children) * dec!(0.5);
    parts
}
