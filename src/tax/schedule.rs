use crate::tax::brackets::Bracket;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Progressive income tax brackets for 2025 (2024 income).
///
/// Lower bounds are inclusive; each bracket runs up to the next lower bound
/// and the last bracket is unbounded.
pub const INCOME_BRACKETS: [Bracket; 5] = [
    Bracket { lower: dec!(0), rate: dec!(0) },
    Bracket { lower: dec!(11294), rate: dec!(0.11) },
    Bracket { lower: dec!(28797), rate: dec!(0.30) },
    Bracket { lower: dec!(82341), rate: dec!(0.41) },
    Bracket { lower: dec!(177106), rate: dec!(0.45) },
];

/// Exceptional contribution brackets for a single declarant
pub const CONTRIBUTION_BRACKETS_SINGLE: [Bracket; 4] = [
    Bracket { lower: dec!(0), rate: dec!(0) },
    Bracket { lower: dec!(250000), rate: dec!(0.03) },
    Bracket { lower: dec!(500000), rate: dec!(0.04) },
    Bracket { lower: dec!(1000000), rate: dec!(0.04) },
];

/// Exceptional contribution brackets for a couple
pub const CONTRIBUTION_BRACKETS_COUPLE: [Bracket; 4] = [
    Bracket { lower: dec!(0), rate: dec!(0) },
    Bracket { lower: dec!(250000), rate: dec!(0) },
    Bracket { lower: dec!(500000), rate: dec!(0.03) },
    Bracket { lower: dec!(1000000), rate: dec!(0.04) },
];

/// Contribution schedule keyed by whether a single declarant files alone
pub fn contribution_brackets(single_declarant: bool) -> &'static [Bracket] {
    if single_declarant {
        &CONTRIBUTION_BRACKETS_SINGLE
    } else {
        &CONTRIBUTION_BRACKETS_COUPLE
    }
}

/// Standard deduction rate per declarant
pub const ABATEMENT_RATE: Decimal = dec!(0.1);
/// Minimum abatement for a declarant with income
pub const ABATEMENT_FLOOR: Decimal = dec!(495);
/// Maximum abatement per declarant
pub const ABATEMENT_CEILING: Decimal = dec!(14171);

/// Maximum tax reduction granted per half part beyond the declarant baseline
pub const CAP_PER_EXTRA_HALF_PART: Decimal = dec!(1759);

/// Decote applies below this tax amount for a single declarant
pub const DECOTE_THRESHOLD_SINGLE: Decimal = dec!(1929);
/// Decote applies below this tax amount for a couple
pub const DECOTE_THRESHOLD_COUPLE: Decimal = dec!(3191);
/// Decote base amount for a single declarant
pub const DECOTE_BASE_SINGLE: Decimal = dec!(873);
/// Decote base amount for a couple
pub const DECOTE_BASE_COUPLE: Decimal = dec!(1444);
/// Slope of the decote reduction
pub const DECOTE_RATE: Decimal = dec!(0.4525);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_brackets_are_ascending() {
        for pair in INCOME_BRACKETS.windows(2) {
            assert!(pair[0].lower < pair[1].lower);
        }
    }

    #[test]
    fn contribution_brackets_share_bounds() {
        for (single, couple) in CONTRIBUTION_BRACKETS_SINGLE
            .iter()
            .zip(&CONTRIBUTION_BRACKETS_COUPLE)
        {
            assert_eq!(single.lower, couple.lower);
        }
    }

    #[test]
    fn contribution_brackets_keyed_by_declarant_count() {
        assert_eq!(contribution_brackets(true), &CONTRIBUTION_BRACKETS_SINGLE[..]);
        assert_eq!(contribution_brackets(false), &CONTRIBUTION_BRACKETS_COUPLE[..]);
    }
}
