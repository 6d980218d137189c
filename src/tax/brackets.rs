use rust_decimal::{Decimal, RoundingStrategy};

/// One bracket of a progressive schedule: inclusive lower bound and marginal rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub lower: Decimal,
    pub rate: Decimal,
}

/// Round a monetary amount to whole units, halves away from zero
pub fn round_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Integrate a progressive schedule over `amount`, without rounding.
///
/// Brackets are walked in ascending order: every bracket entirely below
/// `amount` contributes its full slice at its rate, the bracket containing
/// `amount` contributes the remainder above its lower bound.
pub fn progressive_tax(brackets: &[Bracket], amount: Decimal) -> Decimal {
    let mut tax = Decimal::ZERO;
    for (i, bracket) in brackets.iter().enumerate() {
        match brackets.get(i + 1) {
            Some(next) if amount >= next.lower => {
                tax += (next.lower - bracket.lower) * bracket.rate;
            }
            _ => {
                tax += (amount - bracket.lower) * bracket.rate;
                break;
            }
        }
    }
    tax
}

/// Tax under the family quotient: income is divided by `parts`, integrated,
/// multiplied back by `parts`, and only then rounded.
pub fn quotient_tax(brackets: &[Bracket], reference_income: Decimal, parts: Decimal) -> Decimal {
    let per_part = reference_income / parts;
    round_unit(progressive_tax(brackets, per_part) * parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::schedule::INCOME_BRACKETS;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_income_owes_nothing() {
        assert_eq!(progressive_tax(&INCOME_BRACKETS, dec!(0)), dec!(0));
    }

    #[test]
    fn income_inside_free_bracket_owes_nothing() {
        assert_eq!(progressive_tax(&INCOME_BRACKETS, dec!(11293)), dec!(0));
    }

    #[test]
    fn income_at_bracket_boundary_owes_nothing_extra() {
        // 11294 sits at the start of the 11% bracket with nothing above the bound
        assert_eq!(progressive_tax(&INCOME_BRACKETS, dec!(11294)), dec!(0));
    }

    #[test]
    fn income_in_second_bracket() {
        // (16200 - 11294) * 0.11
        assert_eq!(progressive_tax(&INCOME_BRACKETS, dec!(16200)), dec!(539.66));
    }

    #[test]
    fn income_spanning_three_brackets() {
        // 17503 * 0.11 + (45000 - 28797) * 0.30
        assert_eq!(
            progressive_tax(&INCOME_BRACKETS, dec!(45000)),
            dec!(6786.23)
        );
    }

    #[test]
    fn income_in_top_bracket() {
        let tax = progressive_tax(&INCOME_BRACKETS, dec!(200000));
        // 1925.33 + 16063.20 + 38853.65 + (200000 - 177106) * 0.45
        assert_eq!(tax, dec!(67144.48));
    }

    #[test]
    fn tax_is_monotonic_in_income() {
        let mut previous = Decimal::ZERO;
        for income in [0i64, 5000, 11294, 20000, 28797, 50000, 82341, 177106, 300000] {
            let tax = progressive_tax(&INCOME_BRACKETS, Decimal::from(income));
            assert!(tax >= previous, "tax decreased at income {}", income);
            previous = tax;
        }
    }

    #[test]
    fn quotient_tax_rounds_once_after_scaling() {
        // Per-part tax 1727.66 doubles to 3455.32, rounded to 3455 only at the end
        assert_eq!(
            quotient_tax(&INCOME_BRACKETS, dec!(54000), dec!(2)),
            dec!(3455)
        );
    }

    #[test]
    fn quotient_tax_with_single_part() {
        assert_eq!(
            quotient_tax(&INCOME_BRACKETS, dec!(45000), dec!(1)),
            dec!(6786)
        );
    }

    #[test]
    fn quotient_tax_with_fractional_parts() {
        // 45000 / 1.5 = 30000 per part: 1925.33 + 360.90 = 2286.23, times 1.5
        assert_eq!(
            quotient_tax(&INCOME_BRACKETS, dec!(45000), dec!(1.5)),
            dec!(3429)
        );
    }

    #[test]
    fn round_unit_half_goes_away_from_zero() {
        assert_eq!(round_unit(dec!(485.5)), dec!(486));
        assert_eq!(round_unit(dec!(485.49)), dec!(485));
        assert_eq!(round_unit(dec!(0.5)), dec!(1));
    }
}
