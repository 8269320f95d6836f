use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

pub type WeightKg = Decimal;

/// Minimum sellable custom weight for weight-based products.
pub const MIN_CUSTOM_WEIGHT_KG: WeightKg = dec!(2.5);
/// Step the custom weight can be changed by.
pub const CUSTOM_WEIGHT_STEP_KG: WeightKg = dec!(0.5);

static WEIGHT_NUMERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*").unwrap());

/// Extracts the base weight in kilograms from a product weight label,
/// e.g. "1.5 кг" -> 1.5.
///
/// Labels without a parseable numeral fall back to a base weight of 1 so
/// that such products keep being priced as declared.
pub fn parse_base_weight_kg(weight_label: &str) -> WeightKg {
    WEIGHT_NUMERAL_REGEX
        .find(weight_label)
        .and_then(|numeral| numeral.as_str().parse::<WeightKg>().ok())
        .unwrap_or(Decimal::ONE)
}

/// Rounds a requested weight to the nearest half-kilogram step.
pub fn round_to_half_kg_step(weight: WeightKg) -> WeightKg {
    (weight / CUSTOM_WEIGHT_STEP_KG)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        * CUSTOM_WEIGHT_STEP_KG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(non_snake_case)]
    fn parse_base_weight_kg__decimal_numeral_with_unit__should_return_numeral() {
        assert_eq!(parse_base_weight_kg("1.5 кг"), dec!(1.5));
    }

    #[test]
    #[allow(non_snake_case)]
    fn parse_base_weight_kg__integer_numeral__should_return_numeral() {
        assert_eq!(parse_base_weight_kg("800 г"), dec!(800));
    }

    #[test]
    #[allow(non_snake_case)]
    fn parse_base_weight_kg__comma_separated_numeral__should_return_integer_part() {
        assert_eq!(parse_base_weight_kg("2,5 кг"), dec!(2));
    }

    #[test]
    #[allow(non_snake_case)]
    fn parse_base_weight_kg__no_numeral__should_return_one() {
        assert_eq!(parse_base_weight_kg("кг"), Decimal::ONE);
        assert_eq!(parse_base_weight_kg(""), Decimal::ONE);
    }

    #[test]
    #[allow(non_snake_case)]
    fn round_to_half_kg_step__below_midpoint__should_round_down() {
        assert_eq!(round_to_half_kg_step(dec!(2.6)), dec!(2.5));
        assert_eq!(round_to_half_kg_step(dec!(2.74)), dec!(2.5));
    }

    #[test]
    #[allow(non_snake_case)]
    fn round_to_half_kg_step__midpoint__should_round_up() {
        assert_eq!(round_to_half_kg_step(dec!(2.75)), dec!(3.0));
    }

    #[test]
    #[allow(non_snake_case)]
    fn round_to_half_kg_step__exact_step__should_keep_value() {
        assert_eq!(round_to_half_kg_step(dec!(3.5)), dec!(3.5));
    }
}
