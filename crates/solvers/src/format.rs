//! Decimal rounding and display of root components.

/// Pre-rounding keeps 15 significant digits, so only scaled values below
/// this keep every integer digit.
const PRE_ROUND_LIMIT: f64 = 1e15;

/// Largest power of ten that is exact in an `f64`.
const MAX_EXACT_POWER: i32 = 22;

/// Rounds `value` to `precision` decimal places, half away from zero.
///
/// The scaled value is first cut to 15 significant digits so representation
/// error does not decide the tie (`1.005` rounds to `1.01`, not `1.0`).
/// Scaling is exact only for small powers and magnitudes; outside that range
/// the decimal formatter does the rounding. A value whose shortest form
/// already fits in `precision` decimals is returned unchanged.
pub(crate) fn round(value: f64, precision: i32) -> f64 {
    let Ok(limit) = usize::try_from(precision) else {
        return value;
    };
    if !value.is_finite() || decimals(value) <= limit {
        return value;
    }

    if precision <= MAX_EXACT_POWER {
        let factor = 10_f64.powi(precision);
        let scaled = value * factor;

        if scaled.abs() < PRE_ROUND_LIMIT {
            let scaled = format!("{scaled:.14e}").parse::<f64>().unwrap_or(scaled);
            return scaled.round() / factor;
        }
    }

    format!("{value:.limit$}").parse::<f64>().unwrap_or(value)
}

/// Formats a rounded value as a plain decimal without trailing zeros.
///
/// Negative zero is written as `0`.
pub(crate) fn decimal(value: f64) -> String {
    #[allow(clippy::float_cmp)]
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

/// Number of digits after the point in the shortest form of `value`.
fn decimals(value: f64) -> usize {
    value
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rounds_to_precision() {
        assert_relative_eq!(round(0.277_123_616, 3), 0.277);
        assert_relative_eq!(round(-0.902_123_616, 4), -0.9021);
        assert_relative_eq!(round(1.105_541_596, 3), 1.106);
        assert_relative_eq!(round(2.0 / 3.0, 0), 1.0);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_relative_eq!(round(2.5, 0), 3.0);
        assert_relative_eq!(round(-2.5, 0), -3.0);
        assert_relative_eq!(round(0.125, 2), 0.13);
        assert_relative_eq!(round(1.005, 2), 1.01);
    }

    #[test]
    fn huge_precision_leaves_value_unchanged() {
        let x = 0.277_123_616_632_825_3;
        assert_relative_eq!(round(x, 40), x);
        assert_relative_eq!(round(x, 400), x);
        assert_eq!(decimal(round(x, i32::MAX)), decimal(x));
    }

    #[test]
    fn rounds_when_scaled_value_is_large() {
        // 2147483647 / 2^32 is exact; scaled by 10^16 it lies between 2^52 and 2^53.
        // Precision 15 rounds the scaled value, 16 goes through the formatter.
        let x = 2_147_483_647.0 / 4_294_967_296.0;
        assert_eq!(decimal(x), "0.49999999976716936");

        assert_eq!(decimal(round(x, 16)), "0.4999999997671694");
        assert_eq!(decimal(round(x, 15)), "0.499999999767169");
        assert_eq!(decimal(round(-x, 16)), "-0.4999999997671694");
        assert_eq!(decimal(round(x, 17)), "0.49999999976716936");
    }

    #[test]
    fn rounds_tiny_values_past_exact_powers() {
        let x = 1.0 / 3.0e10;
        assert_eq!(decimal(round(x, 25)), "0.0000000000333333333333333");
        assert_eq!(decimal(round(x, 12)), "0.000000000033");
    }

    #[test]
    fn result_never_exceeds_precision() {
        let values = [
            2_147_483_647.0 / 4_294_967_296.0,
            0.866_025_403_918_863_5,
            -2_147_483_647.0 / 3.0,
            1_234_567.890_123_456_7,
            1.0 / 3.0e10,
            std::f64::consts::PI,
        ];
        for x in values {
            for precision in 0..40 {
                let shown = decimal(round(x, precision));
                let limit = usize::try_from(precision).unwrap();
                assert!(
                    decimals(round(x, precision)) <= limit,
                    "{shown} has more than {precision} decimals"
                );
            }
        }
    }

    #[test]
    fn decimal_drops_trailing_zeros() {
        assert_eq!(decimal(round(2.000_000_1, 3)), "2");
        assert_eq!(decimal(round(-0.5, 4)), "-0.5");
        assert_eq!(decimal(round(0.277_123, 3)), "0.277");
        assert_eq!(decimal(-3.0), "-3");
    }

    #[test]
    fn decimal_never_prints_negative_zero() {
        assert_eq!(decimal(-0.0), "0");
        assert_eq!(decimal(round(-0.000_4, 3)), "0");
    }
}
