//! Shared utility functions.

/// Round a currency amount to two decimal places, half away from zero.
///
/// Every derived figure in the costing cascade is rounded with this function
/// at its own stage; rounding is deliberately not deferred to the end, so
/// intermediate rounding can accumulate into the final cent. Callers must
/// not "fix" this by summing unrounded values.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_half_away_from_zero() {
        assert_eq!(round2(0.025), 0.03);
        assert_eq!(round2(-0.025), -0.03);
    }

    #[test]
    fn round2_no_op_on_exact() {
        assert_eq!(round2(1200.0), 1200.0);
        assert_eq!(round2(27.6), 27.6);
    }

    #[test]
    fn round2_truncates_sub_cent() {
        assert_eq!(round2(70.3799999), 70.38);
        assert_eq!(round2(0.001), 0.0);
    }

    #[test]
    fn round2_rounds_up_past_half() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(99.994), 99.99);
    }

    #[test]
    fn round2_zero() {
        assert_eq!(round2(0.0), 0.0);
    }
}
