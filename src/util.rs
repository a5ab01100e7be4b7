//! Small numeric helpers shared across report builders.

/// Round to 2 decimal places. Applied only at report boundaries; internal
/// computation keeps full precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn test_round2() {
        assert_eq!(round2(8.333333), 8.33);
        assert_eq!(round2(-10.005), -10.01); // half rounds away from zero
        assert_eq!(round2(2463.3333333333335), 2463.33);
        assert_eq!(round2(25.0), 25.0);
    }
}
