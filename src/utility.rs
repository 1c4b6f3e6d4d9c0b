//! Integer helpers that every day count in the crate is built on.
//!
//! Calendar offsets routinely go negative (years before a break, days before a month boundary)
//! so the division here floors instead of truncating toward zero like `/` does.

/// Floor of `a / b`, so `div(-7, 3)` is `-3` and not `-2`.
///
/// `b` must not be zero.
pub const fn div(a: i64, b: i64) -> i64 {
    let q = a.div_euclid(b);
    // euclidean division rounds up instead when the divisor is negative
    if b < 0 && a.rem_euclid(b) != 0 { q - 1 } else { q }
}

/// The remainder of [`div`], `a - div(a, b) * b`.
///
/// For a positive `b` this is always in `0..b`, whatever the sign of `a`.
pub const fn modulo(a: i64, b: i64) -> i64 {
    let r = a.rem_euclid(b);
    if b < 0 && r != 0 { r + b } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_floors_negative_operands() {
        assert_eq!(div(-7, 3), -3);
        assert_eq!(div(-6, 3), -2);
        assert_eq!(div(-1, 4), -1);
        assert_eq!(div(7, -3), -3);
        assert_eq!(div(-7, -3), 2);
    }

    #[test]
    fn test_div_positive_operands() {
        assert_eq!(div(7, 3), 2);
        assert_eq!(div(0, 33), 0);
        assert_eq!(div(33, 33), 1);
        assert_eq!(div(425, 33), 12);
    }

    #[test]
    fn test_modulo_negative_operands() {
        assert_eq!(modulo(-7, 3), 2);
        assert_eq!(modulo(-1, 4), 3);
        assert_eq!(modulo(-33, 33), 0);
        assert_eq!(modulo(7, -3), -2);
        assert_eq!(modulo(-7, -3), -1);
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        assert_eq!(modulo(i64::MIN, 146_097), (i64::MIN as i128).rem_euclid(146_097) as i64);
        assert_eq!(modulo(i64::MAX, 7), i64::MAX % 7);
        assert_eq!(div(i64::MIN, 1), i64::MIN);
    }

    #[test]
    fn test_modulo_stays_in_range() {
        for a in -100..=100 {
            for b in 1..=40 {
                let m = modulo(a, b);
                assert!((0..b).contains(&m), "modulo({}, {}) = {}", a, b, m);
                assert_eq!(div(a, b) * b + m, a);
            }
        }
    }
}
