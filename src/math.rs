// 最大公約数
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

// 最小公倍数（どちらかが0なら0）
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// `lcm` that reports overflow instead of wrapping.
pub fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 3), 1);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn lcm_basics() {
        assert_eq!(lcm(2, 3), 6);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(2, 4), 4);
        assert_eq!(lcm(1, 1), 1);
    }

    #[test]
    fn lcm_with_zero_is_zero() {
        assert_eq!(lcm(0, 9), 0);
        assert_eq!(lcm(9, 0), 0);
        assert_eq!(checked_lcm(0, 9), Some(0));
    }

    #[test]
    fn checked_lcm_overflow() {
        assert_eq!(checked_lcm(u64::MAX, u64::MAX - 1), None);
        assert_eq!(checked_lcm(6, 4), Some(12));
    }
}
