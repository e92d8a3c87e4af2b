//! Ordering and equality of integers.

use {
    super::{Integer, Sign},
    crate::limb,
    std::cmp::Ordering,
};

impl Integer
{
    /// Compare the magnitudes of two integers, ignoring their signs.
    pub fn abs_compare(a: &Self, b: &Self) -> Ordering
    {
        limb::compare(a.limbs(), b.limbs())
    }
}

impl Ord for Integer
{
    /// Total order: unequal signs order by sign, zeros are equal, and
    /// equal nonzero signs compare by magnitude, reversed for negatives.
    fn cmp(&self, other: &Self) -> Ordering
    {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => { }
            by_sign => return by_sign,
        }

        if self.sign == Sign::Zero {
            return Ordering::Equal;
        }

        let by_magnitude = Self::abs_compare(self, other);
        match self.sign {
            Sign::Negative => by_magnitude.reverse(),
            _ => by_magnitude,
        }
    }
}

impl PartialOrd for Integer
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering>
    {
        Some(self.cmp(other))
    }
}

impl PartialEq for Integer
{
    fn eq(&self, other: &Self) -> bool
    {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Integer
{
}

#[cfg(test)]
mod tests
{
    use {
        crate::integer::{Integer, Sign},
        proptest::proptest,
        std::cmp::Ordering,
    };

    #[test]
    fn signs_order_before_magnitudes()
    {
        let negative = Integer::from_limbs(Sign::Negative, &[0, 9]);
        let zero = Integer::zero();
        let positive = Integer::from(1);
        assert!(negative < zero);
        assert!(zero < positive);
        assert!(negative < positive);
    }

    #[test]
    fn negative_magnitudes_compare_reversed()
    {
        let small = Integer::from(-3);
        let large = Integer::from_limbs(Sign::Negative, &[0, 1]);
        assert!(large < small);
        assert_eq!(Integer::abs_compare(&large, &small), Ordering::Greater);
    }

    #[test]
    fn longer_magnitudes_are_larger()
    {
        let two_limbs = Integer::from_limbs(Sign::Positive, &[0, 1]);
        let one_limb = Integer::from(u32::MAX);
        assert!(one_limb < two_limbs);
        assert_eq!(two_limbs, two_limbs.clone());
    }

    proptest!
    {
        #[test]
        fn cmp_matches_native(a: i64, b: i64)
        {
            let x = Integer::from(a);
            let y = Integer::from(b);
            assert_eq!(x.cmp(&y), a.cmp(&b));
            assert_eq!(x == y, a == b);
        }
    }
}
