//! Arbitrary-precision signed integers with copy-on-write sharing.

use {
    crate::{extent::Extent, limb::Limb},
    std::slice,
    thiserror::Error,
};

mod arith;
mod compare;
mod convert;

/// Sign of an [`Integer`].
///
/// The variants are declared so that the derived [`Ord`] places negative
/// values below zero and zero below positive values.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Sign
{
    /// The value is less than zero.
    Negative = -1,

    /// The value is exactly zero.
    Zero = 0,

    /// The value is greater than zero.
    Positive = 1,
}

impl Sign
{
    /// The sign of the negated value.
    pub fn flip(self) -> Self
    {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero     => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }

    /// The sign of a product of values with the given signs.
    pub fn product(self, other: Self) -> Self
    {
        match (self, other) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            _ if self == other                => Self::Positive,
            _                                 => Self::Negative,
        }
    }
}

/// Arbitrary-precision signed integer.
///
/// Magnitudes that fit a single [`Limb`] are stored inline; anything
/// larger lives in a shared [`Extent`]. Cloning is always O(1): a clone
/// of a boxed integer shares the extent, and the first mutation through
/// either handle forks the buffer, so one integer's in-place update is
/// never observable through another.
///
/// # Examples
///
/// ```
/// # use rime_core::integer::{Integer, Sign};
/// let mut a = Integer::from(5);
/// a.add(&Integer::from(-3));
/// assert_eq!(a.to_i64(), Some(2));
/// assert_eq!(a.sign(), Sign::Positive);
/// ```
#[derive(Clone, Debug)]
pub struct Integer
{
    // INVARIANT: sign is Zero iff the value is zero,
    // which is always stored as Inline(0).
    sign: Sign,
    repr: Repr,
}

/// Storage for the magnitude of an [`Integer`].
#[derive(Clone, Debug)]
enum Repr
{
    /// The magnitude fits a single limb and is stored inline.
    Inline(Limb),

    /// The magnitude occupies the first `len` limbs of an extent,
    /// least-significant first.
    ///
    /// INVARIANT: len is greater than one, and the limb at len - 1 is
    /// nonzero. Limbs beyond len are unused slop left behind by
    /// shrink_to_fit.
    Boxed
    {
        extent: Extent,
        len: usize,
    },
}

impl Integer
{
    /// Create the integer zero.
    pub fn zero() -> Self
    {
        Self{sign: Sign::Zero, repr: Repr::Inline(0)}
    }

    /// Create an integer from an explicit limb sequence and sign.
    ///
    /// The limbs are given least-significant first. The sequence must be
    /// more than one limb long with a nonzero highest limb, and the sign
    /// must not be [`Sign::Zero`]; magnitudes that fit a single limb are
    /// constructed with [`From`] instead.
    pub fn from_limbs(sign: Sign, limbs: &[Limb]) -> Self
    {
        debug_assert!(limbs.len() > 1);
        debug_assert!(limbs.last() != Some(&0));
        debug_assert!(sign != Sign::Zero);

        let extent = Extent::from_limbs(limbs);
        let len = limbs.len();
        Self{sign, repr: Repr::Boxed{extent, len}}
    }

    /// The sign of the integer.
    pub fn sign(&self) -> Sign
    {
        self.sign
    }

    /// Whether the integer is exactly zero.
    pub fn is_zero(&self) -> bool
    {
        self.sign == Sign::Zero
    }

    /// The number of limbs making up the magnitude.
    ///
    /// Inline magnitudes, including zero, count as one limb.
    pub fn size(&self) -> usize
    {
        match &self.repr {
            Repr::Inline(_) => 1,
            Repr::Boxed{len, ..} => *len,
        }
    }

    /// The limbs making up the magnitude, least-significant first.
    pub fn limbs(&self) -> &[Limb]
    {
        match &self.repr {
            Repr::Inline(limb) => slice::from_ref(limb),
            Repr::Boxed{extent, len} => &extent[.. *len],
        }
    }

    /// Negate the integer in place.
    ///
    /// Zero stays zero; nothing else changes representation.
    pub fn negate(&mut self)
    {
        self.sign = self.sign.flip();
    }

    /// Grow the magnitude storage to exactly `n` limbs.
    ///
    /// The new high-order limbs are zero, and the resulting extent is
    /// always privately owned. Fails with [`LimbCountOverflow`] if `n`
    /// does not exceed the current limb count.
    pub fn extend(&mut self, n: usize) -> Result<(), LimbCountOverflow>
    {
        if n <= self.size() {
            return Err(LimbCountOverflow);
        }
        self.grow(n);
        Ok(())
    }

    /// Infallible [`extend`] for internal callers that have already
    /// established `n > self.size()`.
    ///
    /// [`extend`]: `Self::extend`
    fn grow(&mut self, n: usize)
    {
        debug_assert!(n > self.size());

        let old = self.limbs();
        let mut extent = Extent::alloc(n);
        extent.make_mut()[.. old.len()].copy_from_slice(old);
        self.repr = Repr::Boxed{extent, len: n};
    }

    /// Obtain exclusive access to the limbs of the magnitude.
    ///
    /// For a boxed magnitude this forks the extent if it is shared, so
    /// the returned limbs are never aliased by another integer. Every
    /// mutating operation goes through here before writing.
    fn unshare(&mut self) -> &mut [Limb]
    {
        match &mut self.repr {
            Repr::Inline(limb) => slice::from_mut(limb),
            Repr::Boxed{extent, len} => &mut extent.make_mut()[.. *len],
        }
    }

    /// Trim zero high-order limbs from a boxed magnitude.
    ///
    /// If exactly one limb remains, the integer returns to the inline
    /// representation and its reference to the extent is released. The
    /// magnitude must not be zero.
    fn shrink_to_fit(&mut self)
    {
        let Repr::Boxed{extent, len} = &mut self.repr else { return };

        while extent[*len - 1] == 0 {
            *len -= 1;
            debug_assert!(*len != 0);
        }

        if *len == 1 {
            let limb = extent[0];
            debug_assert!(limb != 0);
            self.repr = Repr::Inline(limb);
        }
    }
}

/// Returned by [`Integer::extend`] when the requested limb count does
/// not exceed the integer's current limb count.
#[derive(Debug, Eq, Error, PartialEq)]
#[error("Requested limb count does not grow the integer")]
pub struct LimbCountOverflow;

/// Check every representation invariant of an integer.
#[cfg(test)]
pub (crate) fn assert_normalized(integer: &Integer)
{
    match &integer.repr {
        Repr::Inline(0) => assert_eq!(integer.sign, Sign::Zero),
        Repr::Inline(_) => assert_ne!(integer.sign, Sign::Zero),
        Repr::Boxed{extent, len} => {
            assert_ne!(integer.sign, Sign::Zero);
            assert!(*len > 1);
            assert!(*len <= extent.len());
            assert_ne!(extent[*len - 1], 0);
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn zero_is_inline_with_a_zero_sign()
    {
        let zero = Integer::zero();
        assert_eq!(zero.sign(), Sign::Zero);
        assert!(zero.is_zero());
        assert_eq!(zero.size(), 1);
        assert_eq!(zero.limbs(), [0]);
        assert_normalized(&zero);
    }

    #[test]
    fn sign_arithmetic()
    {
        assert_eq!(Sign::Negative.flip(), Sign::Positive);
        assert_eq!(Sign::Zero.flip(), Sign::Zero);
        assert_eq!(Sign::Negative.product(Sign::Negative), Sign::Positive);
        assert_eq!(Sign::Negative.product(Sign::Positive), Sign::Negative);
        assert_eq!(Sign::Positive.product(Sign::Zero), Sign::Zero);
        assert!(Sign::Negative < Sign::Zero && Sign::Zero < Sign::Positive);
    }

    #[test]
    fn extend_rejects_non_growing_limb_counts()
    {
        let mut inline = Integer::from(7);
        assert_eq!(inline.extend(1), Err(LimbCountOverflow));
        assert_eq!(inline.extend(0), Err(LimbCountOverflow));

        let mut boxed = Integer::from_limbs(Sign::Positive, &[1, 2, 3]);
        assert_eq!(boxed.extend(2), Err(LimbCountOverflow));
        assert_eq!(boxed.extend(3), Err(LimbCountOverflow));
        assert_eq!(boxed.limbs(), [1, 2, 3]);
    }

    #[test]
    fn extend_zero_fills_the_new_high_limbs()
    {
        let mut integer = Integer::from(7);
        integer.extend(3).unwrap();
        assert_eq!(integer.size(), 3);
        assert_eq!(integer.limbs(), [7, 0, 0]);
    }

    #[test]
    fn extend_leaves_a_shared_extent_untouched()
    {
        let original = Integer::from_limbs(Sign::Positive, &[1, 2]);
        let mut grown = original.clone();
        grown.extend(3).unwrap();
        assert_eq!(original.limbs(), [1, 2]);
        assert_eq!(grown.limbs(), [1, 2, 0]);
    }

    #[test]
    fn unshare_forks_only_when_shared()
    {
        let mut integer = Integer::from_limbs(Sign::Positive, &[1, 2]);
        let copy = integer.clone();
        integer.unshare()[0] = 9;
        assert_eq!(integer.limbs(), [9, 2]);
        assert_eq!(copy.limbs(), [1, 2]);
    }

    #[test]
    fn shrink_to_fit_collapses_to_inline()
    {
        let mut integer = Integer::from(5);
        integer.grow(3);
        integer.shrink_to_fit();
        assert_eq!(integer.limbs(), [5]);
        assert_normalized(&integer);
    }

    #[test]
    fn shrink_to_fit_keeps_multi_limb_magnitudes_boxed()
    {
        let mut integer = Integer::from_limbs(Sign::Positive, &[1, 2]);
        integer.grow(4);
        integer.shrink_to_fit();
        assert_eq!(integer.size(), 2);
        assert_eq!(integer.limbs(), [1, 2]);
        assert_normalized(&integer);
    }
}
