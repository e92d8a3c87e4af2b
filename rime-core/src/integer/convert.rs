//! Conversions between integers and native machine words.
//!
//! This is the decomposition/recomposition boundary: native integers
//! are split into least-significant-first limbs on the way in and
//! reassembled on the way out, so the kernel never depends on the host
//! byte order.

use {
    super::{Integer, Repr, Sign},
    crate::limb::Limb,
};

impl Integer
{
    /// Create an integer from a sign and a nonzero native magnitude.
    fn from_magnitude(sign: Sign, magnitude: u64) -> Self
    {
        debug_assert!(magnitude != 0);
        debug_assert!(sign != Sign::Zero);

        match Limb::try_from(magnitude) {
            Ok(limb) => Self{sign, repr: Repr::Inline(limb)},
            Err(_) => {
                let limbs = [magnitude as Limb, (magnitude >> Limb::BITS) as Limb];
                Self::from_limbs(sign, &limbs)
            }
        }
    }

    /// The magnitude as a native word, if it fits.
    fn magnitude_u64(&self) -> Option<u64>
    {
        match *self.limbs() {
            [low] => Some(low as u64),
            [low, high] => Some(low as u64 | (high as u64) << Limb::BITS),
            _ => None,
        }
    }

    /// The value as a signed native word, if it fits.
    pub fn to_i64(&self) -> Option<i64>
    {
        let magnitude = self.magnitude_u64()?;
        match self.sign {
            Sign::Zero => Some(0),
            Sign::Positive => i64::try_from(magnitude).ok(),
            Sign::Negative if magnitude <= i64::MIN.unsigned_abs() =>
                Some(magnitude.wrapping_neg() as i64),
            Sign::Negative => None,
        }
    }

    /// The value as an unsigned native word, if it fits.
    ///
    /// Negative values never fit.
    pub fn to_u64(&self) -> Option<u64>
    {
        match self.sign {
            Sign::Negative => None,
            _ => self.magnitude_u64(),
        }
    }
}

impl From<i64> for Integer
{
    fn from(value: i64) -> Self
    {
        if value == 0 {
            return Self::zero();
        }
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        // unsigned_abs is total: it maps i64::MIN to 2^63 directly,
        // with no overflowing negation on the way.
        Self::from_magnitude(sign, value.unsigned_abs())
    }
}

impl From<u64> for Integer
{
    fn from(value: u64) -> Self
    {
        if value == 0 {
            return Self::zero();
        }
        Self::from_magnitude(Sign::Positive, value)
    }
}

/// Create integers from the native types that widen losslessly.
macro_rules! integer_from_native
{
    { $($type:ty => $via:ty;)* } => {
        $(
            impl From<$type> for Integer
            {
                fn from(value: $type) -> Self
                {
                    Self::from(value as $via)
                }
            }
        )*
    };
}

integer_from_native! {
    i8  => i64;
    i16 => i64;
    i32 => i64;
    u8  => u64;
    u16 => u64;
    u32 => u64;
}

#[cfg(test)]
mod tests
{
    use {
        crate::integer::{Integer, Sign, assert_normalized},
        proptest::proptest,
    };

    macro_rules! roundtrip_native
    {
        { $($name:ident $type:ty;)* } => {
            proptest!
            {
                $(
                    #[test]
                    fn $name(expected: $type)
                    {
                        let integer = Integer::from(expected);
                        assert_eq!(integer.to_i64(), Some(expected as i64));
                        assert_normalized(&integer);
                    }
                )*
            }
        };
    }

    roundtrip_native! {
        roundtrip_i8  i8;
        roundtrip_i16 i16;
        roundtrip_i32 i32;
        roundtrip_i64 i64;
        roundtrip_u8  u8;
        roundtrip_u16 u16;
        roundtrip_u32 u32;
    }

    proptest!
    {
        #[test]
        fn roundtrip_u64(expected: u64)
        {
            let integer = Integer::from(expected);
            assert_eq!(integer.to_u64(), Some(expected));
            assert_normalized(&integer);
        }
    }

    #[test]
    fn the_minimum_native_value_roundtrips()
    {
        let integer = Integer::from(i64::MIN);
        assert_eq!(integer.sign(), Sign::Negative);
        assert_eq!(integer.size(), 2);
        assert_eq!(integer.to_i64(), Some(i64::MIN));
        assert_normalized(&integer);
    }

    #[test]
    fn zero_converts_with_a_zero_sign()
    {
        let integer = Integer::from(0);
        assert!(integer.is_zero());
        assert_eq!(integer.to_i64(), Some(0));
        assert_eq!(integer.to_u64(), Some(0));
    }

    #[test]
    fn out_of_range_extractions_decline()
    {
        // One past i64::MAX still fits u64.
        let big = Integer::from(1_u64 << 63);
        assert_eq!(big.to_i64(), None);
        assert_eq!(big.to_u64(), Some(1 << 63));

        let negative = Integer::from(-1);
        assert_eq!(negative.to_u64(), None);

        // Three limbs fit no native word at all.
        let huge = Integer::from_limbs(Sign::Positive, &[0, 0, 1]);
        assert_eq!(huge.to_i64(), None);
        assert_eq!(huge.to_u64(), None);
    }
}
