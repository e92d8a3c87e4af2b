//! In-place arithmetic on integers.

use {
    super::{Integer, Repr, Sign},
    crate::limb::{self, Limb},
    std::{cmp::Ordering, mem},
};

impl Integer
{
    /// Add another integer to this one in place.
    pub fn add(&mut self, other: &Self)
    {
        if other.sign == Sign::Zero {
            return;
        }
        if self.sign == Sign::Zero {
            *self = other.clone();
            return;
        }
        if self.sign == other.sign {
            self.add_magnitude(other);
            return;
        }

        // Opposite signs: the result takes the sign
        // of whichever magnitude is larger.
        match Self::abs_compare(self, other) {
            Ordering::Equal => *self = Self::zero(),
            Ordering::Greater => self.subtract_lesser(other),
            Ordering::Less => {
                let mut result = other.clone();
                result.subtract_lesser(self);
                mem::swap(self, &mut result);
            }
        }
    }

    /// Subtract another integer from this one in place.
    pub fn subtract(&mut self, other: &Self)
    {
        if other.sign == Sign::Zero {
            return;
        }
        if self.sign == Sign::Zero {
            *self = other.clone();
            self.negate();
            return;
        }
        if self.sign != other.sign {
            self.add_magnitude(other);
            return;
        }

        match Self::abs_compare(self, other) {
            Ordering::Equal => *self = Self::zero(),
            Ordering::Greater => self.subtract_lesser(other),
            Ordering::Less => {
                let mut result = other.clone();
                result.subtract_lesser(self);
                result.negate();
                mem::swap(self, &mut result);
            }
        }
    }

    /// Multiply this integer by another in place.
    ///
    /// Neither operand may be zero; the zero cases belong to the caller,
    /// because a zero magnitude never reaches the magnitude engine.
    pub fn multiply_by(&mut self, other: &Self)
    {
        debug_assert!(self.sign != Sign::Zero);
        debug_assert!(other.sign != Sign::Zero);

        if let Some(product) = one_limb_product(&self.repr, &other.repr) {
            self.repr = Repr::Inline(product);
        } else {
            let x_len = self.size();
            self.grow(x_len + other.size());
            let y = other.limbs();
            let x = self.unshare();
            limb::multiply(x, x_len, y);
            self.shrink_to_fit();
        }

        self.sign = self.sign.product(other.sign);
    }

    /// Divide the integer by two in place, rounding toward zero.
    pub fn halve(&mut self)
    {
        if let Repr::Inline(limb) = &mut self.repr {
            *limb /= 2;
            if *limb == 0 {
                self.sign = Sign::Zero;
            }
            return;
        }

        let x = self.unshare();
        limb::shift_right(x);
        self.shrink_to_fit();
    }

    /// Add the magnitude of another integer, ignoring signs.
    fn add_magnitude(&mut self, other: &Self)
    {
        if let (Repr::Inline(x), &Repr::Inline(y)) = (&mut self.repr, &other.repr) {
            if !limb::will_carry(*x, y) {
                *x += y;
                return;
            }
        }

        let r_size = limb::sum_size(self.limbs(), other.limbs());
        if r_size > self.size() {
            self.grow(r_size);
        }

        // sum_size is exact, so no high limb is left zero here
        // and no shrink is needed afterwards.
        let y = other.limbs();
        let x = self.unshare();
        limb::add(x, y);
    }

    /// Subtract the magnitude of a strictly smaller integer, ignoring
    /// signs.
    fn subtract_lesser(&mut self, other: &Self)
    {
        debug_assert!(Self::abs_compare(other, self) == Ordering::Less);

        if let (Repr::Inline(x), &Repr::Inline(y)) = (&mut self.repr, &other.repr) {
            *x -= y;
            return;
        }

        let y = other.limbs();
        let x = self.unshare();
        limb::subtract(x, y);
        self.shrink_to_fit();
    }
}

/// The product of two inline magnitudes, if it fits a single limb.
///
/// The widening multiply makes this exact: it declines only when the
/// product genuinely overflows the limb width, never spuriously.
fn one_limb_product(x: &Repr, y: &Repr) -> Option<Limb>
{
    let (&Repr::Inline(a), &Repr::Inline(b)) = (x, y) else { return None };
    Limb::try_from(limb::long_multiply(a, b)).ok()
}
