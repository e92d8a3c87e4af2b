//! Limb-level arithmetic on raw magnitude buffers.
//!
//! A magnitude is a slice of fixed-width unsigned limbs stored
//! least-significant limb first. The functions here know nothing about
//! signs, sharing, or allocation; callers pass in buffers that are
//! already sized correctly for the operation.

use std::cmp::Ordering;

/// One fixed-width unsigned word of a multi-limb magnitude.
///
/// The crate fixes a 32-bit limb so that a genuine widening multiply
/// into [`Wide`] is available on every target.
pub type Limb = u32;

/// Accumulator wide enough for a limb product plus carries.
pub type Wide = u64;

/// Compare two magnitudes, treating missing high limbs as zero.
pub fn compare(a: &[Limb], b: &[Limb]) -> Ordering
{
    let len = a.len().max(b.len());
    for i in (0 .. len).rev() {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x != y {
            return x.cmp(&y);
        }
    }
    Ordering::Equal
}

/// Whether adding two single limbs overflows the limb width.
pub fn will_carry(x: Limb, y: Limb) -> bool
{
    x.checked_add(y).is_none()
}

/// The minimum limb count able to hold the sum of two magnitudes.
///
/// This is the larger of the two lengths, plus one only if the addition
/// carries out of the topmost limb position.
pub fn sum_size(a: &[Limb], b: &[Limb]) -> usize
{
    let len = a.len().max(b.len());
    for i in (0 .. len).rev() {
        let x = a.get(i).copied().unwrap_or(0) as Wide;
        let y = b.get(i).copied().unwrap_or(0) as Wide;
        // A limb pair summing to exactly the limb maximum passes a
        // carry from below straight through, so keep scanning down.
        match x + y {
            t if t > Limb::MAX as Wide => return len + 1,
            t if t < Limb::MAX as Wide => return len,
            _ => { }
        }
    }
    len
}

/// In-place `x += y`, propagating the carry across all of `x`.
///
/// The caller guarantees that `x` is long enough to absorb the final
/// carry; see [`sum_size`].
pub fn add(x: &mut [Limb], y: &[Limb])
{
    debug_assert!(x.len() >= y.len());

    let mut carry: Limb = 0;
    for i in 0 .. x.len() {
        if i >= y.len() && carry == 0 {
            break;
        }
        let yi = y.get(i).copied().unwrap_or(0);
        let t = x[i] as Wide + yi as Wide + carry as Wide;
        x[i] = t as Limb;
        carry = (t >> Limb::BITS) as Limb;
    }

    debug_assert!(carry == 0, "sum does not fit in x");
}

/// In-place `x -= y`, propagating the borrow.
///
/// The magnitude of `y` must not exceed the magnitude of `x`.
pub fn subtract(x: &mut [Limb], y: &[Limb])
{
    debug_assert!(compare(y, x) != Ordering::Greater);

    let mut borrow: Limb = 0;
    for i in 0 .. x.len() {
        if i >= y.len() && borrow == 0 {
            break;
        }
        let yi = y.get(i).copied().unwrap_or(0);
        let (t, under_y) = x[i].overflowing_sub(yi);
        let (t, under_b) = t.overflowing_sub(borrow);
        x[i] = t;
        borrow = (under_y || under_b) as Limb;
    }

    debug_assert!(borrow == 0, "y exceeds x");
}

/// Schoolbook multiply-accumulate.
///
/// On entry the multiplicand occupies `x[.. x_len]` and the remaining
/// limbs of `x` are zero; `x` must be exactly `x_len + y.len()` limbs
/// long. On exit `x` holds the full double-length product.
pub fn multiply(x: &mut [Limb], x_len: usize, y: &[Limb])
{
    debug_assert_eq!(x.len(), x_len + y.len());
    debug_assert!(x[x_len ..].iter().all(|&limb| limb == 0));

    // Consume the multiplicand limbs from most significant to least,
    // so each partial product lands above the limbs not yet consumed.
    for i in (0 .. x_len).rev() {
        let xi = x[i];
        x[i] = 0;

        let mut carry: Wide = 0;
        for (j, &yj) in y.iter().enumerate() {
            let t = long_multiply(xi, yj) + x[i + j] as Wide + carry;
            x[i + j] = t as Limb;
            carry = t >> Limb::BITS;
        }

        let mut k = i + y.len();
        while carry != 0 {
            let t = x[k] as Wide + carry;
            x[k] = t as Limb;
            carry = t >> Limb::BITS;
            k += 1;
        }
    }
}

/// Logical right shift of the entire magnitude by exactly one bit.
///
/// The low bit of each limb becomes the top bit of the limb below it;
/// the low bit of the whole magnitude is dropped.
pub fn shift_right(x: &mut [Limb])
{
    let mut carry: Limb = 0;
    for limb in x.iter_mut().rev() {
        let low = *limb & 1;
        *limb = *limb >> 1 | carry << (Limb::BITS - 1);
        carry = low;
    }
}

/// Widening multiply of two limbs into a double-width intermediate.
pub fn long_multiply(a: Limb, b: Limb) -> Wide
{
    a as Wide * b as Wide
}
