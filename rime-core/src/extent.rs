//! Shared storage for multi-limb magnitudes.

use {
    crate::limb::Limb,
    std::{ops::Deref, sync::Arc},
};

/// Reference-counted buffer of limbs.
///
/// Cloning an extent shares the underlying buffer; [`make_mut`] forks it
/// the moment a holder needs to write while the buffer is shared. This
/// is the single copy-on-write point in the crate: every mutation of a
/// boxed [`Integer`] routes through it, so an in-place update is never
/// observable through another integer sharing the same buffer.
///
/// [`make_mut`]: `Self::make_mut`
/// [`Integer`]: `crate::integer::Integer`
#[derive(Clone, Debug)]
pub struct Extent
{
    // INVARIANT: A shared buffer is only read; make_mut rebinds this
    // extent to a private copy before handing out mutable access.
    limbs: Arc<[Limb]>,
}

impl Extent
{
    /// Allocate a zero-filled buffer of `n` limbs.
    pub fn alloc(n: usize) -> Self
    {
        Self{limbs: vec![0; n].into()}
    }

    /// Allocate a buffer holding a copy of the given limbs.
    pub fn from_limbs(limbs: &[Limb]) -> Self
    {
        Self{limbs: limbs.into()}
    }

    /// The number of references to the buffer, including this one.
    pub fn ref_count(&self) -> usize
    {
        Arc::strong_count(&self.limbs)
    }

    /// Obtain exclusive access to the limbs.
    ///
    /// If the buffer is shared, this extent is first rebound to a
    /// private copy, releasing its reference to the shared buffer.
    pub fn make_mut(&mut self) -> &mut [Limb]
    {
        if Arc::get_mut(&mut self.limbs).is_none() {
            self.limbs = Arc::from(&*self.limbs);
        }
        Arc::get_mut(&mut self.limbs).expect("extent is uniquely owned")
    }
}

impl Deref for Extent
{
    type Target = [Limb];

    fn deref(&self) -> &Self::Target
    {
        &self.limbs
    }
}
