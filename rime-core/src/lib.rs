//! Arbitrary-precision signed integer values for the Rime runtime.
//!
//! An [`Integer`] stores small magnitudes inline in a single machine word
//! and larger magnitudes in a shared, reference-counted [`Extent`] of
//! fixed-width limbs. Cloning an integer is always O(1); the first
//! mutation through any handle forks a shared buffer, so no integer ever
//! observes another's in-place updates. The limb-by-limb math itself
//! lives in the [`limb`] kernel.
//!
//! [`Integer`]: `integer::Integer`
//! [`Extent`]: `extent::Extent`

#![warn(missing_docs)]

pub mod extent;
pub mod integer;
pub mod limb;
