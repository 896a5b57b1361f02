//! Exact substring search: the Accelerated Linear and Hashed Accelerated
//! Linear engines, plus convenience entry points.

pub mod al;
pub mod hal;
pub mod hash_trait;
mod next_table;

use std::ops::Range;

use al::AcceleratedLinear;
use hal::HashedAcceleratedLinear;
use hash_trait::{ByteIdentity, SearchTrait};

use crate::error::Error;

/// Builds a [`HashedAcceleratedLinear`] engine for `pattern` under hash
/// family `T`, checking that `T` describes a valid suffix width.
///
/// For the common case of byte corpora, see [`search`]; call this directly
/// to use a custom [`SearchTrait`] (e.g. one of the `Dna2`/`Dna3`/`Dna4`
/// families), or to build an engine once and reuse it across many searches.
pub fn make_engine<E, T>(pattern: &[E]) -> Result<HashedAcceleratedLinear<'_, E, T>, Error>
where
	E: Copy + PartialEq,
	T: SearchTrait<E>,
{
	if T::SUFFIX_SIZE == 0 {
		return Err(Error::InvalidSuffixSize);
	}
	Ok(HashedAcceleratedLinear::new(pattern))
}

/// Builds an [`AcceleratedLinear`] engine for `pattern`, for use against
/// forward-only corpora that can't offer random access (e.g. a decompressing
/// reader or a network stream).
pub fn make_engine_iter<E: PartialEq>(pattern: &[E]) -> AcceleratedLinear<'_, E> {
	AcceleratedLinear::new(pattern)
}

/// Searches `corpus` for the first occurrence of `pattern`, using the
/// identity byte hash family. Builds a fresh engine per call; for repeated
/// searches of the same pattern, build one with [`make_engine`] and reuse it.
pub fn search(corpus: &[u8], pattern: &[u8]) -> Range<usize> {
	HashedAcceleratedLinear::<u8, ByteIdentity>::new(pattern).search(corpus)
}

/// Searches a forward-only `corpus` for the first occurrence of `pattern`.
pub fn search_iter<E, I>(corpus: I, pattern: &[E]) -> Range<usize>
where
	E: Copy + PartialEq,
	I: IntoIterator<Item = E>,
{
	AcceleratedLinear::new(pattern).search(corpus)
}
