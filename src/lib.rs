//! Exact substring search using the Musser-Nishanov family of algorithms.
//!
//! Two cooperating scanners are provided:
//!
//! - [`search::al::AcceleratedLinear`] (AL): a Knuth-Morris-Pratt-style linear
//!   scanner whose outer scan uses a fast "find the first matching element"
//!   primitive to skip non-candidate positions. Works over any
//!   forward-iterable corpus.
//! - [`search::hal::HashedAcceleratedLinear`] (HAL): a variant for
//!   random-access corpora that augments AL with a skip table keyed by a
//!   short hash of a fixed-size suffix of the current window, giving
//!   sub-linear average-case behaviour on large alphabets, or small
//!   alphabets paired with a wider hash.
//!
//! The [`search::hash_trait::SearchTrait`] trait parameterizes the hash
//! family used by HAL's skip table; [`search::hash_trait::ByteIdentity`] and
//! the `Dna2`/`Dna3`/`Dna4` traits are provided out of the box.
//!
//! See [`search::search`], [`search::search_iter`] and [`search::make_engine`]
//! for the easiest ways to run a search.

pub mod error;
pub mod search;

#[cfg(test)]
pub(crate) fn init_test_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}
