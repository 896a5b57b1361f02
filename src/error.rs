use std::fmt::{self, Display, Formatter};

/// Errors raised at search-engine construction time.
///
/// The search algorithms themselves are total: once an [`crate::search::al::AcceleratedLinear`]
/// or [`crate::search::hal::HashedAcceleratedLinear`] exists, calling `search` can never fail.
/// This type only covers the boundary, where a caller-supplied
/// [`crate::search::hash_trait::SearchTrait`] could describe an invalid hash family.
#[derive(Debug)]
pub enum Error {
	/// A `SearchTrait` reported `SUFFIX_SIZE == 0`, violating the `w >= 1` contract
	/// required for the skip table to make sense.
	InvalidSuffixSize,
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Error::InvalidSuffixSize => write!(f, "SearchTrait::SUFFIX_SIZE must be at least 1"),
		}
	}
}

impl std::error::Error for Error {}
