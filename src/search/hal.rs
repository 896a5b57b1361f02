//! The Hashed Accelerated Linear (HAL) scanner.

use std::cell::OnceCell;
use std::marker::PhantomData;
use std::ops::Range;

use super::al::AcceleratedLinear;
use super::hash_trait::SearchTrait;

/// Which inner algorithm a [`HashedAcceleratedLinear`] actually runs.
///
/// Chosen once, at construction, from the pattern length and the trait's
/// `SUFFIX_SIZE`: a skip table keyed on a window wider than the pattern (or
/// a single-element pattern) can't help, so those cases fall back to the
/// plain AL scanner that HAL already carries internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
	Al,
	Hal,
}

/// A scanner for random-access corpora that augments [`AcceleratedLinear`]
/// with a skip table keyed by a hash of a `w`-element window (`w` given by
/// `T::SUFFIX_SIZE`), letting the scan jump over several corpus positions at
/// once instead of inspecting every element.
///
/// The skip table is built lazily, on the first call to [`Self::search`],
/// behind a [`OnceCell`] - so one engine can be constructed once and shared
/// by reference across any number of searches.
///
/// Searching mutates a per-call copy of the skip table's sentinel slot (see
/// [`Self::search`]) rather than the shared table itself, so concurrent
/// single-threaded reuse of one engine across unrelated corpora is safe;
/// nothing here is `Sync`, so sharing across OS threads would need wrapping
/// the table in something like [`std::sync::OnceLock`] instead.
pub struct HashedAcceleratedLinear<'p, E, T> {
	al: AcceleratedLinear<'p, E>,
	mode: Mode,
	skip: OnceCell<(Vec<usize>, usize)>,
	_trait: PhantomData<T>,
}

impl<'p, E: Copy + PartialEq, T: SearchTrait<E>> HashedAcceleratedLinear<'p, E, T> {
	/// Builds an engine for `pattern`. Panics if `T::SUFFIX_SIZE == 0`; use
	/// [`crate::search::make_engine`] for a checked constructor.
	pub fn new(pattern: &'p [E]) -> Self {
		assert!(T::SUFFIX_SIZE >= 1, "SearchTrait::SUFFIX_SIZE must be at least 1");

		let m = pattern.len();
		let w = T::SUFFIX_SIZE;
		let mode = if m <= 1 || m < w { Mode::Al } else { Mode::Hal };

		log::debug!(
			"HashedAcceleratedLinear: m={} w={} H={} mode={:?}",
			m,
			w,
			T::HASH_RANGE_MAX,
			mode
		);

		HashedAcceleratedLinear {
			al: AcceleratedLinear::new(pattern),
			mode,
			skip: OnceCell::new(),
			_trait: PhantomData,
		}
	}

	pub fn pattern(&self) -> &'p [E] {
		self.al.pattern()
	}

	/// Searches `corpus`, returning the half-open match range, the miss range
	/// `corpus.len()..corpus.len()`, or `0..0` for an empty pattern.
	pub fn search(&self, corpus: &[E]) -> Range<usize> {
		match self.mode {
			Mode::Al => self.al.search(corpus.iter().copied()),
			Mode::Hal => self.search_hal(corpus),
		}
	}

	fn search_hal(&self, corpus: &[E]) -> Range<usize> {
		let pattern = self.al.pattern();
		let next = self.al.next_table();
		let w = T::SUFFIX_SIZE;
		let m = pattern.len() as isize;
		let n = corpus.len() as isize;

		let (base_skip, mismatch_shift) = self.skip.get_or_init(|| compute_skip::<E, T>(pattern));
		let mismatch_shift = *mismatch_shift as isize;
		let mut skip = base_skip.clone();

		// Per-call sentinel patch: overwrite the pattern's own tail-hash slot
		// (0 since construction) with a value guaranteed to push the skip
		// loop past the end of `corpus`, so it always terminates instead of
		// reading the structural 0 as an endless zero-length jump.
		let tail_hash = T::hash(&pattern[pattern.len() - w..]);
		skip[tail_hash] = (n + 1) as usize;

		let window_at = |pos: isize| -> &[E] {
			let end = pos as usize;
			&corpus[end + 1 - w..=end]
		};

		let adjustment = n + m;
		let mut k: isize = -n;

		loop {
			k += m - 1;
			if k >= 0 {
				return corpus.len()..corpus.len();
			}

			loop {
				let increment = skip[T::hash(window_at(n + k))] as isize;
				k += increment;
				if k >= 0 {
					break;
				}
			}

			if k < m {
				return corpus.len()..corpus.len();
			}
			k -= adjustment;

			if corpus[(n + k) as usize] != pattern[0] {
				k += mismatch_shift;
				continue;
			}

			let mut j = 1usize;
			let mut matched = false;
			loop {
				k += 1;
				if corpus[(n + k) as usize] != pattern[j as usize] {
					break;
				}
				j += 1;
				if j as isize == m {
					matched = true;
					break;
				}
			}
			if matched {
				let end = (n + k + 1) as usize;
				return (end - pattern.len())..end;
			}

			if mismatch_shift > j as isize {
				k += mismatch_shift - j as isize;
				continue;
			}

			loop {
				let jn = next[j];
				if jn < 0 {
					k += 1;
					break;
				}
				if jn == 0 {
					break;
				}
				j = jn as usize;

				let mut rematched = false;
				loop {
					if corpus[(n + k) as usize] == pattern[j] {
						k += 1;
						j += 1;
						if j as isize == m {
							rematched = true;
							break;
						}
						if k == 0 {
							return corpus.len()..corpus.len();
						}
					} else {
						break;
					}
				}
				if rematched {
					let end = (n + k) as usize;
					return (end - pattern.len())..end;
				}
				// mismatch again at the new j; loop back and consult next[j]
			}
		}
	}
}

/// Builds the skip table and saved mismatch shift for `pattern`.
///
/// `skip` is initialized to `m - w + 1` everywhere (the largest safe jump:
/// a window this far ahead is the closest position that could still contain
/// a full pattern occurrence), then every suffix of the pattern's trailing
/// `m - 1` elements records how far its ending position is from the
/// pattern's end. The pattern's own tail window is special-cased to 0 (a
/// placeholder overwritten per-call in [`HashedAcceleratedLinear::search`])
/// after its prior value is saved as `mismatch_shift`, used when a candidate
/// verification fails on the very first comparison.
fn compute_skip<E: Copy, T: SearchTrait<E>>(pattern: &[E]) -> (Vec<usize>, usize) {
	let m = pattern.len();
	let w = T::SUFFIX_SIZE;
	let h = T::HASH_RANGE_MAX;

	let mut skip = vec![m - w + 1; h];
	for j in (w - 1)..(m - 1) {
		let window = &pattern[j + 1 - w..=j];
		skip[T::hash(window)] = m - 1 - j;
	}

	let tail_hash = T::hash(&pattern[m - w..]);
	let mismatch_shift = skip[tail_hash];
	skip[tail_hash] = 0;

	log::trace!("HAL skip table built: H={} mismatch_shift={}", h, mismatch_shift);
	(skip, mismatch_shift)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::search::hash_trait::ByteIdentity;

	fn hal(pattern: &[u8]) -> HashedAcceleratedLinear<'_, u8, ByteIdentity> {
		HashedAcceleratedLinear::new(pattern)
	}

	#[test]
	fn empty_pattern_matches_at_start() {
		assert_eq!(hal(b"").search(b"anything"), 0..0);
	}

	#[test]
	fn empty_corpus_misses() {
		assert_eq!(hal(b"a").search(b""), 0..0);
	}

	#[test]
	fn single_element_pattern_routes_to_al() {
		assert_eq!(hal(b"c").search(b"abcabc"), 2..3);
	}

	#[test]
	fn pattern_wider_than_suffix_window_uses_hal() {
		assert_eq!(hal(b"needle").search(b"haystackneedlehaystack"), 8..14);
	}

	#[test]
	fn pattern_longer_than_corpus_misses() {
		assert_eq!(hal(b"toolong").search(b"short"), 5..5);
	}

	#[test]
	fn repetitive_pattern_exercises_the_failure_table() {
		assert_eq!(hal(b"AAAAB").search(b"AAAAAB"), 1..6);
	}

	#[test]
	fn match_at_the_very_end_of_the_corpus() {
		assert_eq!(hal(b"end").search(b"the very end"), 9..12);
	}

	#[test]
	fn match_at_the_very_start_of_the_corpus() {
		assert_eq!(hal(b"start").search(b"start of it"), 0..5);
	}

	#[test]
	fn no_match_returns_corpus_length() {
		assert_eq!(hal(b"xyz").search(b"abcdefghij"), 10..10);
	}

	#[test]
	fn repeated_search_reuses_the_lazily_built_skip_table() {
		let engine = hal(b"ab");
		assert_eq!(engine.search(b"xxxabxxx"), 3..5);
		assert_eq!(engine.search(b"ababab"), 0..2);
	}

	#[test]
	fn compute_skip_zeroes_exactly_one_slot_and_saves_a_positive_mismatch_shift() {
		for pattern in [&b"AAAAB"[..], b"needle", b"ABCABCABCD", b"mississippi"] {
			let (skip, mismatch_shift) = compute_skip::<u8, ByteIdentity>(pattern);
			let zero_slots = skip.iter().filter(|&&v| v == 0).count();
			assert_eq!(zero_slots, 1, "pattern {pattern:?} should zero exactly one skip slot");
			assert!(mismatch_shift >= 1, "pattern {pattern:?} should save a positive mismatch shift");
		}
	}

	#[test]
	fn no_panic_when_kmp_resync_reaches_the_end_of_the_corpus() {
		assert_eq!(hal(b"aabaaa").search(b"aaabaa"), 6..6);
	}
}
