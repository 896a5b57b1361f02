//! Construction of the "optimized" Knuth-Morris-Pratt failure function shared
//! by both [`super::al::AcceleratedLinear`] and [`super::hal::HashedAcceleratedLinear`].

/// Builds the optimized failure table for `pattern`.
///
/// `next[0]` is always `-1`. For `0 < j < m`, let `t` be the length of the
/// longest proper suffix of `pattern[..j]` that is also a prefix of
/// `pattern`. `next[j]` is `t` unless `pattern[j] == pattern[t]`, in which
/// case comparing against `pattern[t]` on a mismatch would immediately fail
/// again, so `next[j]` is set to `next[t]` instead.
///
/// Returns an empty `Vec` for an empty pattern.
pub fn build<E: PartialEq>(pattern: &[E]) -> Vec<isize> {
	let m = pattern.len();
	if m == 0 {
		return Vec::new();
	}

	let mut next: Vec<isize> = Vec::with_capacity(m);
	next.push(-1);

	let mut j = 0usize;
	let mut t: isize = -1;

	while j < m - 1 {
		while t >= 0 && pattern[j] != pattern[t as usize] {
			t = next[t as usize];
		}
		j += 1;
		t += 1;
		let t_idx = t as usize;
		next.push(if pattern[j] == pattern[t_idx] { next[t_idx] } else { t });
	}

	next
}
