use criterion::{criterion_group, criterion_main, BatchSize, Bencher, Criterion};
use mnsearch::search::hal::HashedAcceleratedLinear;
use mnsearch::search::hash_trait::ByteIdentity;

criterion_group!(benches, search_bench);
criterion_main!(benches);

fn search_bench(c: &mut Criterion) {
	let mut group = c.benchmark_group("search");
	group.sample_size(20);

	group.bench_function("hal_needle_in_haystack", hal_needle_in_haystack);
	group.bench_function("al_needle_in_haystack", al_needle_in_haystack);

	group.finish();
}

fn corpus() -> Vec<u8> {
	let mut buf = Vec::with_capacity(1 << 20);
	while buf.len() < (1 << 20) {
		buf.extend_from_slice(b"the quick brown fox jumps over the lazy dog ");
	}
	buf.extend_from_slice(b"needle-in-a-haystack");
	buf
}

fn hal_needle_in_haystack(b: &mut Bencher) {
	let data = corpus();
	let pattern = b"needle-in-a-haystack";

	b.iter_batched(
		|| HashedAcceleratedLinear::<u8, ByteIdentity>::new(pattern),
		|engine| engine.search(&data),
		BatchSize::SmallInput,
	);
}

fn al_needle_in_haystack(b: &mut Bencher) {
	let data = corpus();
	let pattern = b"needle-in-a-haystack";

	b.iter_batched(
		|| mnsearch::search::al::AcceleratedLinear::new(pattern),
		|engine| engine.search(data.iter().copied()),
		BatchSize::SmallInput,
	);
}
