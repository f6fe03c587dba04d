//! Benchmark suite for MIN parsing and frame-type reduction
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use celmap_benches::{generate_min_data, sizes};
use celmap_types::{
	cel::FrameTypeMapping,
	file::{MinFile, PieceSize},
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const CASES: [(&str, (u16, usize, usize)); 4] = [
	("small", sizes::SMALL),
	("cathedral", sizes::CATHEDRAL),
	("town", sizes::TOWN),
	("max", sizes::MAX),
];

fn piece_size(slots: usize) -> PieceSize {
	PieceSize::from_slots(slots).unwrap_or_default()
}

/// Benchmark parsing bytes into pieces
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("min_parse");

	for (name, (frames, slots, repeats)) in CASES {
		let data = generate_min_data(frames, slots, repeats);
		let size = piece_size(slots);

		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_bytes", name), &data, |b, data| {
			b.iter(|| {
				let result = MinFile::from_bytes(black_box(data), size);
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark reducing parsed pieces into a frame-type table
fn bench_reduce(c: &mut Criterion) {
	let mut group = c.benchmark_group("min_reduce");

	for (name, (frames, slots, repeats)) in CASES {
		let data = generate_min_data(frames, slots, repeats);
		let min = match MinFile::from_bytes(&data, piece_size(slots)) {
			Ok(min) => min,
			Err(err) => {
				eprintln!("Warning: could not parse generated data for {name}: {err}");
				continue;
			}
		};

		group.throughput(Throughput::Elements(min.blocks().count() as u64));
		group.bench_with_input(BenchmarkId::new("reduce", name), &min, |b, min| {
			b.iter(|| {
				let result = FrameTypeMapping::reduce(name, black_box(min.pieces()));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark the full path from bytes to table
fn bench_end_to_end(c: &mut Criterion) {
	let (frames, slots, repeats) = sizes::TOWN;
	let data = generate_min_data(frames, slots, repeats);
	let size = piece_size(slots);

	c.bench_function("min_to_mapping_town", |b| {
		b.iter(|| {
			let min = MinFile::from_bytes(black_box(&data), size).ok()?;
			FrameTypeMapping::reduce("town", min.pieces()).ok()
		});
	});
}

criterion_group!(benches, bench_parse, bench_reduce, bench_end_to_end);
criterion_main!(benches);
