//! Benchmarks the Delta Scheduler across a range of frame-to-frame diff sizes.

use cdg_benches::{benchmark_palette, dirty_fractions, noisy_frame, solid_frame};
use cdg_types::frame::GridExtent;
use cdg_types::scheduler::{DEFAULT_PIXEL_THRESHOLD, ShadowCanvas, schedule_frame};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;

fn bench_schedule_frame(c: &mut Criterion) {
	let palette = benchmark_palette();
	let mut group = c.benchmark_group("schedule_frame");

	let cases = [("sparse", dirty_fractions::SPARSE), ("moderate", dirty_fractions::MODERATE), ("full", dirty_fractions::FULL)];

	for (name, fraction) in cases {
		let mut rng = SmallRng::seed_from_u64(42);
		let frame = noisy_frame(&mut rng, 0, fraction);

		group.bench_with_input(BenchmarkId::new("diff_and_emit", name), &frame, |b, frame| {
			b.iter(|| {
				let mut shadow = ShadowCanvas::new();
				let packets = schedule_frame(&mut shadow, black_box(frame), &palette, 20, DEFAULT_PIXEL_THRESHOLD, GridExtent::Full).unwrap();
				black_box(packets)
			});
		});
	}

	group.finish();
}

fn bench_identical_frame_short_circuits(c: &mut Criterion) {
	let palette = benchmark_palette();
	let frame = solid_frame(0);

	c.bench_function("schedule_frame/identical", |b| {
		b.iter(|| {
			let mut shadow = ShadowCanvas::new();
			let packets = schedule_frame(&mut shadow, black_box(&frame), &palette, 20, DEFAULT_PIXEL_THRESHOLD, GridExtent::Full).unwrap();
			black_box(packets)
		});
	});
}

criterion_group!(benches, bench_schedule_frame, bench_identical_frame_short_circuits);
criterion_main!(benches);
