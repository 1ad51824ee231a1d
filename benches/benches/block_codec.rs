//! Benchmarks Block Codec packing and two-color squashing.

use cdg_benches::benchmark_palette;
use cdg_types::block::{BLOCK_HEIGHT, BLOCK_WIDTH, Block, encode_block};
use cdg_types::frame::squash_to_two_colors;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_encode_block(c: &mut Criterion) {
	let mut pixels = [0u8; BLOCK_WIDTH * BLOCK_HEIGHT];
	for (i, p) in pixels.iter_mut().enumerate() {
		*p = (i % 2) as u8;
	}
	let block = Block::new(pixels);

	c.bench_function("encode_block/two_color", |b| {
		b.iter(|| encode_block(black_box(&block), 1, 1).unwrap());
	});
}

fn bench_squash_to_two_colors(c: &mut Criterion) {
	let palette = benchmark_palette();
	let mut pixels = [0u8; BLOCK_WIDTH * BLOCK_HEIGHT];
	for (i, p) in pixels.iter_mut().enumerate() {
		*p = (i % 16) as u8;
	}
	let block = Block::new(pixels);

	c.bench_function("squash_to_two_colors/sixteen_colors", |b| {
		b.iter(|| squash_to_two_colors(black_box(&block), &palette));
	});
}

criterion_group!(benches, bench_encode_block, bench_squash_to_two_colors);
criterion_main!(benches);
