use std::hint::black_box;
use std::time::Instant;

use worldmap_common::WorldPosition;
use worldmap_kernel::{WorldGeometry, region_id};
use worldmap_stream::RegionIndex;

fn make_positions(count: usize, spacing: i32) -> Vec<(usize, WorldPosition)> {
    let g = WorldGeometry::OSRS;
    let side = (count as f64).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let x = g.min_x + (i % side) as i32 * spacing;
            let y = g.min_y + (i / side) as i32 * spacing;
            (i, WorldPosition::new(x, y, (i % 4) as i32))
        })
        .collect()
}

fn bench_rebuild(count: usize, iterations: usize) {
    let positions = make_positions(count, 4);
    let mut index = RegionIndex::new();

    let start = Instant::now();
    for _ in 0..iterations {
        index.rebuild(black_box(positions.iter().copied()));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  rebuild ({count} positions, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn bench_in_radius(count: usize, radius: i32, iterations: usize) {
    let mut index = RegionIndex::new();
    index.rebuild(make_positions(count, 4));

    let g = WorldGeometry::OSRS;
    let center = region_id(g.min_x, g.min_y);
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(index.in_radius(black_box(center), black_box(radius)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  radius query ({count} positions, r={radius}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn bench_transform(iterations: usize) {
    let g = WorldGeometry::OSRS;
    let start = Instant::now();
    for i in 0..iterations {
        let x = f64::from(g.min_x + (i % 3000) as i32);
        let p = g.world_to_projected_centered(black_box(x), black_box(3218.0));
        let _ = black_box(g.projected_to_world(p, 0));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  transform round trip ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Region Index Benchmarks ===\n");

    println!("Index rebuild:");
    bench_rebuild(100, 1000);
    bench_rebuild(1000, 100);
    bench_rebuild(10000, 10);

    println!("\nRadius query:");
    bench_in_radius(1000, 1, 10000);
    bench_in_radius(1000, 3, 10000);
    bench_in_radius(1000, 5, 1000);

    println!("\nTransform:");
    bench_transform(1_000_000);

    println!("\n=== Done ===");
}
