use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use rgbd_frame::{ColorFrame, CompositeFrame, FrameSize};
use rgbd_fusion::{align_depth_to_color, ColorPoint, CoordinateTable};

// Kinect v2 stream geometry
const COLOR_SIZE: FrameSize = FrameSize {
    width: 1920,
    height: 1080,
};

fn random_table(depth_size: FrameSize, color_size: FrameSize) -> CoordinateTable {
    let mut rng = rand::rng();
    CoordinateTable::new(
        (0..depth_size.num_pixels())
            .map(|_| {
                // ~10% of depth pixels are unmappable on real hardware
                if rng.random_ratio(1, 10) {
                    ColorPoint::UNMAPPED
                } else {
                    ColorPoint::new(
                        rng.random_range(0.0..color_size.width as f32),
                        rng.random_range(0.0..color_size.height as f32),
                    )
                }
            })
            .collect(),
    )
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("AlignDepthToColor");

    for (width, height) in [(512, 424), (1024, 848)].iter() {
        let depth_size = FrameSize {
            width: *width,
            height: *height,
        };
        group.throughput(criterion::Throughput::Elements(
            depth_size.num_pixels() as u64
        ));

        let parameter_string = format!("{}x{}", width, height);

        let color = ColorFrame::from_size_val(COLOR_SIZE, 128u8).unwrap();
        let map = random_table(depth_size, COLOR_SIZE);
        let output = CompositeFrame::from_size_val(depth_size, 0u8).unwrap();

        group.bench_with_input(
            BenchmarkId::new("rayon_rows", &parameter_string),
            &(&color, &output, &map),
            |b, i| {
                let (src, mut dst, map) = (i.0, i.1.clone(), i.2);
                b.iter(|| align_depth_to_color(black_box(src), black_box(&mut dst), black_box(map)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_align);
criterion_main!(benches);
