use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lanedet::pipeline::{analyze_frame, PipelineConfig};
use lanedet::{hough, LaneSectors};

fn synthetic_frame(config: &PipelineConfig) -> Vec<u8> {
    let geom = &config.geometry;
    let mut bgr = vec![0u8; geom.pixel_count() * 3];
    for y in 0..geom.height {
        for x in 0..geom.width {
            // road-ish gradient with two bright diagonal bands
            let on_lane = x + y == geom.width || x.abs_diff(y + geom.width / 2) < 3;
            let shade = if on_lane { 230 } else { (x / 4 + y / 8) as u8 };
            let px = (y * geom.width + x) * 3;
            bgr[px] = shade;
            bgr[px + 1] = shade;
            bgr[px + 2] = shade;
        }
    }
    bgr
}

fn full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_frame");

    for (name, config) in [
        ("low_res", PipelineConfig::hardware()),
        ("high_res", PipelineConfig::high_res()),
    ] {
        let bgr = synthetic_frame(&config);
        group.throughput(Throughput::Elements(config.geometry.pixel_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &bgr, |b, bgr| {
            b.iter(|| analyze_frame(&config, bgr).unwrap())
        });
    }

    group.finish();
}

fn accumulator(c: &mut Criterion) {
    let config = PipelineConfig::hardware();
    let geom = config.geometry;
    let mut edges = vec![0u8; geom.pixel_count()];
    for (i, px) in edges.iter_mut().enumerate() {
        *px = u8::from(i % 53 == 0) * 255;
    }
    let mut bins = vec![0u16; geom.accumulator_len()];

    c.bench_function("hough_accumulate", |b| {
        b.iter(|| hough::accumulate(&geom, &LaneSectors::DEFAULT, &edges, &mut bins))
    });
}

criterion_group!(benches, full_frame, accumulator);
criterion_main!(benches);
