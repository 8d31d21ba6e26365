use corner_connector_editor::{
    compute_connector, flatten_arc, plan_to_polyline, ConnectorRequest, RadiusBalancing,
};
use criterion::{criterion_group, criterion_main, Criterion};
use glam::DVec2;
use std::hint::black_box;

fn demo_request(balancing: RadiusBalancing) -> ConnectorRequest {
    ConnectorRequest {
        start: DVec2::new(350.0, 100.0),
        corner: DVec2::new(400.0, 300.0),
        end: DVec2::new(550.0, 100.0),
        radius: 50.0,
        line_width: 4.0,
        color: [0.0, 0.0, 0.0, 1.0],
        balancing,
    }
}

fn bench_compute_connector(c: &mut Criterion) {
    let fixed = demo_request(RadiusBalancing::Fixed);
    let balanced = demo_request(RadiusBalancing::AngleBalanced);

    c.bench_function("compute_connector_fixed", |b| {
        b.iter(|| compute_connector(black_box(&fixed)))
    });
    c.bench_function("compute_connector_balanced", |b| {
        b.iter(|| compute_connector(black_box(&balanced)))
    });
}

fn bench_flatten_arc(c: &mut Criterion) {
    let corner = DVec2::new(400.0, 300.0);
    let tangent1 = corner + (DVec2::new(350.0, 100.0) - corner).normalize() * 50.0;
    let tangent2 = corner + (DVec2::new(550.0, 100.0) - corner).normalize() * 50.0;

    c.bench_function("flatten_arc_2px", |b| {
        b.iter(|| {
            flatten_arc(
                black_box(tangent1),
                black_box(corner),
                black_box(tangent2),
                50.0,
                2.0,
            )
        })
    });
}

fn bench_frame_pipeline(c: &mut Criterion) {
    let request = demo_request(RadiusBalancing::AngleBalanced);

    c.bench_function("plan_and_polyline_per_frame", |b| {
        b.iter(|| {
            let plan = compute_connector(black_box(&request)).expect("gültige Geometrie");
            plan_to_polyline(&plan, 2.0)
        })
    });
}

criterion_group!(
    benches,
    bench_compute_connector,
    bench_flatten_arc,
    bench_frame_pipeline
);
criterion_main!(benches);
