use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jsondom::{JsonParser, Tolerance};

static SCENE: &str = r#"{
  "name": "scene",
  "width": 1920, "height": 1080,
  "spp": 64, "branch": "stable",
  "camera": {"fov": 70.0, "position": [12.5, 64.0, -3.25], "dof": null},
  "materials": [
    {"name": "glass", "ior": 1.52, "opacity": 0.1},
    {"name": "water", "ior": 1.33, "opacity": 0.25},
    {"name": "metal", "ior": 2.95, "specular": true}
  ],
  "entities": [
    {"kind": "sign", "text": ["line A", "line \\ two"], "pos": [0, 64, 0]},
    {"kind": "lectern", "book": {"pages": ["once", "upon", "a", "time"]}}
  ]
}"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(SCENE.len() as u64));
    for (tolerance, name) in [(Tolerance::Lenient, "lenient"), (Tolerance::Strict, "strict")] {
        group.bench_with_input(BenchmarkId::new("scene", name), &tolerance, |b, &tolerance| {
            b.iter(|| {
                JsonParser::with_tolerance(SCENE.as_bytes(), tolerance)
                    .parse()
                    .expect("valid input")
            });
        });
    }
    group.finish();
}

fn bench_print(c: &mut Criterion) {
    let value = jsondom::parse_str(SCENE).expect("valid input");
    let mut group = c.benchmark_group("print");
    group.bench_function("compact", |b| b.iter(|| value.to_compact_string()));
    group.bench_function("pretty", |b| b.iter(|| value.to_pretty_string("  ")));
    group.finish();
}

criterion_group!(benches, bench_parse, bench_print);
criterion_main!(benches);
