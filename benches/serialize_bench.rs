use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pachube::pachube_eeml::{units, Data, DataPoints, Eeml, Element, Environment, Location};

fn document() -> Eeml {
    let mut env = Environment::builder()
        .title("Bench feed")
        .status("live")
        .website("http://example.com/")
        .build()
        .unwrap();
    env.set_location(
        Location::builder("physical")
            .name("Roof")
            .lat(51.5)
            .lon(-0.12)
            .exposure("outdoor")
            .build()
            .unwrap(),
    );

    let mut doc = Eeml::new(env);
    for id in 0..16 {
        doc.update_data(
            Data::builder(id)
                .value(id as f64 * 1.5)
                .tag("sensor")
                .unit(units::celsius())
                .build()
                .unwrap(),
        )
        .unwrap();
        doc.update_data(DataPoints::new(id, (0..32).map(|v| (v,))).unwrap())
            .unwrap();
    }
    doc
}

fn serialize_benchmark(c: &mut Criterion) {
    let doc = document();

    c.bench_function("eeml_compact", |b| {
        b.iter(|| black_box(&doc).to_xml(false).unwrap())
    });

    c.bench_function("eeml_pretty", |b| {
        b.iter(|| black_box(&doc).to_xml(true).unwrap())
    });

    let markup = doc.to_xml(false).unwrap();
    c.bench_function("eeml_parse", |b| {
        b.iter(|| Element::from_xml(black_box(&markup)).unwrap())
    });
}

criterion_group!(benches, serialize_benchmark);
criterion_main!(benches);
