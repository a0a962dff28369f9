use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_api_utils::{generate_id, validate_fields};
use serde_json::{json, Map, Value};

fn mid_sized_inputs() -> (Value, Map<String, Value>) {
    let schema: Vec<Value> = (0..32).map(|i| json!({ "name": format!("field_{i}") })).collect();
    let collection = json!({ "schema": schema });

    let mut fields = Map::new();
    fields.insert("id".into(), json!("abc12"));
    for i in 0..24 {
        fields.insert(format!("field_{i}"), json!(i));
    }
    fields.insert("stray_a".into(), json!(true));
    fields.insert("stray_b".into(), json!(null));

    (collection, fields)
}

fn bench_validate_fields(c: &mut Criterion) {
    let (collection, fields) = mid_sized_inputs();
    c.bench_function("validate_fields/32-field schema", |b| {
        b.iter(|| validate_fields(black_box(Some(&collection)), black_box(&fields)))
    });
}

fn bench_generate_id(c: &mut Criterion) {
    c.bench_function("generate_id", |b| b.iter(|| black_box(generate_id())));
}

criterion_group!(benches, bench_validate_fields, bench_generate_id);
criterion_main!(benches);
