use criterion::{criterion_group, criterion_main, Criterion};
use ghg_core::{Activity, ActivityIdFieldsSpec, EmissionFactor, GasBreakdown, InMemoryStore};
use ghg_engine::compute_run;
use serde_json::json;

fn build_store(activities: i64) -> InMemoryStore {
    let mut store = InMemoryStore::new();

    let mut diesel = EmissionFactor::new("diesel_litres");
    diesel.value = Some(2.68);
    diesel.activity_id_fields = ActivityIdFieldsSpec {
        required: vec!["litres".into()],
        formula: None,
        quantity_field: None,
    };
    store.insert_emission_factor(diesel);

    let mut electricity = EmissionFactor::new("electricity_grid");
    electricity.gas_breakdown = Some(GasBreakdown {
        gases: [("CO2".to_string(), 0.45), ("CH4".to_string(), 0.0001)]
            .into_iter()
            .collect(),
    });
    electricity.activity_id_fields = ActivityIdFieldsSpec {
        required: vec!["kwh".into()],
        formula: None,
        quantity_field: None,
    };
    store.insert_emission_factor(electricity);

    for id in 0..activities {
        let (ef_key, inputs) = if id % 2 == 0 {
            ("diesel_litres", json!({"litres": 100 + id}))
        } else {
            ("electricity_grid", json!({"kwh": 1000 + id}))
        };
        let activity: Activity = serde_json::from_value(json!({
            "id": id,
            "name": format!("activity {id}"),
            "ef_key": ef_key,
            "inputs": inputs,
        }))
        .expect("deserialize");
        store.insert_activity(activity);
    }

    store
}

fn bench_compute_run(c: &mut Criterion) {
    let store = build_store(200);
    let ids: Vec<i64> = (0..200).collect();
    c.bench_function("compute_run_200", |b| {
        b.iter(|| {
            let _ = compute_run(&store, &ids, "CFO").unwrap();
        });
    });
}

criterion_group!(benches, bench_compute_run);
criterion_main!(benches);
