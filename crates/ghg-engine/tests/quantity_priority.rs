use std::collections::BTreeMap;

use ghg_core::{ActivityIdFieldsSpec, DerivationMethod, FormulaSpec, QuantityTrace};
use ghg_engine::resolve_quantity;
use serde_json::{json, Value};

fn inputs(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

fn formula_spec(expression: &str) -> FormulaSpec {
    FormulaSpec {
        expression: expression.to_string(),
        output: Some("mass_kg".to_string()),
        unit: Some("kg".to_string()),
    }
}

#[test]
fn formula_strategy_wins_over_quantity_field() {
    let spec = ActivityIdFieldsSpec {
        required: vec!["volume".into(), "density".into()],
        formula: Some(formula_spec("volume*density")),
        quantity_field: Some("volume".into()),
    };
    let inputs = inputs(&[("volume", json!(10)), ("density", json!(0.85))]);
    let (quantity, trace) = resolve_quantity(&spec, &inputs, "fuel_mass").unwrap();
    assert_eq!(quantity, 8.5);
    assert_eq!(trace.method(), DerivationMethod::Formula);
    match trace {
        QuantityTrace::Formula {
            expression,
            output,
            unit,
            quantity,
        } => {
            assert_eq!(expression, "volume*density");
            assert_eq!(output, "mass_kg");
            assert_eq!(unit.as_deref(), Some("kg"));
            assert_eq!(quantity, 8.5);
        }
        other => panic!("unexpected trace: {other:?}"),
    }
}

#[test]
fn formula_output_defaults_to_quantity_field_then_quantity() {
    let spec = ActivityIdFieldsSpec {
        required: vec![],
        formula: Some(FormulaSpec {
            expression: "volume*density".into(),
            output: None,
            unit: None,
        }),
        quantity_field: Some("volume".into()),
    };
    let inputs = inputs(&[("volume", json!(2)), ("density", json!(3))]);
    let (_, trace) = resolve_quantity(&spec, &inputs, "fuel_mass").unwrap();
    assert!(matches!(
        &trace,
        QuantityTrace::Formula { output, .. } if output == "volume"
    ));

    let spec = ActivityIdFieldsSpec {
        required: vec![],
        formula: Some(FormulaSpec {
            expression: "volume*density".into(),
            output: None,
            unit: None,
        }),
        quantity_field: None,
    };
    let (_, trace) = resolve_quantity(&spec, &inputs, "fuel_mass").unwrap();
    assert!(matches!(
        &trace,
        QuantityTrace::Formula { output, .. } if output == "quantity"
    ));
}

#[test]
fn missing_required_fails_before_any_strategy() {
    // quantity_field alone could derive a value, but the required check
    // comes first and must name exactly the missing field.
    let spec = ActivityIdFieldsSpec {
        required: vec!["litres".into(), "odometer_km".into()],
        formula: None,
        quantity_field: Some("litres".into()),
    };
    let inputs = inputs(&[("litres", json!(100))]);
    let err = resolve_quantity(&spec, &inputs, "diesel_litres").unwrap_err();
    assert_eq!(err.info().code, "missing-input");
    assert_eq!(
        err.info().context.get("field").map(String::as_str),
        Some("odometer_km")
    );
    assert_eq!(
        err.info().context.get("ef_key").map(String::as_str),
        Some("diesel_litres")
    );
}

#[test]
fn quantity_field_strategy() {
    let spec = ActivityIdFieldsSpec {
        required: vec![],
        formula: None,
        quantity_field: Some("kwh".into()),
    };
    let inputs = inputs(&[("kwh", json!(1000)), ("site", json!("HQ"))]);
    let (quantity, trace) = resolve_quantity(&spec, &inputs, "electricity_grid").unwrap();
    assert_eq!(quantity, 1000.0);
    assert_eq!(trace.method(), DerivationMethod::QuantityField);
}

#[test]
fn absent_quantity_field_falls_through_to_first_required() {
    let spec = ActivityIdFieldsSpec {
        required: vec!["litres".into()],
        formula: None,
        quantity_field: Some("kwh".into()),
    };
    let inputs = inputs(&[("litres", json!("100"))]);
    let (quantity, trace) = resolve_quantity(&spec, &inputs, "diesel_litres").unwrap();
    assert_eq!(quantity, 100.0);
    assert_eq!(trace.method(), DerivationMethod::FirstRequired);
    assert!(matches!(
        &trace,
        QuantityTrace::FirstRequired { field, .. } if field == "litres"
    ));
}

#[test]
fn fallback_amount_strategy() {
    let spec = ActivityIdFieldsSpec::default();
    let inputs = inputs(&[("amount", json!(12.5))]);
    let (quantity, trace) = resolve_quantity(&spec, &inputs, "generic").unwrap();
    assert_eq!(quantity, 12.5);
    assert_eq!(trace.method(), DerivationMethod::FallbackAmount);
}

#[test]
fn no_strategy_is_an_error() {
    let spec = ActivityIdFieldsSpec::default();
    let inputs = inputs(&[("site", json!("HQ"))]);
    let err = resolve_quantity(&spec, &inputs, "generic").unwrap_err();
    assert_eq!(err.info().code, "no-quantity-derivation");
}

#[test]
fn non_numeric_input_is_an_error() {
    let spec = ActivityIdFieldsSpec {
        required: vec!["litres".into()],
        formula: None,
        quantity_field: None,
    };
    let inputs = inputs(&[("litres", json!("a lot"))]);
    let err = resolve_quantity(&spec, &inputs, "diesel_litres").unwrap_err();
    assert_eq!(err.info().code, "non-numeric-input");
    assert_eq!(
        err.info().context.get("field").map(String::as_str),
        Some("litres")
    );
}

#[test]
fn formula_over_missing_numeric_binding_is_an_error() {
    // "density" is present but not numeric, so the formula cannot bind it.
    let spec = ActivityIdFieldsSpec {
        required: vec!["volume".into(), "density".into()],
        formula: Some(formula_spec("volume*density")),
        quantity_field: None,
    };
    let inputs = inputs(&[("volume", json!(10)), ("density", json!("unknown"))]);
    let err = resolve_quantity(&spec, &inputs, "fuel_mass").unwrap_err();
    assert_eq!(err.info().code, "unknown-variable");
    assert_eq!(
        err.info().context.get("ef_key").map(String::as_str),
        Some("fuel_mass")
    );
}

#[test]
fn numeric_strings_coerce() {
    let spec = ActivityIdFieldsSpec {
        required: vec![],
        formula: None,
        quantity_field: Some("kwh".into()),
    };
    let inputs = inputs(&[("kwh", json!(" 42.5 "))]);
    let (quantity, _) = resolve_quantity(&spec, &inputs, "electricity_grid").unwrap();
    assert_eq!(quantity, 42.5);
}
