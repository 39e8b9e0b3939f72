//! Quantity derivation: turning raw activity inputs into one number.

use std::collections::BTreeMap;

use ghg_core::{
    numeric_inputs, numeric_value, ActivityIdFieldsSpec, ErrorInfo, GhgError, QuantityTrace,
};
use serde_json::Value;

fn missing_input(field: &str, ef_key: &str) -> GhgError {
    GhgError::Input(
        ErrorInfo::new(
            "missing-input",
            format!("missing required input '{field}' for EF '{ef_key}'"),
        )
        .with_context("field", field)
        .with_context("ef_key", ef_key),
    )
}

fn non_numeric_input(field: &str, ef_key: &str) -> GhgError {
    GhgError::Input(
        ErrorInfo::new(
            "non-numeric-input",
            format!("input '{field}' is not numeric"),
        )
        .with_context("field", field)
        .with_context("ef_key", ef_key),
    )
}

fn field_quantity(
    field: &str,
    inputs: &BTreeMap<String, Value>,
    ef_key: &str,
) -> Result<f64, GhgError> {
    let raw = inputs
        .get(field)
        .ok_or_else(|| missing_input(field, ef_key))?;
    numeric_value(raw).ok_or_else(|| non_numeric_input(field, ef_key))
}

/// Derives the physical quantity for one activity.
///
/// Strategies are tried in strict priority order: formula, quantity field,
/// first required field, then the conventional `"amount"` input. Before any
/// strategy runs, every name in `spec.required` must be present in
/// `inputs`; a missing field fails immediately even when a later strategy
/// could proceed without it.
pub fn resolve_quantity(
    spec: &ActivityIdFieldsSpec,
    inputs: &BTreeMap<String, Value>,
    ef_key: &str,
) -> Result<(f64, QuantityTrace), GhgError> {
    for field in &spec.required {
        if !inputs.contains_key(field) {
            return Err(missing_input(field, ef_key));
        }
    }

    if let Some(formula) = &spec.formula {
        let vars = numeric_inputs(inputs);
        let quantity = ghg_formula::evaluate(&formula.expression, &vars)
            .map_err(|err| err.with_context("ef_key", ef_key))?;
        let output = formula
            .output
            .clone()
            .or_else(|| spec.quantity_field.clone())
            .unwrap_or_else(|| "quantity".to_string());
        return Ok((
            quantity,
            QuantityTrace::Formula {
                expression: formula.expression.clone(),
                output,
                unit: formula.unit.clone(),
                quantity,
            },
        ));
    }

    if let Some(field) = &spec.quantity_field {
        if inputs.contains_key(field) {
            let quantity = field_quantity(field, inputs, ef_key)?;
            return Ok((
                quantity,
                QuantityTrace::QuantityField {
                    field: field.clone(),
                    quantity,
                },
            ));
        }
    }

    if let Some(field) = spec.required.first() {
        let quantity = field_quantity(field, inputs, ef_key)?;
        return Ok((
            quantity,
            QuantityTrace::FirstRequired {
                field: field.clone(),
                quantity,
            },
        ));
    }

    if inputs.contains_key("amount") {
        let quantity = field_quantity("amount", inputs, ef_key)?;
        return Ok((
            quantity,
            QuantityTrace::FallbackAmount {
                field: "amount".to_string(),
                quantity,
            },
        ));
    }

    Err(GhgError::Input(
        ErrorInfo::new(
            "no-quantity-derivation",
            format!("no quantity derivation possible for EF '{ef_key}'"),
        )
        .with_context("ef_key", ef_key)
        .with_hint("set a formula, quantity_field or required list, or supply an 'amount' input"),
    ))
}
