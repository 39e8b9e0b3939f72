//! Per-activity calculation: one activity plus its matched factor into
//! kgCO2e and a full trace.

use ghg_core::{
    Activity, ActivityTrace, ConversionMethod, ErrorInfo, GhgError, RecordStore,
};

use crate::gases::per_unit_co2e;
use crate::quantity::resolve_quantity;

/// Computes the kgCO2e emitted by one activity.
///
/// Looks up the activity's emission factor, derives the physical quantity,
/// then converts via the factor's direct value or its GWP-weighted gas
/// breakdown. The returned trace records every step for downstream audit.
pub fn compute_activity_kgco2e(
    store: &dyn RecordStore,
    activity: &Activity,
) -> Result<(f64, ActivityTrace), GhgError> {
    let ef = store.emission_factor(&activity.ef_key).ok_or_else(|| {
        GhgError::Store(
            ErrorInfo::new(
                "ef-not-found",
                format!("emission factor '{}' not found", activity.ef_key),
            )
            .with_context("ef_key", activity.ef_key.clone())
            .with_context("activity_id", activity.id.to_string()),
        )
    })?;

    let (quantity, quantity_trace) =
        resolve_quantity(&ef.activity_id_fields, &activity.inputs, &ef.key)
            .map_err(|err| err.with_context("activity_id", activity.id.to_string()))?;

    if ef.value.is_none() && ef.gas_breakdown.is_none() {
        return Err(GhgError::Factor(
            ErrorInfo::new(
                "missing-conversion-basis",
                format!("EF '{}' has neither a direct value nor a gas breakdown", ef.key),
            )
            .with_context("ef_key", ef.key.clone())
            .with_context("activity_id", activity.id.to_string())
            .with_hint("set either value or gas_breakdown on the emission factor"),
        ));
    }

    if let Some(value) = ef.value {
        let kgco2e = quantity * value;
        let trace = ActivityTrace {
            method: ConversionMethod::DirectValue,
            quantity,
            ef_value: Some(value),
            per_unit_co2e: None,
            quantity_trace,
            ef_key: ef.key.clone(),
            meta: ef.meta.clone(),
        };
        return Ok((kgco2e, trace));
    }

    let per_unit = per_unit_co2e(ef.gas_breakdown.as_ref(), &ef.gwp_version)
        .map_err(|err| err.with_context("activity_id", activity.id.to_string()))?;
    let kgco2e = quantity * per_unit;
    let trace = ActivityTrace {
        method: ConversionMethod::GasBreakdown,
        quantity,
        ef_value: None,
        per_unit_co2e: Some(per_unit),
        quantity_trace,
        ef_key: ef.key.clone(),
        meta: ef.meta.clone(),
    };
    Ok((kgco2e, trace))
}
