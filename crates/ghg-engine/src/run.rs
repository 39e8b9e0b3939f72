//! Run aggregation: many activities into one auditable result.

use ghg_core::{ErrorInfo, GhgError, RecordStore, RunDetails, RunResult, RunRow, SchemaVersion};

use crate::activity::compute_activity_kgco2e;
use crate::hash::hash_run_details;

/// Computes a calculation run over an ordered list of activity ids.
///
/// Runs are all-or-nothing: the first missing activity aborts with an
/// `activity-not-found` error and no partial result is ever returned.
/// Row order matches the input id order, and the total is the exact sum of
/// per-activity values with no rounding during accumulation.
pub fn compute_run(
    store: &dyn RecordStore,
    activity_ids: &[i64],
    run_type: &str,
) -> Result<RunResult, GhgError> {
    let mut total_kgco2e = 0.0;
    let mut rows = Vec::with_capacity(activity_ids.len());

    for id in activity_ids {
        let activity = store.activity(*id).ok_or_else(|| {
            GhgError::Store(
                ErrorInfo::new("activity-not-found", format!("activity {id} not found"))
                    .with_context("activity_id", id.to_string()),
            )
        })?;
        let (kgco2e, trace) = compute_activity_kgco2e(store, &activity)?;
        total_kgco2e += kgco2e;
        rows.push(RunRow {
            activity_id: activity.id,
            activity_name: activity.name.clone(),
            ef_key: activity.ef_key.clone(),
            inputs: activity.inputs.clone(),
            kgco2e,
            trace,
        });
    }

    let details = RunDetails { rows };
    let run_hash = hash_run_details(run_type, &details)?;

    Ok(RunResult {
        schema_version: SchemaVersion::default(),
        run_type: run_type.to_string(),
        total_kgco2e,
        total_tco2e: total_kgco2e / 1000.0,
        details,
        run_hash,
    })
}
