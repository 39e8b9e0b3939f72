//! GWP-weighted conversion of a multi-gas composition into per-unit CO2e.

use ghg_core::{GasBreakdown, GhgError};

use crate::gwp;

/// Computes the per-unit CO2e factor of a gas breakdown under the given
/// GWP version.
///
/// Gases absent from the resolved table are skipped: GWP tables do not
/// cover every trace gas, so an unknown symbol contributes nothing rather
/// than failing. An absent or empty breakdown yields 0.0. An unknown GWP
/// version is always an error.
pub fn per_unit_co2e(
    breakdown: Option<&GasBreakdown>,
    gwp_version: &str,
) -> Result<f64, GhgError> {
    let table = gwp::resolve(gwp_version)?;
    let Some(breakdown) = breakdown else {
        return Ok(0.0);
    };
    let mut per_unit = 0.0;
    for (gas, quantity) in &breakdown.gases {
        if let Some(factor) = table.factor(gas) {
            per_unit += quantity * factor;
        }
    }
    Ok(per_unit)
}
