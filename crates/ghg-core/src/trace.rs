//! Audit trace and run report payloads.
//!
//! Traces are append-only: the engine constructs them once per calculation
//! and never mutates them afterwards. The caller owns persisting them as
//! part of a calculation-run record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::provenance::SchemaVersion;

/// Enumerates the quantity derivation strategies in their priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationMethod {
    /// Quantity computed by evaluating the factor's formula expression.
    Formula,
    /// Quantity read from the factor's designated input field.
    QuantityField,
    /// Quantity read from the first required input field.
    FirstRequired,
    /// Quantity read from the conventional `"amount"` input field.
    FallbackAmount,
}

/// Record of how a physical quantity was derived from activity inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum QuantityTrace {
    /// Formula strategy record.
    Formula {
        /// The evaluated expression text.
        expression: String,
        /// Name of the produced quantity.
        output: String,
        /// Unit of the produced quantity, when declared.
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        /// The resolved quantity.
        quantity: f64,
    },
    /// Quantity-field strategy record.
    QuantityField {
        /// The input field that supplied the quantity.
        field: String,
        /// The resolved quantity.
        quantity: f64,
    },
    /// First-required strategy record.
    FirstRequired {
        /// The input field that supplied the quantity.
        field: String,
        /// The resolved quantity.
        quantity: f64,
    },
    /// Fallback-amount strategy record.
    FallbackAmount {
        /// The input field that supplied the quantity (always `"amount"`).
        field: String,
        /// The resolved quantity.
        quantity: f64,
    },
}

impl QuantityTrace {
    /// Returns which derivation strategy produced this record.
    pub fn method(&self) -> DerivationMethod {
        match self {
            QuantityTrace::Formula { .. } => DerivationMethod::Formula,
            QuantityTrace::QuantityField { .. } => DerivationMethod::QuantityField,
            QuantityTrace::FirstRequired { .. } => DerivationMethod::FirstRequired,
            QuantityTrace::FallbackAmount { .. } => DerivationMethod::FallbackAmount,
        }
    }

    /// Returns the resolved quantity.
    pub fn quantity(&self) -> f64 {
        match self {
            QuantityTrace::Formula { quantity, .. }
            | QuantityTrace::QuantityField { quantity, .. }
            | QuantityTrace::FirstRequired { quantity, .. }
            | QuantityTrace::FallbackAmount { quantity, .. } => *quantity,
        }
    }
}

/// How the resolved quantity was converted into CO2e mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMethod {
    /// Multiplication by the factor's direct per-unit value.
    DirectValue,
    /// Multiplication by the GWP-weighted gas-breakdown sum.
    GasBreakdown,
}

/// Full per-activity computation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTrace {
    /// Conversion method applied to the resolved quantity.
    pub method: ConversionMethod,
    /// The resolved physical quantity.
    pub quantity: f64,
    /// The factor's direct per-unit value, for the direct-value method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ef_value: Option<f64>,
    /// Computed per-unit CO2e, for the gas-breakdown method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit_co2e: Option<f64>,
    /// Record of the quantity derivation step.
    pub quantity_trace: QuantityTrace,
    /// Key of the emission factor that drove the conversion.
    pub ef_key: String,
    /// Emission factor metadata, carried verbatim for audit.
    pub meta: Value,
}

/// One aggregated activity inside a run report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRow {
    /// Identifier of the computed activity.
    pub activity_id: i64,
    /// Activity display name.
    pub activity_name: String,
    /// Emission factor key the activity references.
    pub ef_key: String,
    /// The activity's raw inputs, kept for audit reproducibility.
    pub inputs: BTreeMap<String, Value>,
    /// Computed CO2e mass in kilograms.
    pub kgco2e: f64,
    /// Full per-activity computation record.
    pub trace: ActivityTrace,
}

/// Ordered per-activity detail rows of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RunDetails {
    /// One row per input activity id, in input order.
    pub rows: Vec<RunRow>,
}

/// Aggregated result of one calculation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Schema version of this payload.
    pub schema_version: SchemaVersion,
    /// Caller-supplied run classification (e.g. organizational footprint).
    pub run_type: String,
    /// Exact sum of per-activity kgCO2e values.
    pub total_kgco2e: f64,
    /// `total_kgco2e / 1000.0`.
    pub total_tco2e: f64,
    /// Ordered per-activity details.
    pub details: RunDetails,
    /// Canonical content hash over the run type and details.
    pub run_hash: String,
}
