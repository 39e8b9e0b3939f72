use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_gwp_version() -> String {
    "AR5".to_string()
}

fn default_scope() -> String {
    "Scope3".to_string()
}

/// Formula sub-spec describing how a quantity is derived from inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaSpec {
    /// Arithmetic expression over the activity's input field names.
    pub expression: String,
    /// Name of the produced quantity. Defaults to the spec's
    /// `quantity_field`, then `"quantity"`, when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Unit of the produced quantity, recorded in the trace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Describes how an emission factor derives a physical quantity from an
/// activity's raw inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ActivityIdFieldsSpec {
    /// Input field names that must be present before any derivation runs.
    #[serde(default)]
    pub required: Vec<String>,
    /// Optional formula strategy; takes priority over all field strategies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<FormulaSpec>,
    /// Optional single input field used directly as the quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_field: Option<String>,
}

/// Multi-gas composition of an emission factor, per unit of quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GasBreakdown {
    /// Gas symbol (e.g. "CO2", "CH4") to emitted quantity per unit.
    #[serde(default)]
    pub gases: BTreeMap<String, f64>,
}

/// Reference coefficient converting a physical quantity into CO2e mass.
///
/// The engine treats emission factors as immutable snapshots for the
/// duration of one calculation; ownership and mutation belong to the
/// external persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    /// Unique key identifying the factor.
    pub key: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Unit of the quantity this factor multiplies (e.g. "litre", "kWh").
    #[serde(default)]
    pub unit: String,
    /// Direct kgCO2e-per-unit value. Mutually exclusive in practice with
    /// [`gas_breakdown`](Self::gas_breakdown) as the conversion driver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// GHG Protocol scope classification.
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Free-form category label.
    #[serde(default)]
    pub category: String,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Quantity derivation specification.
    #[serde(default)]
    pub activity_id_fields: ActivityIdFieldsSpec,
    /// Optional multi-gas composition used when no direct value is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_breakdown: Option<GasBreakdown>,
    /// GWP assessment-report version selecting the equivalence table.
    #[serde(default = "default_gwp_version")]
    pub gwp_version: String,
    /// Methodology reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    /// Publishing body of the factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Source document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    /// ISO-8601 date from which the factor is valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    /// ISO-8601 date until which the factor is valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
    /// Uncertainty magnitude, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty_value: Option<f64>,
    /// Uncertainty classification (e.g. "normal", "lognormal").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty_type: Option<String>,
    /// Free-form metadata carried verbatim into calculation traces.
    #[serde(default)]
    pub meta: Value,
}

impl EmissionFactor {
    /// Creates a minimal factor with the given key; every other field takes
    /// its default.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: String::new(),
            unit: String::new(),
            value: None,
            scope: default_scope(),
            category: String::new(),
            tags: Vec::new(),
            activity_id_fields: ActivityIdFieldsSpec::default(),
            gas_breakdown: None,
            gwp_version: default_gwp_version(),
            methodology: None,
            publisher: None,
            document_title: None,
            valid_from: None,
            valid_to: None,
            uncertainty_value: None,
            uncertainty_type: None,
            meta: Value::Null,
        }
    }
}

/// A recorded operator activity referencing an emission factor by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Integer identifier assigned by the persistence collaborator.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Key of the emission factor matched to this activity.
    pub ef_key: String,
    /// Raw named input values; units are implied by the emission factor.
    /// Values may be JSON numbers or numeric strings.
    #[serde(default)]
    pub inputs: BTreeMap<String, Value>,
    /// GHG Protocol scope classification.
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Reporting period label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Operator note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Attempts to read a raw input value as a finite number.
///
/// Accepts JSON numbers and strings that parse as `f64`. Returns `None` for
/// everything else, including non-finite parses.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(num) => num.as_f64(),
        Value::String(raw) => {
            let parsed = raw.trim().parse::<f64>().ok()?;
            parsed.is_finite().then_some(parsed)
        }
        _ => None,
    }
}

/// Collects the numeric view of an input mapping, skipping entries that do
/// not coerce. This is the variable binding handed to formula evaluation.
pub fn numeric_inputs(inputs: &BTreeMap<String, Value>) -> BTreeMap<String, f64> {
    inputs
        .iter()
        .filter_map(|(name, value)| numeric_value(value).map(|num| (name.clone(), num)))
        .collect()
}
