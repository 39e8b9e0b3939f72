//! Allow-listed merge of operator-supplied updates into an emission factor.
//!
//! Updates arrive at the boundary as free-form payloads. Rather than
//! assigning arbitrary keys onto the record, the patch enumerates every
//! field that may change; anything else cannot enter a persisted record.
//! The `key` identifies the record and is never patchable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{ActivityIdFieldsSpec, EmissionFactor, GasBreakdown};

/// Field-by-field update for an [`EmissionFactor`].
///
/// Absent fields leave the record unchanged. `value` and `gas_breakdown`
/// are doubly optional so a patch can clear them: an emission factor
/// switching to a gas breakdown must drop its direct value, and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EmissionFactorPatch {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New unit label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// New direct per-unit value; `Some(None)` clears it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Option<f64>>,
    /// New scope classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// New category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Replacement tag list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Replacement quantity derivation spec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id_fields: Option<ActivityIdFieldsSpec>,
    /// New gas breakdown; `Some(None)` clears it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_breakdown: Option<Option<GasBreakdown>>,
    /// New GWP table version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gwp_version: Option<String>,
    /// New methodology reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    /// New publisher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// New source document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    /// New validity start date (ISO-8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    /// New validity end date (ISO-8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
    /// New uncertainty magnitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty_value: Option<f64>,
    /// New uncertainty classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty_type: Option<String>,
    /// Replacement metadata payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl EmissionFactor {
    /// Merges a patch into this record, field by field.
    pub fn apply_patch(&mut self, patch: &EmissionFactorPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(unit) = &patch.unit {
            self.unit = unit.clone();
        }
        if let Some(value) = &patch.value {
            self.value = *value;
        }
        if let Some(scope) = &patch.scope {
            self.scope = scope.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }
        if let Some(spec) = &patch.activity_id_fields {
            self.activity_id_fields = spec.clone();
        }
        if let Some(breakdown) = &patch.gas_breakdown {
            self.gas_breakdown = breakdown.clone();
        }
        if let Some(version) = &patch.gwp_version {
            self.gwp_version = version.clone();
        }
        if let Some(methodology) = &patch.methodology {
            self.methodology = Some(methodology.clone());
        }
        if let Some(publisher) = &patch.publisher {
            self.publisher = Some(publisher.clone());
        }
        if let Some(title) = &patch.document_title {
            self.document_title = Some(title.clone());
        }
        if let Some(from) = &patch.valid_from {
            self.valid_from = Some(from.clone());
        }
        if let Some(to) = &patch.valid_to {
            self.valid_to = Some(to.clone());
        }
        if let Some(value) = patch.uncertainty_value {
            self.uncertainty_value = Some(value);
        }
        if let Some(kind) = &patch.uncertainty_type {
            self.uncertainty_type = Some(kind.clone());
        }
        if let Some(meta) = &patch.meta {
            self.meta = meta.clone();
        }
    }
}
