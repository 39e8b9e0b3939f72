//! Versioned Global Warming Potential reference tables.
//!
//! One immutable table per IPCC assessment-report version, mapping gas
//! symbols to their 100-year CO2-equivalence multipliers. Unknown versions
//! are always an error: silently defaulting to an arbitrary table would
//! corrupt downstream audit trails.

use std::collections::BTreeMap;

use ghg_core::{ErrorInfo, GhgError};

const AR4: &[(&str, f64)] = &[
    ("CO2", 1.0),
    ("CH4", 25.0),
    ("N2O", 298.0),
    ("SF6", 22800.0),
];

const AR5: &[(&str, f64)] = &[
    ("CO2", 1.0),
    ("CH4", 28.0),
    ("N2O", 265.0),
    ("SF6", 23500.0),
];

const AR6: &[(&str, f64)] = &[
    ("CO2", 1.0),
    ("CH4", 27.9),
    ("N2O", 273.0),
    ("SF6", 25200.0),
];

/// Immutable gas-symbol to CO2-equivalence mapping for one GWP version.
#[derive(Debug, Clone, PartialEq)]
pub struct GwpTable {
    version: &'static str,
    factors: BTreeMap<String, f64>,
}

impl GwpTable {
    fn from_entries(version: &'static str, entries: &[(&str, f64)]) -> Self {
        let factors = entries
            .iter()
            .map(|(symbol, factor)| (symbol.to_string(), *factor))
            .collect();
        Self { version, factors }
    }

    /// Canonical identifier of the resolved version.
    pub fn version(&self) -> &str {
        self.version
    }

    /// Looks up a gas's equivalence factor; case-insensitive on the symbol.
    pub fn factor(&self, symbol: &str) -> Option<f64> {
        self.factors
            .get(&symbol.trim().to_ascii_uppercase())
            .copied()
    }

    /// The full symbol-to-factor mapping, keyed by upper-cased symbols.
    pub fn factors(&self) -> &BTreeMap<String, f64> {
        &self.factors
    }
}

/// Resolves a GWP version identifier to its reference table.
///
/// The identifier is trimmed and upper-cased before lookup, so `"ar5"`
/// resolves, but an unrecognized version fails with an
/// `unknown-gwp-version` error naming it.
pub fn resolve(version: &str) -> Result<GwpTable, GhgError> {
    match version.trim().to_ascii_uppercase().as_str() {
        "AR4" => Ok(GwpTable::from_entries("AR4", AR4)),
        "AR5" => Ok(GwpTable::from_entries("AR5", AR5)),
        "AR6" => Ok(GwpTable::from_entries("AR6", AR6)),
        _ => Err(GhgError::Gwp(
            ErrorInfo::new(
                "unknown-gwp-version",
                format!("unrecognized GWP version '{version}'"),
            )
            .with_context("version", version.to_string())
            .with_hint("supported versions: AR4, AR5, AR6"),
        )),
    }
}
