#![deny(missing_docs)]
#![doc = "Core data model, error taxonomy and store contracts for the GHG \
emission quantification engine."]

pub mod errors;
mod patch;
pub mod provenance;
pub mod store;
pub mod trace;
mod types;

pub use errors::{ErrorInfo, GhgError};
pub use patch::EmissionFactorPatch;
pub use provenance::SchemaVersion;
pub use store::{InMemoryStore, RecordStore};
pub use trace::{
    ActivityTrace, ConversionMethod, DerivationMethod, QuantityTrace, RunDetails, RunResult,
    RunRow,
};
pub use types::{
    numeric_inputs, numeric_value, Activity, ActivityIdFieldsSpec, EmissionFactor, FormulaSpec,
    GasBreakdown,
};
