//! Canonical content hashing for run reports.

use ghg_core::{ErrorInfo, GhgError, RunDetails};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Computes a stable hexadecimal hash for the provided serializable payload.
///
/// All engine mappings are `BTreeMap`s, so serialization order, and
/// therefore the digest, is deterministic.
pub fn hash_json<T: Serialize>(value: &T) -> Result<String, GhgError> {
    let json = serde_json::to_vec(value)
        .map_err(|err| GhgError::Serde(ErrorInfo::new("json-encode", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(json);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Computes the canonical hash stamped on a run result.
pub fn hash_run_details(run_type: &str, details: &RunDetails) -> Result<String, GhgError> {
    #[derive(Serialize)]
    struct Payload<'a> {
        run_type: &'a str,
        details: &'a RunDetails,
    }

    hash_json(&Payload { run_type, details })
}
