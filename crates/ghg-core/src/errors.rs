//! Structured error types shared across the engine crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`GhgError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (activity id, EF key, field name, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the emission quantification engine.
///
/// Every failure is terminal for the calculation or run it occurs in; the
/// engine never retries and never returns partial results. The payload
/// carries the identifiers a caller needs to render an actionable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GhgError {
    /// Activity input errors (missing required fields, underivable quantity,
    /// non-numeric values).
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Formula language errors (syntax, unknown variable, division by zero).
    #[error("formula error: {0}")]
    Formula(ErrorInfo),
    /// GWP reference table errors (unrecognized version).
    #[error("gwp error: {0}")]
    Gwp(ErrorInfo),
    /// Emission factor configuration errors.
    #[error("factor error: {0}")]
    Factor(ErrorInfo),
    /// Record lookup errors (unknown EF key or activity id).
    #[error("store error: {0}")]
    Store(ErrorInfo),
    /// Serialization and hashing errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl GhgError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GhgError::Input(info)
            | GhgError::Formula(info)
            | GhgError::Gwp(info)
            | GhgError::Factor(info)
            | GhgError::Store(info)
            | GhgError::Serde(info) => info,
        }
    }

    /// Returns the same error with an extra context entry attached.
    pub fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            GhgError::Input(info) => GhgError::Input(info.with_context(key, value)),
            GhgError::Formula(info) => GhgError::Formula(info.with_context(key, value)),
            GhgError::Gwp(info) => GhgError::Gwp(info.with_context(key, value)),
            GhgError::Factor(info) => GhgError::Factor(info.with_context(key, value)),
            GhgError::Store(info) => GhgError::Store(info.with_context(key, value)),
            GhgError::Serde(info) => GhgError::Serde(info.with_context(key, value)),
        }
    }
}
