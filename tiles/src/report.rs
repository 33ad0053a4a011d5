//! Deterministic JSON artifact of a solve run.
//!
//! The report is in-memory bytes plus a domain-separated SHA-256 content
//! digest; callers decide whether to write it to disk. `serde_json` maps
//! serialize in key order, so the bytes are stable across runs and the
//! digest can be locked in cross-process tests.

use std::fmt;

use sha2::{Digest, Sha256};

use wayfind_engine::path::Path;

use crate::board::TileBoard;
use crate::solve::SolveOutcome;

/// Domain prefix for solve-report content hashing. Null-terminated.
pub const DOMAIN_SOLVE_REPORT: &[u8] = b"WAYFIND::SOLVE_REPORT::V1\0";

/// Typed failure for report construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// JSON serialization failed.
    Serialize { detail: String },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize { detail } => write!(f, "report serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// The solve-report artifact: canonical bytes plus content digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReportV1 {
    /// JSON bytes with stable key order.
    pub bytes: Vec<u8>,
    /// `"sha256:<hex>"` digest of the bytes under [`DOMAIN_SOLVE_REPORT`].
    pub digest: String,
}

/// Compute the domain-separated content digest of a byte slice.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn content_digest(domain: &[u8], data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// Build the report artifact for a solve run.
///
/// # Errors
///
/// Returns [`ReportError::Serialize`] if JSON serialization fails.
pub fn build_report(
    start: &TileBoard,
    outcome: &SolveOutcome,
) -> Result<SolveReportV1, ReportError> {
    let actions: Vec<&str> = outcome
        .solution
        .as_ref()
        .map(|p| p.action_labels().collect())
        .unwrap_or_default();
    let total_cost = outcome.solution.as_ref().map(Path::total_cost);

    let json = serde_json::json!({
        "artifact": "solve_report",
        "version": 1,
        "start": start.to_digits(),
        "solved": outcome.solution.is_some(),
        "total_cost": total_cost,
        "actions": actions,
        "stats": {
            "expansions": outcome.stats.expansions,
            "admitted": outcome.stats.admitted,
            "suppressed": outcome.stats.suppressed,
            "frontier_high_water": outcome.stats.frontier_high_water,
        },
    });

    let bytes = serde_json::to_vec(&json).map_err(|e| ReportError::Serialize {
        detail: e.to_string(),
    })?;
    let digest = content_digest(DOMAIN_SOLVE_REPORT, &bytes);
    Ok(SolveReportV1 { bytes, digest })
}
