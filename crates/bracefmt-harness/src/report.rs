//! Report generation for conformance results.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::verify::SuiteSummary;

/// Hex SHA-256 digest of raw artifact bytes.
#[must_use]
pub fn artifact_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Hex SHA-256 digest of a fixture payload, for pinning report inputs.
#[must_use]
pub fn fixture_digest(json: &str) -> String {
    artifact_digest(json.as_bytes())
}

/// A conformance report combining verification results and provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Suite name the report covers.
    pub suite: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// SHA-256 of the fixture JSON that produced these results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_digest: Option<String>,
    /// Tallied case outcomes.
    pub summary: SuiteSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Suite: {}\n", self.suite));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        if let Some(digest) = &self.fixture_digest {
            out.push_str(&format!("- Fixture digest: {digest}\n"));
        }
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Template | Status |\n");
        out.push_str("|------|----------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("| {} | `{}` | {} |\n", r.case, r.template, status));
        }

        if !self.summary.all_passed() {
            out.push_str("\n## Failures\n");
            for r in self.summary.failures() {
                out.push_str(&format!("\n### {}\n\n", r.case));
                if let Some(diff) = &r.diff {
                    out.push_str(&format!("```\n{diff}\n```\n"));
                }
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
