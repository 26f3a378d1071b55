//! Case outcomes and suite tallies for fixture replay.

use serde::{Deserialize, Serialize};

use crate::diff::render_diff;

/// Outcome of replaying one fixture case through the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    /// Fixture case name.
    pub case: String,
    /// Template the case rendered.
    pub template: String,
    /// Whether the rendered output matched the expectation.
    pub passed: bool,
    /// Output the fixture pinned.
    pub expected: String,
    /// Output the engine produced.
    pub rendered: String,
    /// Line diff against the expectation, present only on mismatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl CaseResult {
    /// Compares `rendered` against `expected`, attaching a diff on mismatch.
    #[must_use]
    pub fn compare(case: &str, template: &str, expected: &str, rendered: String) -> Self {
        let passed = rendered == expected;
        let diff = if passed {
            None
        } else {
            Some(render_diff(expected, &rendered))
        };
        Self {
            case: case.to_string(),
            template: template.to_string(),
            passed,
            expected: expected.to_string(),
            rendered,
            diff,
        }
    }
}

/// Tallied outcomes for one replay run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Per-case outcomes, in replay order.
    pub results: Vec<CaseResult>,
}

impl SuiteSummary {
    /// Tallies a run's case results.
    #[must_use]
    pub fn collect(results: Vec<CaseResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    /// Whether every case matched its expectation.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Failing cases, in replay order.
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}
