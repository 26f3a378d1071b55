//! Fixture replay against the formatting engine.

use bracefmt_core::Formatter;

use crate::fixtures::{FixtureSet, arg_list};
use crate::verify::CaseResult;

/// Replays fixture cases through the engine and records pass/fail.
#[derive(Debug)]
pub struct TestRunner {
    /// Campaign name, used to tag results in logs and reports.
    campaign: String,
}

impl TestRunner {
    /// Create a runner for a named verification campaign.
    #[must_use]
    pub fn new(campaign: &str) -> Self {
        Self {
            campaign: campaign.to_string(),
        }
    }

    /// Campaign name this runner was created with.
    #[must_use]
    pub fn campaign(&self) -> &str {
        &self.campaign
    }

    /// Run all cases in a fixture set.
    #[must_use]
    pub fn run(&self, set: &FixtureSet) -> Vec<CaseResult> {
        set.cases
            .iter()
            .map(|case| {
                let formatter = Formatter::new(case.template.clone(), arg_list(&case.args));
                let rendered = match formatter.render_to_string() {
                    Ok(text) => text,
                    Err(err) => format!("<render error: {err}>"),
                };
                CaseResult::compare(&case.name, &case.template, &case.expected, rendered)
            })
            .collect()
    }
}
