//! Policy store and matcher
//!
//! The store is built once at startup and never mutated; request handlers share
//! it behind an `Arc` without locking.

use crate::error::Result;
use crate::types::PolicyRecord;

/// Policy text used when no record matches the airline
pub const NO_POLICY_FALLBACK: &str = "No compensation policy available for this flight.";

/// Clauses of every record matching one airline, in corpus order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedPolicy {
    pub commits: Vec<String>,
    pub does_not_commit: Vec<String>,
}

impl MergedPolicy {
    /// Render both sections as bulleted lists.
    ///
    /// An empty section still renders its heading and bullet so the prompt
    /// layout does not depend on the corpus content.
    pub fn render(&self) -> String {
        format!(
            "Commits:\n- {}\n\nDoes Not Commit:\n- {}",
            self.commits.join("\n- "),
            self.does_not_commit.join("\n- ")
        )
    }
}

/// Read-only collection of airline commitment records
#[derive(Debug, Clone, Default)]
pub struct PolicyStore {
    records: Vec<PolicyRecord>,
}

impl PolicyStore {
    pub fn new(records: Vec<PolicyRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON corpus (an array of records)
    pub fn from_json(content: &str) -> Result<Self> {
        let records: Vec<PolicyRecord> = serde_json::from_str(content)?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PolicyRecord] {
        &self.records
    }

    /// Records whose airline equals `airline`, ignoring case
    pub fn matching<'a>(&'a self, airline: &str) -> impl Iterator<Item = &'a PolicyRecord> + 'a {
        let wanted = airline.to_lowercase();
        self.records
            .iter()
            .filter(move |p| p.airline.to_lowercase() == wanted)
    }

    /// Merge every matching record regardless of policy type, `None` when nothing matches
    pub fn merged_for(&self, airline: &str) -> Option<MergedPolicy> {
        let mut merged = MergedPolicy::default();
        let mut matched = false;

        for record in self.matching(airline) {
            matched = true;
            merged.commits.extend(record.commits.iter().cloned());
            merged.does_not_commit.extend(record.does_not_commit.iter().cloned());
        }

        matched.then_some(merged)
    }

    /// Policy text for the prompt: the merged clauses or the fallback sentence
    pub fn policy_text_for(&self, airline: &str) -> String {
        self.merged_for(airline)
            .map(|merged| merged.render())
            .unwrap_or_else(|| NO_POLICY_FALLBACK.to_string())
    }
}
