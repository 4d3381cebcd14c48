//! Airline commitment records

use serde::{Deserialize, Deserializer, Serialize};

/// Disruption type a policy record covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyType {
    Cancellation,
    Delay,
    Unknown,
}

impl PolicyType {
    /// Parse the corpus label. The corpus uses the plural card titles
    /// ("cancellations", "delays"); anything else is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "cancellation" | "cancellations" => PolicyType::Cancellation,
            "delay" | "delays" => PolicyType::Delay,
            _ => PolicyType::Unknown,
        }
    }
}

impl Default for PolicyType {
    fn default() -> Self {
        PolicyType::Unknown
    }
}

impl<'de> Deserialize<'de> for PolicyType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map(PolicyType::from_label).unwrap_or_default())
    }
}

/// What one airline does and does not commit to for one disruption type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub airline: String,

    #[serde(default)]
    pub policy_type: PolicyType,

    #[serde(default)]
    pub commits: Vec<String>,

    #[serde(default)]
    pub does_not_commit: Vec<String>,
}

impl PolicyRecord {
    /// Create a record with no clauses
    pub fn new(airline: impl Into<String>, policy_type: PolicyType) -> Self {
        Self {
            airline: airline.into(),
            policy_type,
            commits: Vec::new(),
            does_not_commit: Vec::new(),
        }
    }

    /// Set committed clauses
    pub fn with_commits<I, S>(mut self, commits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commits = commits.into_iter().map(Into::into).collect();
        self
    }

    /// Set non-committed clauses
    pub fn with_does_not_commit<I, S>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.does_not_commit = clauses.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_type_labels() {
        assert_eq!(PolicyType::from_label("cancellations"), PolicyType::Cancellation);
        assert_eq!(PolicyType::from_label("Cancellation"), PolicyType::Cancellation);
        assert_eq!(PolicyType::from_label("delays"), PolicyType::Delay);
        assert_eq!(PolicyType::from_label(""), PolicyType::Unknown);
        assert_eq!(PolicyType::from_label("baggage"), PolicyType::Unknown);
    }

    #[test]
    fn test_deserialize_corpus_entry() {
        let json = r#"{
            "airline": "Delta Air Lines",
            "policy_type": "delays",
            "commits": ["Meal voucher for 3+ hour delay"],
            "does_not_commit": ["Cash compensation"]
        }"#;

        let record: PolicyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.airline, "Delta Air Lines");
        assert_eq!(record.policy_type, PolicyType::Delay);
        assert_eq!(record.commits, vec!["Meal voucher for 3+ hour delay"]);
        assert_eq!(record.does_not_commit, vec!["Cash compensation"]);
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let record: PolicyRecord =
            serde_json::from_str(r#"{"airline": "Acme Air", "policy_type": null}"#).unwrap();
        assert_eq!(record.policy_type, PolicyType::Unknown);
        assert!(record.commits.is_empty());
        assert!(record.does_not_commit.is_empty());
    }
}
