//! Triage labels and the expectation lookup consumed by the blame engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
    #[default]
    Untriaged,
}

/// Maps (test, digest) to a label. Anything unknown is Untriaged.
pub trait ExpectationLookup {
    fn label(&self, test_name: &str, digest: &str) -> Label;
}

impl<F> ExpectationLookup for F
where
    F: Fn(&str, &str) -> Label,
{
    fn label(&self, test_name: &str, digest: &str) -> Label {
        self(test_name, digest)
    }
}

/// test name -> digest -> label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expectations {
    labels: HashMap<String, HashMap<String, Label>>,
}

impl Expectations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, test_name: &str, digest: &str, label: Label) {
        self.labels
            .entry(test_name.to_string())
            .or_default()
            .insert(digest.to_string(), label);
    }

    pub fn len(&self) -> usize {
        self.labels.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ExpectationLookup for Expectations {
    fn label(&self, test_name: &str, digest: &str) -> Label {
        self.labels
            .get(test_name)
            .and_then(|digests| digests.get(digest))
            .copied()
            .unwrap_or_default()
    }
}
