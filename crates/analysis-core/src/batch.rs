//! Collection of per-subject outcomes across a batch.

use std::collections::HashSet;
use std::fmt::Display;

use serde::Serialize;

use crate::summary::SubjectSummary;

/// An input that could not be analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectFailure {
    /// Where the record came from (usually a file path).
    pub source: String,
    pub reason: String,
}

/// Summaries and failures gathered from a batch, in any completion order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    summaries: Vec<SubjectSummary>,
    failures: Vec<SubjectFailure>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one input.
    pub fn record<E: Display>(
        &mut self,
        source: impl Into<String>,
        outcome: Result<SubjectSummary, E>,
    ) {
        match outcome {
            Ok(summary) => self.summaries.push(summary),
            Err(e) => {
                let failure = SubjectFailure {
                    source: source.into(),
                    reason: e.to_string(),
                };
                tracing::warn!("Skipping {}: {}", failure.source, failure.reason);
                self.failures.push(failure);
            }
        }
    }

    /// Sort summaries by subject id and failures by source.
    pub fn finish(mut self) -> Self {
        self.summaries.sort_by(|a, b| a.subject_id.cmp(&b.subject_id));
        self.failures.sort_by(|a, b| a.source.cmp(&b.source));

        let mut seen = HashSet::new();
        for summary in &self.summaries {
            if !seen.insert(summary.subject_id.as_str()) {
                tracing::warn!(
                    "Subject {} appears in more than one record",
                    summary.subject_id
                );
            }
        }

        self
    }

    pub fn summaries(&self) -> &[SubjectSummary] {
        &self.summaries
    }

    pub fn failures(&self) -> &[SubjectFailure] {
        &self.failures
    }

    /// Number of inputs recorded so far.
    pub fn len(&self) -> usize {
        self.summaries.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
