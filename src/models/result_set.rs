//! Caller-side collection of expiry results

use super::DomainExpiryResult;

/// Results keyed by domain. A newer result for a domain replaces the older
/// one and moves to the end; no history is kept.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    results: Vec<DomainExpiryResult>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, replacing any earlier result for the same domain
    pub fn upsert(&mut self, result: DomainExpiryResult) {
        self.results.retain(|r| r.domain != result.domain);
        self.results.push(result);
    }

    pub fn get(&self, domain: &str) -> Option<&DomainExpiryResult> {
        self.results.iter().find(|r| r.domain == domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainExpiryResult> {
        self.results.iter()
    }

    pub fn as_slice(&self) -> &[DomainExpiryResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
