//! Unmatched local and target columns.

use serde::Serialize;

/// The columns still available for pairing.
///
/// Both lists keep their initial order and only ever shrink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidatePool {
    locals: Vec<String>,
    targets: Vec<String>,
}

impl CandidatePool {
    /// Create a pool; repeated names are kept once, at their first position.
    pub fn new(locals: Vec<String>, targets: Vec<String>) -> Self {
        Self {
            locals: dedup(locals),
            targets: dedup(targets),
        }
    }

    /// Unmatched local columns, in order.
    pub fn locals(&self) -> &[String] {
        &self.locals
    }

    /// Unmatched target columns, in order.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn has_local(&self, name: &str) -> bool {
        self.locals.iter().any(|c| c == name)
    }

    pub fn has_target(&self, name: &str) -> bool {
        self.targets.iter().any(|c| c == name)
    }

    /// Returns true once every local column has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.locals.is_empty()
    }

    pub(crate) fn remove_local(&mut self, name: &str) {
        self.locals.retain(|c| c != name);
    }

    pub(crate) fn remove_target(&mut self, name: &str) {
        self.targets.retain(|c| c != name);
    }
}

fn dedup(names: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn keeps_first_occurrence() {
        let pool = CandidatePool::new(names(&["b", "a", "b"]), names(&["x"]));
        assert_eq!(pool.locals(), &["b", "a"]);
    }

    #[test]
    fn removal_preserves_order() {
        let mut pool = CandidatePool::new(names(&["a", "b", "c"]), names(&["x", "y"]));
        pool.remove_local("b");
        pool.remove_target("x");
        assert_eq!(pool.locals(), &["a", "c"]);
        assert_eq!(pool.targets(), &["y"]);
        assert!(!pool.has_local("b"));
        assert!(pool.has_target("y"));
        assert!(!pool.is_exhausted());
    }
}
