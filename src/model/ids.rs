//! Identifier generation.
//!
//! Ids are `<prefix>-<n>` with `n` drawn from a counter owned by the
//! generator, so two generators never interfere and the same sequence of
//! calls always yields the same ids.

use super::document::Document;

/// Monotonic id source.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// A generator whose ids cannot collide with any `<prefix>-<n>` id
    /// already present in `doc`.
    pub fn after(doc: &Document) -> Self {
        let highest = doc
            .ids()
            .filter_map(|id| id.rsplit('-').next()?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            next: highest.saturating_add(1),
        }
    }

    pub fn next_id(&mut self, prefix: &str) -> String {
        let n = self.next.max(1);
        self.next = n.saturating_add(1);
        format!("{prefix}-{n}")
    }
}
